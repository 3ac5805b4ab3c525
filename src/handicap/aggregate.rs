use crate::handicap::selection::selection;

/// Outcome of one aggregation pass over a differential list.
///
/// `used_positions` are indexes into the input slice, so callers can mark the
/// originating rounds without re-deriving the sort.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregate {
    pub handicap_index: Option<f64>,
    pub scores_used: usize,
    pub used_positions: Vec<usize>,
}

impl Aggregate {
    fn none() -> Self {
        Aggregate {
            handicap_index: None,
            scores_used: 0,
            used_positions: Vec::new(),
        }
    }
}

/// Average the best K differentials per the WHS selection table, apply the
/// low-sample adjustment, and round to one decimal.
///
/// The sort runs over an index permutation and is stable, so equal
/// differentials keep their input order and exactly K positions are marked
/// used even when duplicates straddle the cutoff. The input slice itself is
/// never reordered.
#[must_use]
pub fn aggregate(differentials: &[f64]) -> Aggregate {
    let Some(sel) = selection(differentials.len()) else {
        return Aggregate::none();
    };

    let mut order: Vec<usize> = (0..differentials.len()).collect();
    order.sort_by(|&a, &b| differentials[a].total_cmp(&differentials[b]));
    order.truncate(sel.scores_used);

    let sum: f64 = order.iter().map(|&i| differentials[i]).sum();
    let average = sum / sel.scores_used as f64;
    let handicap_index = round_to_tenth(average + sel.adjustment);

    Aggregate {
        handicap_index: Some(handicap_index),
        scores_used: sel.scores_used,
        used_positions: order,
    }
}

/// Round to one decimal place. Halves round away from zero (`f64::round`),
/// i.e. round-half-up for the positive indexes seen in practice.
#[must_use]
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
