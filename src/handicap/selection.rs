/// How many of the best differentials count, and the low-sample adjustment
/// applied to their average.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    pub scores_used: usize,
    pub adjustment: f64,
}

/// World Handicap System selection table. `None` below 3 scores (no index);
/// capped at the best 8 above 20 scores.
///
/// Exactly 6 scores carries the -1.0 adjustment. An older revision of this
/// ladder skipped the adjustment whenever 7 or more scores had ever been
/// posted; that was a defect against the WHS table, not behavior to keep.
#[must_use]
pub fn selection(total_scores: usize) -> Option<Selection> {
    let (scores_used, adjustment) = match total_scores {
        0..=2 => return None,
        3 => (1, -2.0),
        4 => (1, -1.0),
        5 => (1, 0.0),
        6 => (2, -1.0),
        7..=8 => (2, 0.0),
        9..=11 => (3, 0.0),
        12..=14 => (4, 0.0),
        15..=16 => (5, 0.0),
        17..=18 => (6, 0.0),
        19 => (7, 0.0),
        _ => (8, 0.0),
    };
    Some(Selection {
        scores_used,
        adjustment,
    })
}

/// Number of best differentials averaged for a given score count; 0 when no
/// index can be established.
#[must_use]
pub fn scores_used(total_scores: usize) -> usize {
    selection(total_scores).map_or(0, |s| s.scores_used)
}
