use tracing::warn;

use crate::error::HandicapError;
use crate::handicap::aggregate::aggregate;
use crate::handicap::blend::blend_chronological;
use crate::handicap::differential::simple_differential;
use crate::model::{HandicapResult, PreparedRound, Round, ScoreDetail};

/// Minimum usable rounds before an index can be established.
pub const MIN_ROUNDS_FOR_INDEX: usize = 3;

/// Engine policy switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandicapConfig {
    /// Blend 9-hole rounds against the running index (the authoritative
    /// policy). Disabled, 9-hole rounds are treated as 18-hole-equivalent
    /// after halving the course rating.
    pub nine_hole_blending: bool,
}

impl Default for HandicapConfig {
    fn default() -> Self {
        HandicapConfig {
            nine_hole_blending: true,
        }
    }
}

/// Compute a golfer's handicap index from their posted rounds.
///
/// Pure function of its inputs: the caller's rounds are never mutated, and
/// nothing is cached between invocations. Rounds with missing course rating
/// are skipped with a warning and reported in `skipped_rounds`; a missing or
/// non-positive slope rating aborts the whole computation instead, since a
/// differential cannot be defined for it.
pub fn calculate_handicap(
    rounds: &[Round],
    config: &HandicapConfig,
) -> Result<HandicapResult, HandicapError> {
    let mut prepared: Vec<PreparedRound> = Vec::with_capacity(rounds.len());
    let mut originals: Vec<&Round> = Vec::with_capacity(rounds.len());
    let mut skipped_rounds: Vec<i64> = Vec::new();

    for round in rounds {
        match prepare_round(prepared.len(), round)? {
            Some(p) => {
                prepared.push(p);
                originals.push(round);
            }
            None => skipped_rounds.push(round.id),
        }
    }

    let differentials = if config.nine_hole_blending {
        blended_differentials(&prepared)
    } else {
        prepared.iter().map(simple_differential).collect()
    };

    // Final pass over the complete differential list decides the reported
    // index and which rounds counted.
    let agg = aggregate(&differentials);
    let mut used = vec![false; prepared.len()];
    for &pos in &agg.used_positions {
        used[pos] = true;
    }

    let scores: Vec<ScoreDetail> = prepared
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let round = originals[i];
            ScoreDetail {
                id: round.id,
                gross_score: round.gross_score,
                date_played: round.date_played,
                holes_played: round.holes_played,
                course_name: round.course.name.clone(),
                course_rating: p.course_rating,
                slope_rating: p.slope_rating as i32,
                par: round.course.par,
                differential: differentials[i],
                used_in_calculation: used[i],
            }
        })
        .collect();

    let total_scores = prepared.len();
    let minimum_scores_needed = MIN_ROUNDS_FOR_INDEX.saturating_sub(total_scores);
    let status = if total_scores == 0 {
        "No scores posted yet".to_string()
    } else if agg.handicap_index.is_none() {
        format!("Need {minimum_scores_needed} more score(s) to establish handicap")
    } else {
        "Handicap established".to_string()
    };

    Ok(HandicapResult {
        handicap_index: agg.handicap_index,
        total_scores,
        scores_used: agg.scores_used,
        average_differential: agg.handicap_index,
        scores,
        skipped_rounds,
        minimum_scores_needed,
        status,
    })
}

/// Validate one round's course data. `Ok(None)` means the round is excluded
/// from the computation; a bad slope is fatal because every policy needs it
/// as a divisor.
fn prepare_round(pos: usize, round: &Round) -> Result<Option<PreparedRound>, HandicapError> {
    let slope_rating = round.course.slope_rating.unwrap_or(0);
    if slope_rating <= 0 {
        return Err(HandicapError::InvalidCourseData { round_id: round.id });
    }

    let course_rating = match round.course.course_rating {
        Some(rating) if rating.is_finite() => rating,
        _ => {
            let err = HandicapError::MalformedRound {
                round_id: round.id,
                missing: "course_rating",
            };
            warn!("skipping round: {err}");
            return Ok(None);
        }
    };

    Ok(Some(PreparedRound {
        pos,
        id: round.id,
        gross_score: f64::from(round.gross_score),
        course_rating,
        slope_rating: f64::from(slope_rating),
        holes_played: round.holes_played,
        date_played: round.date_played,
    }))
}

/// Order rounds by date (ties keep input order), blend, then lay the
/// differentials back out in input order.
fn blended_differentials(prepared: &[PreparedRound]) -> Vec<f64> {
    let mut chronological: Vec<&PreparedRound> = prepared.iter().collect();
    chronological.sort_by(|a, b| a.date_played.cmp(&b.date_played));

    let mut differentials = vec![0.0; prepared.len()];
    for blended in blend_chronological(&chronological) {
        differentials[blended.pos] = blended.differential;
    }
    differentials
}
