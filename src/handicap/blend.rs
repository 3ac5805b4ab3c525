use tracing::debug;

use crate::handicap::aggregate::aggregate;
use crate::handicap::differential::differential;
use crate::model::{HolesPlayed, PreparedRound};

/// An 18-hole-equivalent differential tied back to the round's position in
/// the caller's input list.
#[derive(Debug, Clone, PartialEq)]
pub struct BlendedDifferential {
    pub pos: usize,
    pub id: i64,
    pub differential: f64,
}

/// Blend 9-hole rounds into 18-hole-equivalent differentials by replaying
/// the golfer's history oldest to newest.
///
/// An 18-hole round contributes its plain differential. A 9-hole round
/// contributes its half-rating differential plus half the golfer's index *as
/// of that date*; before an index is established the expectation is 0. After
/// every round the running index is recomputed over the differentials so
/// far, which is what makes the expectation date-accurate. Inherently
/// sequential; each step depends on the previous running index.
///
/// `rounds` must already be sorted by date (ties in input order). Output
/// preserves that order.
#[must_use]
pub fn blend_chronological(rounds: &[&PreparedRound]) -> Vec<BlendedDifferential> {
    let mut running: Vec<f64> = Vec::with_capacity(rounds.len());
    let mut current_index: Option<f64> = None;
    let mut blended = Vec::with_capacity(rounds.len());

    for round in rounds {
        let diff = match round.holes_played {
            HolesPlayed::Eighteen => {
                differential(round.gross_score, round.course_rating, round.slope_rating)
            }
            HolesPlayed::Nine => {
                let expected_nine = current_index.map_or(0.0, |index| index / 2.0);
                differential(
                    round.gross_score,
                    round.course_rating / 2.0,
                    round.slope_rating,
                ) + expected_nine
            }
        };
        running.push(diff);

        if let Some(index) = aggregate(&running).handicap_index {
            debug!(
                round_id = round.id,
                running_index = index,
                "running index updated"
            );
            current_index = Some(index);
        }

        blended.push(BlendedDifferential {
            pos: round.pos,
            id: round.id,
            differential: diff,
        });
    }

    blended
}
