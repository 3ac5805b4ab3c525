use crate::model::{HolesPlayed, PreparedRound};

/// Slope rating of a course of standard difficulty.
pub const STANDARD_SLOPE: f64 = 113.0;

/// USGA score differential: gross score relative to course difficulty,
/// normalized to the standard slope. No rounding here; rounding happens once,
/// at final aggregation.
///
/// Callers must have validated `slope_rating > 0`.
#[must_use]
pub fn differential(gross_score: f64, course_rating: f64, slope_rating: f64) -> f64 {
    (gross_score - course_rating) * STANDARD_SLOPE / slope_rating
}

/// Differential under the non-blended policy: a 9-hole round halves the
/// course rating to approximate a 9-hole expected score, and the result is
/// treated as already 18-hole-equivalent. Slope is left whole either way;
/// that asymmetry is the long-observed behavior and is kept as-is.
#[must_use]
pub fn simple_differential(round: &PreparedRound) -> f64 {
    let rating = match round.holes_played {
        HolesPlayed::Eighteen => round.course_rating,
        HolesPlayed::Nine => round.course_rating / 2.0,
    };
    differential(round.gross_score, rating, round.slope_rating)
}

/// Playing handicap for a specific course:
/// `round(index × slope / 113 + (rating − par))`.
#[must_use]
pub fn course_handicap(handicap_index: f64, slope_rating: i32, course_rating: f64, par: i32) -> i32 {
    let raw = handicap_index * f64::from(slope_rating) / STANDARD_SLOPE
        + (course_rating - f64::from(par));
    raw.round() as i32
}
