use chrono::NaiveDate;
use golf_handicap::model::{CourseSnapshot, HolesPlayed, Round};

/// Build a round on a course with the given rating and slope.
pub fn round(
    id: i64,
    gross_score: i32,
    date: &str,
    holes_played: HolesPlayed,
    course_rating: f64,
    slope_rating: i32,
) -> Round {
    Round {
        id,
        gross_score,
        date_played: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        holes_played,
        course: CourseSnapshot {
            name: Some("Test Links".to_string()),
            course_rating: Some(course_rating),
            slope_rating: Some(slope_rating),
            par: Some(72),
        },
    }
}

/// 18-hole round on a standard course (rating 72.0, slope 113), so the
/// differential is exactly `gross_score - 72`.
pub fn standard_round(id: i64, gross_score: i32, date: &str) -> Round {
    round(id, gross_score, date, HolesPlayed::Eighteen, 72.0, 113)
}

/// 18-hole round on a standard-slope course whose rating is chosen so the
/// differential comes out to `differential` exactly (gross fixed at 90).
pub fn round_with_differential(id: i64, differential: f64, date: &str) -> Round {
    round(
        id,
        90,
        date,
        HolesPlayed::Eighteen,
        90.0 - differential,
        113,
    )
}
