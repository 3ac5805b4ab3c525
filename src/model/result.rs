use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::HolesPlayed;

/// One input round annotated with its 18-hole-equivalent differential and
/// whether it landed in the best-K set.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ScoreDetail {
    pub id: i64,
    pub gross_score: i32,
    pub date_played: NaiveDate,
    pub holes_played: HolesPlayed,
    pub course_name: Option<String>,
    pub course_rating: f64,
    pub slope_rating: i32,
    pub par: Option<i32>,
    pub differential: f64,
    pub used_in_calculation: bool,
}

/// Full handicap computation result for one golfer.
///
/// `average_differential` repeats the final index (it is already adjusted),
/// matching what the scores API has always reported. `skipped_rounds` lists
/// ids of rounds excluded for incomplete course data.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct HandicapResult {
    pub handicap_index: Option<f64>,
    pub total_scores: usize,
    pub scores_used: usize,
    pub average_differential: Option<f64>,
    pub scores: Vec<ScoreDetail>,
    pub skipped_rounds: Vec<i64>,
    pub minimum_scores_needed: usize,
    pub status: String,
}
