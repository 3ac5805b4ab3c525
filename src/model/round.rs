use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of holes a round was played over.
///
/// Serialized as the raw hole count (9 or 18). Legacy score records predate
/// the field, so a missing value deserializes as 18.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(try_from = "u8", into = "u8")]
pub enum HolesPlayed {
    Nine,
    Eighteen,
}

impl Default for HolesPlayed {
    fn default() -> Self {
        HolesPlayed::Eighteen
    }
}

impl TryFrom<u8> for HolesPlayed {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            9 => Ok(HolesPlayed::Nine),
            18 => Ok(HolesPlayed::Eighteen),
            other => Err(format!("holes_played must be 9 or 18, got {other}")),
        }
    }
}

impl From<HolesPlayed> for u8 {
    fn from(value: HolesPlayed) -> Self {
        match value {
            HolesPlayed::Nine => 9,
            HolesPlayed::Eighteen => 18,
        }
    }
}

/// Course data as it stood when the round was posted. Read-only to the
/// engine; rating and slope stay optional so the engine can classify
/// incomplete records itself instead of failing at deserialization.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CourseSnapshot {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub course_rating: Option<f64>,
    #[serde(default)]
    pub slope_rating: Option<i32>,
    #[serde(default)]
    pub par: Option<i32>,
}

/// One posted score. Immutable input to the engine.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Round {
    pub id: i64,
    pub gross_score: i32,
    pub date_played: NaiveDate,
    #[serde(default)]
    pub holes_played: HolesPlayed,
    pub course: CourseSnapshot,
}

/// A round whose course data passed validation, with the numeric fields
/// widened for differential arithmetic. `pos` is the round's position in the
/// computation's usable-round list, which fixes tie-break order everywhere
/// downstream.
#[derive(Clone, Debug)]
pub struct PreparedRound {
    pub pos: usize,
    pub id: i64,
    pub gross_score: f64,
    pub course_rating: f64,
    pub slope_rating: f64,
    pub holes_played: HolesPlayed,
    pub date_played: NaiveDate,
}
