use std::fmt;

/// Errors raised while computing a handicap index.
///
/// Insufficient rounds is deliberately not here; it is a normal result state
/// carried by `HandicapResult`, not a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandicapError {
    /// Slope rating missing, zero, or negative on a round that needs a
    /// differential. Fatal to the whole computation.
    InvalidCourseData { round_id: i64 },
    /// A required numeric field is missing or unusable; the round is
    /// excluded from the computation.
    MalformedRound {
        round_id: i64,
        missing: &'static str,
    },
}

impl fmt::Display for HandicapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandicapError::InvalidCourseData { round_id } => write!(
                f,
                "invalid course data for round {round_id}: slope rating is missing or not positive"
            ),
            HandicapError::MalformedRound { round_id, missing } => {
                write!(f, "round {round_id} is missing {missing}")
            }
        }
    }
}

impl std::error::Error for HandicapError {}
