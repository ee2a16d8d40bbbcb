use thiserror::Error;

/// Reasons a single line cannot become a task item.
///
/// These never abort a batch; the batch parser records them next to the
/// offending line and moves on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The line contains no tokens at all
    #[error("line is blank")]
    Blank,
    /// Every token was consumed by the completion/priority/date header
    #[error("line has no description after its header tokens")]
    MissingBody,
}

/// Invalid due-date threshold configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThresholdError {
    #[error("due threshold '{0}' must be greater than zero")]
    Zero(&'static str),

    #[error("due thresholds must satisfy day <= week <= month (got day={day}, week={week}, month={month})")]
    Unordered { day: i64, week: i64, month: i64 },
}
