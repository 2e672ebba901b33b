use chrono::NaiveDate;

/// Terminal conditions reported to the user instead of a price report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("fel: zone required")]
    MissingZone,

    #[error("fel: ogiltig zon {0}")]
    InvalidZone(String),

    #[error("fel: ogiltigt datum {0}")]
    InvalidDate(String),

    #[error("Felaktigt värde för {0}")]
    InvalidChargingDuration(String),

    #[error("inga priser tillgängliga för {0}")]
    NoPrices(NaiveDate),

    #[error(
        "för få priser för laddningsfönstret: {requested} behövs, {available} tillgängliga"
    )]
    InsufficientData { requested: usize, available: usize },
}

impl ReportError {
    /// Process exit status for the condition.
    ///
    /// Missing prices are not a failure: the source simply has not published them yet.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::MissingZone
            | Self::InvalidZone(_)
            | Self::InvalidDate(_)
            | Self::InvalidChargingDuration(_) => 2,
            Self::NoPrices(_) => 0,
            Self::InsufficientData { .. } => 1,
        }
    }
}
