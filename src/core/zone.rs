use std::str::FromStr;

/// Swedish electricity price zone («elområde»).
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, derive_more::Display)]
pub enum Zone {
    /// Luleå.
    #[display("SE1")]
    Se1,

    /// Sundsvall.
    #[display("SE2")]
    Se2,

    /// Stockholm.
    #[display("SE3")]
    Se3,

    /// Malmö.
    #[display("SE4")]
    Se4,
}

impl FromStr for Zone {
    type Err = UnknownZone;

    /// Zone codes are matched case-sensitively.
    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code {
            "SE1" => Ok(Self::Se1),
            "SE2" => Ok(Self::Se2),
            "SE3" => Ok(Self::Se3),
            "SE4" => Ok(Self::Se4),
            _ => Err(UnknownZone),
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown price zone")]
pub struct UnknownZone;
