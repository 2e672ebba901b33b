use std::{
    fmt::{Debug, Display, Formatter},
    str::FromStr,
};

use chrono::Timelike;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::core::interval::Interval;

/// SEK per kilowatt-hour shown as öre with the Swedish decimal comma.
pub struct FormattedOre(pub f64);

impl Debug for FormattedOre {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for FormattedOre {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let ore = self.0 * 100.0;

        // Halves round away from zero on the shortest decimal form, not on the binary value.
        let ore = match Decimal::from_str(&ore.to_string()) {
            Ok(ore) => {
                let ore = ore.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
                format!("{ore:.2}")
            }
            Err(_) => format!("{ore:.2}"),
        };
        f.write_str(&ore.replacen('.', ",", 1))
    }
}

/// Start and end hours, `HH-HH`.
pub struct FormattedHours(pub Interval);

impl Display for FormattedHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}-{:02}", self.0.start.hour(), self.0.end.hour())
    }
}
