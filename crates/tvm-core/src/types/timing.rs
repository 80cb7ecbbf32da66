//! Payment timing within a period.

use serde::{Deserialize, Serialize};
use std::fmt;

/// When periodic payments fall within each period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentTiming {
    /// Payments at period end (ordinary annuity). Excel `type = 0`.
    #[default]
    End,
    /// Payments at period start (annuity due). Excel `type = 1`.
    Begin,
}

impl PaymentTiming {
    /// Multiplier applied to the ordinary annuity factor.
    ///
    /// `1 + rate` for payments at the start of the period, `1` otherwise.
    #[must_use]
    pub fn due_factor(&self, rate: f64) -> f64 {
        match self {
            PaymentTiming::End => 1.0,
            PaymentTiming::Begin => 1.0 + rate,
        }
    }

    /// Returns true for annuity-due timing.
    #[must_use]
    pub fn is_begin(&self) -> bool {
        matches!(self, PaymentTiming::Begin)
    }

    /// Excel's numeric `type` argument.
    #[must_use]
    pub fn excel_type(&self) -> u8 {
        match self {
            PaymentTiming::End => 0,
            PaymentTiming::Begin => 1,
        }
    }
}

impl fmt::Display for PaymentTiming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PaymentTiming::End => "end",
            PaymentTiming::Begin => "begin",
        };
        write!(f, "{name}")
    }
}
