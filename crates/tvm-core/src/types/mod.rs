//! Domain types for time-value-of-money calculations.
//!
//! - [`CashFlowSeries`]: Signed amounts indexed by period, period 0 is now
//! - [`RateBounds`]: Validated per-period rate search domain
//! - [`PaymentTiming`]: Ordinary annuity vs annuity due
//! - [`InflationDirection`]: Direction of a purchasing-power adjustment

mod bounds;
mod cashflow;
mod timing;

pub use bounds::RateBounds;
pub use cashflow::CashFlowSeries;
pub use timing::PaymentTiming;

use serde::{Deserialize, Serialize};

/// Direction of an inflation adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InflationDirection {
    /// Express a present amount in past purchasing power.
    ToPast,
    /// Express a present amount in future purchasing power.
    ToFuture,
}
