//! # Tvm Analytics
//!
//! Time-value-of-money calculations built on [`tvm_core`] and [`tvm_math`].
//!
//! This crate provides:
//! - **Rates**: IRR, Excel RATE, and the rate needed to reach a savings goal
//! - **TVM**: Excel-compatible FV, PV, PMT, NPER and NPV
//! - **Growth**: compounding, CAGR, real return, inflation adjustment
//! - **Annuities**: present value and payment of ordinary and due annuities
//! - **Loans**: payments, amortization schedules, payoff with extra payments
//!
//! ## Rate solvers
//!
//! Rates that cannot be isolated algebraically are found by one escalation
//! pipeline: Newton-Raphson inside the search domain, then bracket search
//! plus bisection. Invalid inputs fail before any iteration; a search that
//! finds nothing fails with [`AnalyticsError::SolverConvergenceFailed`].
//!
//! ```rust
//! use tvm_analytics::prelude::*;
//!
//! let r = irr(&[-1000.0, 300.0, 400.0, 500.0]).unwrap();
//! assert!(npv(r, &[-1000.0, 300.0, 400.0, 500.0]).unwrap().abs() < 1e-8);
//!
//! let err = irr(&[100.0, 200.0]).unwrap_err();
//! assert!(!err.is_convergence_failure());
//! ```
//!
//! ## Features
//!
//! - `parallel`: [`rates::irr_batch`] solves many series on the rayon pool

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::float_cmp)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::unreadable_literal)]

pub mod error;

pub use error::{AnalyticsError, AnalyticsResult};

pub mod annuity;
pub mod config;
pub mod growth;
pub mod loans;
pub mod rates;
pub mod tvm;

/// Prelude module for convenient imports.
///
/// ```rust
/// use tvm_analytics::prelude::*;
///
/// let payment = pmt(0.05 / 12.0, 60.0, 20_000.0, 0.0, PaymentTiming::End).unwrap();
/// assert!(payment < 0.0);
/// ```
pub mod prelude {
    pub use crate::error::{AnalyticsError, AnalyticsResult};

    pub use crate::config::RateSolverConfig;

    // Rate solvers
    pub use crate::rates::{
        irr, rate, rate_to_reach_goal, solve_goal_rate, AnnuityTerms, IrrSolver, RateSolver,
        SavingsGoal,
    };

    #[cfg(feature = "parallel")]
    pub use crate::rates::irr_batch;

    // Excel closed forms
    pub use crate::tvm::{fv, nper, npv, pmt, pv};

    pub use crate::annuity::{payment_from_present_value, present_value_of_annuity};
    pub use crate::growth::{
        cagr, compound, effective_annual_rate, future_value, inflation_adjusted_amount,
        investment_growth, periods_to_reach_goal, present_value, real_return, rule_of_72,
        DoublingRule, InvestmentGrowth,
    };
    pub use crate::loans::{
        amortization_schedule, loan_payment, payoff_periods_with_extra, remaining_balance,
        AmortizationRow, AmortizationSchedule,
    };

    pub use tvm_core::types::{CashFlowSeries, InflationDirection, PaymentTiming, RateBounds};
    pub use tvm_math::solvers::Stage;
}
