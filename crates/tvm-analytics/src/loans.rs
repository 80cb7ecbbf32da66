//! Amortizing loans.
//!
//! `annual_rate` is a nominal rate paid `payments_per_year` times a year; the
//! term in periods is `payments_per_year × years` rounded to a whole number.

use serde::{Deserialize, Serialize};
use tvm_core::rounding::round_cents;
use tvm_core::validation::{finite, non_negative, positive};

use crate::error::AnalyticsResult;

/// Balances below this are treated as fully repaid.
const PAID_OFF: f64 = 1e-12;

/// Safety cap on the payoff simulation.
const MAX_PAYOFF_PERIODS: u32 = 100_000;

/// Number of scheduled payments.
fn term_periods(payments_per_year: f64, years: f64) -> f64 {
    (payments_per_year * years).round()
}

/// Fixed payment per period of an amortizing loan.
///
/// # Example
///
/// ```rust
/// use tvm_analytics::loans::loan_payment;
///
/// let payment = loan_payment(200_000.0, 0.06, 12.0, 30.0).unwrap();
/// assert!((payment - 1199.10).abs() < 0.01);
/// ```
pub fn loan_payment(
    principal: f64,
    annual_rate: f64,
    payments_per_year: f64,
    years: f64,
) -> AnalyticsResult<f64> {
    non_negative(principal, "principal")?;
    finite(annual_rate, "annual_rate")?;
    positive(payments_per_year, "payments_per_year")?;
    non_negative(years, "years")?;

    let n = term_periods(payments_per_year, years);
    if n == 0.0 {
        return Ok(0.0);
    }
    let r = annual_rate / payments_per_year;
    if r == 0.0 {
        return Ok(principal / n);
    }
    Ok(r * principal / (1.0 - (1.0 + r).powf(-n)))
}

/// One payment of an [`AmortizationSchedule`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// Payment number, starting at 1.
    pub period: u32,
    /// Total paid this period, extra payment included.
    pub payment: f64,
    /// Part of the payment that reduces the balance.
    pub principal_payment: f64,
    /// Part of the payment that covers interest.
    pub interest_payment: f64,
    /// Balance after the payment.
    pub balance: f64,
}

/// Full payment schedule of a loan.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    /// Scheduled payment before any extra payment.
    pub payment_per_period: f64,
    /// Payments in order.
    pub rows: Vec<AmortizationRow>,
    /// Sum of all payments.
    pub total_paid: f64,
    /// Sum of all interest.
    pub total_interest: f64,
}

impl AmortizationSchedule {
    /// Number of payments actually made.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if no payment is due.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Balance after the last payment.
    #[must_use]
    pub fn final_balance(&self) -> f64 {
        self.rows.last().map_or(0.0, |row| row.balance)
    }

    /// Copy with every amount rounded half-up to cents.
    pub fn rounded_to_cents(&self) -> AnalyticsResult<Self> {
        let rows = self
            .rows
            .iter()
            .map(|row| -> AnalyticsResult<AmortizationRow> {
                Ok(AmortizationRow {
                    period: row.period,
                    payment: round_cents(row.payment)?,
                    principal_payment: round_cents(row.principal_payment)?,
                    interest_payment: round_cents(row.interest_payment)?,
                    balance: round_cents(row.balance)?,
                })
            })
            .collect::<AnalyticsResult<Vec<_>>>()?;

        Ok(Self {
            payment_per_period: round_cents(self.payment_per_period)?,
            rows,
            total_paid: round_cents(self.total_paid)?,
            total_interest: round_cents(self.total_interest)?,
        })
    }
}

/// Payment-by-payment schedule, optionally with a fixed extra payment.
///
/// The final payment is capped at the remaining balance plus interest, so an
/// extra payment shortens the schedule instead of overpaying.
pub fn amortization_schedule(
    principal: f64,
    annual_rate: f64,
    payments_per_year: f64,
    years: f64,
    extra_payment_per_period: f64,
) -> AnalyticsResult<AmortizationSchedule> {
    non_negative(extra_payment_per_period, "extra_payment_per_period")?;
    let base_payment = loan_payment(principal, annual_rate, payments_per_year, years)?;

    let n = term_periods(payments_per_year, years);
    if n == 0.0 || principal == 0.0 {
        return Ok(AmortizationSchedule::default());
    }

    let r = annual_rate / payments_per_year;
    let mut schedule = AmortizationSchedule {
        payment_per_period: base_payment,
        ..AmortizationSchedule::default()
    };
    let mut balance = principal;
    let mut period = 1;
    while f64::from(period) <= n && balance > 0.0 {
        let interest_payment = if r == 0.0 { 0.0 } else { balance * r };
        let mut payment = base_payment + extra_payment_per_period;
        let mut principal_payment = payment - interest_payment;
        if principal_payment > balance {
            principal_payment = balance;
            payment = principal_payment + interest_payment;
        }

        balance -= principal_payment;
        if balance.abs() < PAID_OFF {
            balance = 0.0;
        }
        schedule.total_paid += payment;
        schedule.total_interest += interest_payment;
        schedule.rows.push(AmortizationRow {
            period,
            payment,
            principal_payment,
            interest_payment,
            balance,
        });
        period += 1;
    }

    Ok(schedule)
}

/// Balance left after `after_period` scheduled payments.
pub fn remaining_balance(
    principal: f64,
    annual_rate: f64,
    payments_per_year: f64,
    years: f64,
    after_period: f64,
) -> AnalyticsResult<f64> {
    non_negative(after_period, "after_period")?;
    let payment = loan_payment(principal, annual_rate, payments_per_year, years)?;

    let n = term_periods(payments_per_year, years);
    if n == 0.0 || after_period >= n {
        return Ok(0.0);
    }
    if after_period == 0.0 {
        return Ok(principal);
    }

    let r = annual_rate / payments_per_year;
    let balance = if r == 0.0 {
        principal - payment * after_period
    } else {
        let growth = (1.0 + r).powf(after_period);
        principal * growth - payment * (growth - 1.0) / r
    };
    Ok(balance.max(0.0))
}

/// Payments needed to clear the loan paying `base + extra` every period.
///
/// Returns `f64::INFINITY` when the payment never exceeds the interest.
pub fn payoff_periods_with_extra(
    principal: f64,
    annual_rate: f64,
    payments_per_year: f64,
    base_payment_per_period: f64,
    extra_payment_per_period: f64,
) -> AnalyticsResult<f64> {
    non_negative(principal, "principal")?;
    finite(annual_rate, "annual_rate")?;
    positive(payments_per_year, "payments_per_year")?;
    non_negative(base_payment_per_period, "base_payment_per_period")?;
    non_negative(extra_payment_per_period, "extra_payment_per_period")?;

    if principal == 0.0 {
        return Ok(0.0);
    }
    let payment = base_payment_per_period + extra_payment_per_period;
    if payment <= 0.0 {
        return Ok(f64::INFINITY);
    }

    let r = annual_rate / payments_per_year;
    let mut balance = principal;
    let mut periods = 0;
    while balance > PAID_OFF && periods < MAX_PAYOFF_PERIODS {
        let interest = if r > 0.0 { balance * r } else { 0.0 };
        if payment <= interest {
            return Ok(f64::INFINITY);
        }
        balance -= (payment - interest).min(balance);
        periods += 1;
    }

    Ok(if balance <= PAID_OFF {
        f64::from(periods)
    } else {
        f64::INFINITY
    })
}
