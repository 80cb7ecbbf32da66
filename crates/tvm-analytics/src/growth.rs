//! Lump-sum compounding and growth metrics.
//!
//! Rates here are nominal annual rates compounded `times_per_year`, so the
//! per-period rate is `rate / times_per_year` and a horizon of `years`
//! spans `times_per_year × years` periods.

use serde::{Deserialize, Serialize};
use tvm_core::types::{InflationDirection, PaymentTiming};
use tvm_core::validation::{finite, non_negative, positive};

use crate::error::{AnalyticsError, AnalyticsResult};

/// Longest horizon simulated by [`periods_to_reach_goal`] with contributions.
pub const MAX_GOAL_PERIODS: u32 = 10_000;

/// Growth factor `(1 + rate / m)^(m·t)`.
fn growth_factor(rate: f64, times_per_year: f64, years: f64) -> f64 {
    (1.0 + rate / times_per_year).powf(times_per_year * years)
}

fn validate_horizon(times_per_year: f64, years: f64) -> AnalyticsResult<()> {
    positive(times_per_year, "times_per_year")?;
    non_negative(years, "years")?;
    Ok(())
}

/// Final amount of `principal` compounded `times_per_year` for `years`.
///
/// # Example
///
/// ```rust
/// use tvm_analytics::growth::compound;
///
/// let amount = compound(1000.0, 0.05, 1.0, 2.0).unwrap();
/// assert!((amount - 1102.5).abs() < 1e-9);
/// ```
pub fn compound(principal: f64, rate: f64, times_per_year: f64, years: f64) -> AnalyticsResult<f64> {
    non_negative(principal, "principal")?;
    finite(rate, "rate")?;
    validate_horizon(times_per_year, years)?;

    if rate == 0.0 || years == 0.0 {
        return Ok(principal);
    }
    Ok(principal * growth_factor(rate, times_per_year, years))
}

/// Future value of a lump sum.
pub fn future_value(
    present_value: f64,
    rate: f64,
    times_per_year: f64,
    years: f64,
) -> AnalyticsResult<f64> {
    non_negative(present_value, "present_value")?;
    finite(rate, "rate")?;
    validate_horizon(times_per_year, years)?;

    if rate == 0.0 || years == 0.0 {
        return Ok(present_value);
    }
    Ok(present_value * growth_factor(rate, times_per_year, years))
}

/// Present value of a lump sum received after `years`.
pub fn present_value(
    future_value: f64,
    rate: f64,
    times_per_year: f64,
    years: f64,
) -> AnalyticsResult<f64> {
    non_negative(future_value, "future_value")?;
    finite(rate, "rate")?;
    validate_horizon(times_per_year, years)?;

    if rate == 0.0 || years == 0.0 {
        return Ok(future_value);
    }
    Ok(future_value / growth_factor(rate, times_per_year, years))
}

/// Effective annual rate of a nominal rate: `(1 + r/m)^m - 1`.
pub fn effective_annual_rate(nominal_rate: f64, times_per_year: f64) -> AnalyticsResult<f64> {
    finite(nominal_rate, "nominal_rate")?;
    positive(times_per_year, "times_per_year")?;

    Ok(growth_factor(nominal_rate, times_per_year, 1.0) - 1.0)
}

/// Compound annual growth rate between two values.
///
/// An end value of zero or below is a total loss, reported as `-1`.
pub fn cagr(start_value: f64, end_value: f64, years: f64) -> AnalyticsResult<f64> {
    positive(start_value, "start_value")?;
    finite(end_value, "end_value")?;
    positive(years, "years")?;

    if end_value <= 0.0 {
        return Ok(-1.0);
    }
    Ok((end_value / start_value).powf(1.0 / years) - 1.0)
}

/// Real return after inflation (Fisher relation).
///
/// Returns `NaN` for inflation at or below -100%.
pub fn real_return(nominal_return: f64, inflation_rate: f64) -> AnalyticsResult<f64> {
    finite(nominal_return, "nominal_return")?;
    finite(inflation_rate, "inflation_rate")?;

    if inflation_rate <= -1.0 {
        return Ok(f64::NAN);
    }
    Ok((1.0 + nominal_return) / (1.0 + inflation_rate) - 1.0)
}

/// Numerator of the doubling-time rule of thumb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DoublingRule {
    /// The classic rule of 72.
    #[default]
    SeventyTwo,
    /// Rule of 69, closer for continuous compounding.
    SixtyNine,
}

impl DoublingRule {
    /// The rule's constant.
    #[must_use]
    pub fn constant(&self) -> f64 {
        match self {
            DoublingRule::SeventyTwo => 72.0,
            DoublingRule::SixtyNine => 69.0,
        }
    }
}

/// Approximate years to double a lump sum at the annual `rate`.
///
/// ```rust
/// use tvm_analytics::growth::{rule_of_72, DoublingRule};
///
/// let years = rule_of_72(0.08, DoublingRule::SeventyTwo).unwrap();
/// assert!((years - 9.0).abs() < 1e-12);
/// ```
pub fn rule_of_72(rate: f64, rule: DoublingRule) -> AnalyticsResult<f64> {
    positive(rate, "rate")?;
    Ok(rule.constant() / 100.0 / rate)
}

/// Moves `amount` across `years` of inflation.
///
/// [`InflationDirection::ToPast`] divides by `(1 + inflation)^years`,
/// [`InflationDirection::ToFuture`] multiplies by it.
pub fn inflation_adjusted_amount(
    amount: f64,
    annual_inflation_rate: f64,
    years: f64,
    direction: InflationDirection,
) -> AnalyticsResult<f64> {
    finite(amount, "amount")?;
    finite(annual_inflation_rate, "annual_inflation_rate")?;
    non_negative(years, "years")?;

    let factor = (1.0 + annual_inflation_rate).powf(years);
    Ok(match direction {
        InflationDirection::ToPast => amount / factor,
        InflationDirection::ToFuture => amount * factor,
    })
}

/// Outcome of [`investment_growth`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvestmentGrowth {
    /// Balance at the horizon.
    pub future_value: f64,
    /// Sum of all periodic contributions (the initial amount excluded).
    pub total_contributions: f64,
    /// Growth earned on top of everything paid in.
    pub total_interest: f64,
}

/// Growth of an initial amount plus a contribution every compounding period.
///
/// The period count `times_per_year × years` is rounded to the nearest
/// whole period.
pub fn investment_growth(
    initial: f64,
    contribution_per_period: f64,
    rate: f64,
    times_per_year: f64,
    years: f64,
    timing: PaymentTiming,
) -> AnalyticsResult<InvestmentGrowth> {
    non_negative(initial, "initial")?;
    non_negative(contribution_per_period, "contribution_per_period")?;
    finite(rate, "rate")?;
    validate_horizon(times_per_year, years)?;

    let periods = (times_per_year * years).round();
    if periods == 0.0 {
        return Ok(InvestmentGrowth {
            future_value: initial,
            total_contributions: 0.0,
            total_interest: 0.0,
        });
    }

    let r = rate / times_per_year;
    let (initial_fv, contributions_fv) = if rate == 0.0 {
        (initial, contribution_per_period * periods)
    } else {
        let growth = (1.0 + r).powf(periods);
        let ordinary = contribution_per_period * (growth - 1.0) / r;
        (initial * growth, ordinary * timing.due_factor(r))
    };

    let future_value = initial_fv + contributions_fv;
    let total_contributions = contribution_per_period * periods;
    Ok(InvestmentGrowth {
        future_value,
        total_contributions,
        total_interest: future_value - initial - total_contributions,
    })
}

/// Whole compounding periods until the balance reaches the target.
///
/// Without contributions this is the rounded-up closed form
/// `ln(target / principal) / ln(1 + r)`. With contributions the balance is
/// rolled forward one period at a time for at most [`MAX_GOAL_PERIODS`].
/// Goals that are never reached return `f64::INFINITY`.
///
/// # Errors
///
/// Rejects negative amounts, non-positive `times_per_year`, and a
/// per-period rate at or below -100%.
pub fn periods_to_reach_goal(
    principal: f64,
    target_future_value: f64,
    rate: f64,
    times_per_year: f64,
    contribution_per_period: f64,
    timing: PaymentTiming,
) -> AnalyticsResult<f64> {
    non_negative(principal, "principal")?;
    non_negative(target_future_value, "target_future_value")?;
    finite(rate, "rate")?;
    positive(times_per_year, "times_per_year")?;
    non_negative(contribution_per_period, "contribution_per_period")?;

    if target_future_value <= principal {
        return Ok(0.0);
    }

    let r = rate / times_per_year;
    if r <= -1.0 {
        return Err(AnalyticsError::InvalidInput(
            "rate / times_per_year must be > -1".to_string(),
        ));
    }

    if contribution_per_period == 0.0 {
        if principal == 0.0 || r <= 0.0 {
            return Ok(f64::INFINITY);
        }
        let n = (target_future_value / principal).ln() / (1.0 + r).ln();
        return Ok(if n.is_finite() && n >= 0.0 {
            n.ceil()
        } else {
            f64::INFINITY
        });
    }

    if r == 0.0 {
        return Ok(((target_future_value - principal) / contribution_per_period).ceil());
    }

    let mut balance = principal;
    let mut periods = 0;
    while balance < target_future_value && periods < MAX_GOAL_PERIODS {
        balance = match timing {
            PaymentTiming::Begin => (balance + contribution_per_period) * (1.0 + r),
            PaymentTiming::End => balance * (1.0 + r) + contribution_per_period,
        };
        periods += 1;
    }

    Ok(if balance >= target_future_value {
        f64::from(periods)
    } else {
        f64::INFINITY
    })
}
