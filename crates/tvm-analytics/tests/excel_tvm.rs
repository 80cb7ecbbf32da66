//! Integration tests for the Excel-compatible functions and loan helpers.
//!
//! Reference values are the ones Excel returns for the same arguments.

use approx::assert_relative_eq;
use tvm_analytics::prelude::*;
use tvm_core::rounding::round_cents;

#[test]
fn test_excel_reference_values() {
    // =PMT(0.06/12, 360, 250000)
    let payment = pmt(0.005, 360.0, 250_000.0, 0.0, PaymentTiming::End).unwrap();
    assert_relative_eq!(payment, -1498.876_312_881_892, epsilon = 1e-6);

    // =FV(0.05, 10, -100, -1000)
    let future = fv(0.05, 10.0, -100.0, -1000.0, PaymentTiming::End).unwrap();
    assert_relative_eq!(future, 2886.683_880_332_326, epsilon = 1e-6);

    // =PV(0.08, 20, 500, 0, 1)
    let present = pv(0.08, 20.0, 500.0, 0.0, PaymentTiming::Begin).unwrap();
    assert_relative_eq!(present, -5301.799_600_022_619, epsilon = 1e-6);

    // =NPV(0.1, ...) discounts the first flow too; ours keeps it at period 0
    let value = npv(0.1, &[-1000.0, 300.0, 400.0, 500.0]).unwrap();
    assert_relative_eq!(value, -21.036_814_425_244, epsilon = 1e-9);
}

#[test]
fn test_rate_round_trips_through_every_closed_form() {
    let rate_per_period = 0.045 / 12.0;
    let periods = 84.0;
    let payment = pmt(rate_per_period, periods, 30_000.0, -5000.0, PaymentTiming::Begin).unwrap();

    let terms = AnnuityTerms::new(periods, payment, 30_000.0)
        .with_future_value(-5000.0)
        .with_timing(PaymentTiming::Begin);
    let solved = RateSolver::new().with_guess(0.01).solve(&terms).unwrap();
    assert_relative_eq!(solved, rate_per_period, epsilon = 1e-9);

    let solved_periods = nper(solved, payment, 30_000.0, -5000.0, PaymentTiming::Begin).unwrap();
    assert_relative_eq!(solved_periods, periods, epsilon = 1e-6);

    let solved_pv = pv(solved, periods, payment, -5000.0, PaymentTiming::Begin).unwrap();
    assert_relative_eq!(solved_pv, 30_000.0, epsilon = 1e-5);
}

#[test]
fn test_irr_of_loan_matches_rate() {
    let payment = pmt(0.01, 24.0, 5000.0, 0.0, PaymentTiming::End).unwrap();
    let mut flows = vec![5000.0];
    flows.extend(std::iter::repeat(payment).take(24));

    let from_irr = irr(&flows).unwrap();
    let from_rate = rate(24.0, payment, 5000.0).unwrap();

    assert_relative_eq!(from_irr, 0.01, epsilon = 1e-9);
    assert_relative_eq!(from_irr, from_rate, epsilon = 1e-9);
}

#[test]
fn test_loan_helpers_agree_with_excel_pmt() {
    let payment = loan_payment(18_000.0, 0.072, 12.0, 5.0).unwrap();
    let excel = pmt(0.006, 60.0, 18_000.0, 0.0, PaymentTiming::End).unwrap();
    assert_relative_eq!(payment, -excel, epsilon = 1e-9);

    let annuity = payment_from_present_value(18_000.0, 0.006, 60.0, PaymentTiming::End).unwrap();
    assert_relative_eq!(annuity, payment, epsilon = 1e-9);
}

#[test]
fn test_schedule_totals_in_cents() {
    let schedule = amortization_schedule(12_000.0, 0.09, 12.0, 2.0, 0.0).unwrap();
    let rounded = schedule.rounded_to_cents().unwrap();

    assert_eq!(rounded.len(), 24);
    assert_eq!(rounded.final_balance(), 0.0);
    assert_eq!(
        rounded.payment_per_period,
        round_cents(schedule.payment_per_period).unwrap()
    );
    assert_relative_eq!(
        schedule.total_paid - schedule.total_interest,
        12_000.0,
        epsilon = 1e-6
    );
}

#[test]
fn test_goal_and_growth_agree() {
    let goal = SavingsGoal::new(5000.0, 20_000.0, 120.0)
        .with_contribution(50.0, PaymentTiming::Begin);
    let r = rate_to_reach_goal(&goal).unwrap();

    // Same plan expressed as a nominal annual rate compounded monthly
    let growth = investment_growth(5000.0, 50.0, r * 12.0, 12.0, 10.0, PaymentTiming::Begin).unwrap();
    assert_relative_eq!(growth.future_value, 20_000.0, epsilon = 1e-6);
    assert_relative_eq!(growth.total_contributions, 6000.0, epsilon = 1e-9);
}
