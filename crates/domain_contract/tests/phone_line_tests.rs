//! Integration tests for the phone line aggregate

use chrono::NaiveDate;
use domain_billing::PlanKind;
use domain_contract::*;
use rust_decimal_macros::dec;
use test_utils::*;

#[test]
fn test_line_reports_plan_and_number() {
    let number = NumberFixtures::random();
    let line = LineBuilder::new().with_number(number.clone()).term().build();

    assert_eq!(line.number(), number);
    assert_eq!(line.plan(), PlanKind::Term);
    assert!(line.is_active());
    assert!(line.billed_months().is_empty());
}

#[test]
fn test_past_bills_remain_available() {
    init_test_tracing();
    let mut line = LineBuilder::new().term().build();
    let months: Vec<_> = DateFixtures::signup_month().iter_from(3).collect();

    for period in &months {
        line.new_month(*period).unwrap();
        line.make_call(CallBuilder::new().in_month(*period).lasting_minutes(110).build())
            .unwrap();
    }

    assert_eq!(line.billed_months(), months);

    let first = line.bill(months[0]).unwrap();
    assert_money_eq(first.fixed_cost, dec!(320.00));
    assert_eq!(first.free_minutes, 100);
    assert_eq!(first.billed_minutes, 10);
    assert_money_eq(first.total, dec!(321.00));

    let current = line.bill(months[2]).unwrap();
    assert_money_eq(current.total, dec!(21.00));
}

#[test]
fn test_unbilled_month_has_no_summary() {
    let mut line = LineBuilder::new().build();
    line.new_month(DateFixtures::signup_month()).unwrap();

    assert!(line.bill(DateFixtures::term_end_month()).is_none());
}

#[test]
fn test_final_bill_archived_on_cancel() {
    init_test_tracing();
    let mut line = LineBuilder::new().month_to_month().build();
    let period = DateFixtures::signup_month();
    line.new_month(period).unwrap();
    line.make_call(CallBuilder::new().lasting_minutes(20).build()).unwrap();

    let settlement = line.cancel_line().unwrap();

    let summary = line.bill(period).unwrap();
    assert_eq!(summary.total, settlement);
    assert_money_eq(settlement, dec!(51.00));
}

#[test]
fn test_call_from_other_number_rejected() {
    let mut line = LineBuilder::new().build();
    line.new_month(DateFixtures::signup_month()).unwrap();

    let result = line.make_call(CallBuilder::new().from_number("555-0199").build());

    assert!(matches!(result, Err(ContractError::ForeignCall { .. })));
    assert!(line.call_history().is_empty());
    assert_eq!(line.contract().bill().unwrap().billed_minutes(), 0);
}

#[test]
fn test_calls_grouped_by_month() {
    let mut line = LineBuilder::new().build();
    let december = DateFixtures::signup_month();
    let january = december.succ();

    line.new_month(december).unwrap();
    line.make_call(CallBuilder::new().in_month(december).build()).unwrap();
    // a call starting just before midnight belongs to the month it started in
    let new_years_eve = NaiveDate::from_ymd_opt(2018, 12, 31)
        .unwrap()
        .and_hms_opt(23, 59, 30)
        .unwrap();
    line.make_call(CallBuilder::new().at(new_years_eve).lasting_minutes(5).build())
        .unwrap();
    line.new_month(january).unwrap();
    line.make_call(CallBuilder::new().in_month(january).build()).unwrap();

    assert_eq!(line.call_history().len(), 3);
    assert_eq!(line.calls_in(december).count(), 2);
    assert_eq!(line.calls_in(january).count(), 1);
}

#[test]
fn test_failed_call_not_recorded() {
    let mut line = LineBuilder::new().prepaid_default().build();

    assert_no_bill_error(line.make_call(CallBuilder::new().build()));
    assert!(line.call_history().is_empty());
}

#[test]
fn test_reopening_current_month_keeps_its_bill() {
    init_test_tracing();
    let mut line = LineBuilder::new().month_to_month().build();
    let period = DateFixtures::signup_month();
    line.new_month(period).unwrap();
    line.make_call(CallBuilder::new().lasting_minutes(20).build()).unwrap();

    let result = line.new_month(period);

    assert!(matches!(result, Err(ContractError::MonthNotAfter { .. })));
    let summary = line.bill(period).unwrap();
    assert_eq!(summary.billed_minutes, 20);
    assert_money_eq(summary.total, dec!(51.00));
    assert_eq!(line.billed_months(), vec![period]);
}

#[test]
fn test_earlier_month_rejected() {
    let mut line = LineBuilder::new().term().build();
    let january = DateFixtures::month(1, 2019);
    line.new_month(january).unwrap();

    let result = line.new_month(DateFixtures::signup_month());

    assert!(matches!(
        result,
        Err(ContractError::MonthNotAfter { current, requested })
            if current == january && requested == DateFixtures::signup_month()
    ));
    assert_eq!(line.contract().bill().unwrap().period(), january);
}

#[test]
fn test_rejected_month_leaves_history_untouched() {
    let mut line = LineBuilder::new().build();
    let december = DateFixtures::signup_month();
    line.new_month(december).unwrap();
    line.cancel_line().unwrap();

    assert!(line.new_month(december.succ()).is_err());

    assert_eq!(line.billed_months(), vec![december]);
    assert!(line.bill(december.succ()).is_none());
}
