//! Integration tests for the contract plans

use core_kernel::Money;
use domain_billing::{Bill, BillingError, ChargeKind};
use domain_contract::*;
use rust_decimal_macros::dec;
use test_utils::*;

mod month_to_month_tests {
    use super::*;

    #[test]
    fn test_flat_fee_every_month() {
        init_test_tracing();
        let mut line = LineBuilder::new().month_to_month().build();

        for period in DateFixtures::signup_month().iter_from(4) {
            line.new_month(period).unwrap();
            let bill = line.contract().bill().unwrap();
            assert_money_eq(bill.fixed_cost(), dec!(50.00));
            assert_eq!(bill.period(), period);
        }
    }

    #[test]
    fn test_calls_billed_at_five_cents() {
        init_test_tracing();
        let mut line = LineBuilder::new().month_to_month().build();
        line.new_month(DateFixtures::signup_month()).unwrap();

        line.make_call(CallBuilder::new().lasting_minutes(10).build()).unwrap();
        // 61 seconds rounds up to 2 minutes
        line.make_call(CallBuilder::new().lasting_secs(61).build()).unwrap();

        let bill = line.contract().bill().unwrap();
        assert_eq!(bill.billed_minutes(), 12);
        assert_money_eq(bill.cost(), dec!(50.60));
    }

    #[test]
    fn test_cancel_settles_open_bill() {
        init_test_tracing();
        let mut line = LineBuilder::new().month_to_month().build();
        line.new_month(DateFixtures::signup_month()).unwrap();
        line.make_call(CallBuilder::new().lasting_minutes(10).build()).unwrap();

        let settlement = line.cancel_line().unwrap();

        assert_money_eq(settlement, dec!(50.50));
        assert_contract_closed(line.contract());
    }
}

mod term_tests {
    use super::*;

    #[test]
    fn test_deposit_only_in_signup_month() {
        init_test_tracing();
        let mut line = LineBuilder::new().term().build();

        line.new_month(DateFixtures::signup_month()).unwrap();
        let first = line.contract().bill().unwrap();
        assert_money_eq(first.fixed_cost(), dec!(320.00));
        assert_money_eq(first.fixed_cost_of(ChargeKind::Deposit), dec!(300.00));

        line.new_month(DateFixtures::signup_month().succ()).unwrap();
        let second = line.contract().bill().unwrap();
        assert_money_eq(second.fixed_cost(), dec!(20.00));
        assert!(second.fixed_cost_of(ChargeKind::Deposit).is_zero());
    }

    #[test]
    fn test_free_minutes_then_overflow() {
        init_test_tracing();
        let mut line = LineBuilder::new().term().build();
        line.new_month(DateFixtures::signup_month()).unwrap();

        line.make_call(CallBuilder::new().lasting_minutes(90).build()).unwrap();
        line.make_call(CallBuilder::new().lasting_minutes(15).build()).unwrap();

        let bill = line.contract().bill().unwrap();
        assert_eq!(bill.free_minutes(), 100);
        assert_eq!(bill.billed_minutes(), 5);
        assert_money_eq(bill.minutes_cost(), dec!(0.50));
    }

    #[test]
    fn test_free_minutes_reset_each_month() {
        init_test_tracing();
        let mut line = LineBuilder::new().term().build();
        let december = DateFixtures::signup_month();
        let january = december.succ();

        line.new_month(december).unwrap();
        line.make_call(CallBuilder::new().lasting_minutes(120).build()).unwrap();
        line.new_month(january).unwrap();
        line.make_call(CallBuilder::new().in_month(january).lasting_minutes(30).build())
            .unwrap();

        let bill = line.contract().bill().unwrap();
        assert_eq!(bill.free_minutes(), 30);
        assert_eq!(bill.billed_minutes(), 0);
        assert_money_eq(bill.cost(), dec!(20.00));
    }

    #[test]
    fn test_cancel_in_final_month_forfeits_deposit() {
        init_test_tracing();
        let mut line = LineBuilder::new().term().build();
        for period in DateFixtures::signup_month().iter_from(7) {
            line.new_month(period).unwrap();
        }
        assert_eq!(line.contract().bill().unwrap().period(), DateFixtures::term_end_month());

        let settlement = line.cancel_line().unwrap();

        assert_money_eq(settlement, dec!(20.00));
        let events = line.contract().events();
        assert_event_types(
            &events[events.len() - 2..],
            &["DepositForfeited", "Cancelled"],
        );
    }

    #[test]
    fn test_cancel_after_term_refunds_deposit() {
        init_test_tracing();
        let mut line = LineBuilder::new().term().build();
        for period in DateFixtures::signup_month().iter_from(8) {
            line.new_month(period).unwrap();
        }

        let settlement = line.cancel_line().unwrap();

        assert_money_eq(settlement, dec!(-280.00));
        let events = line.contract().events();
        assert_event_types(
            &events[events.len() - 2..],
            &["DepositRefunded", "Cancelled"],
        );
    }

    #[test]
    fn test_end_before_start_rejected() {
        let terms = ContractTerms::Term {
            start: DateFixtures::term_end(),
            end: DateFixtures::signup(),
        };
        let result = terms.into_contract(&Tariff::default());
        assert!(matches!(result, Err(ContractError::InvalidTerm { .. })));
    }

    #[test]
    fn test_signup_month_events() {
        let mut line = LineBuilder::new().term().build();
        line.new_month(DateFixtures::signup_month()).unwrap();
        line.make_call(CallBuilder::new().build()).unwrap();

        assert_event_types(
            line.contract().events(),
            &["DepositCharged", "MonthStarted", "CallBilled"],
        );
    }
}

mod prepaid_tests {
    use super::*;

    #[test]
    fn test_generous_credit_is_carried() {
        init_test_tracing();
        let mut line = LineBuilder::new().prepaid(MoneyFixtures::generous_credit()).build();
        line.new_month(DateFixtures::signup_month()).unwrap();

        let bill = line.contract().bill().unwrap();
        assert_money_eq(bill.fixed_cost(), dec!(-100.00));
        assert!(bill.fixed_cost_of(ChargeKind::TopUp).is_zero());
    }

    #[test]
    fn test_low_credit_is_topped_up() {
        init_test_tracing();
        let mut prepaid = Prepaid::new(DateFixtures::signup(), MoneyFixtures::low_credit()).unwrap();
        let period = DateFixtures::signup_month();
        prepaid.new_month(period, Bill::new(period)).unwrap();

        assert_money_eq(prepaid.bill().unwrap().fixed_cost(), dec!(20.00));
        assert_money_eq(prepaid.balance(), dec!(-30.00));
        assert_event_types(prepaid.events(), &["ToppedUp", "MonthStarted"]);
    }

    #[test]
    fn test_threshold_credit_is_not_topped_up() {
        let mut prepaid =
            Prepaid::new(DateFixtures::signup(), MoneyFixtures::threshold_credit()).unwrap();
        let period = DateFixtures::signup_month();
        prepaid.new_month(period, Bill::new(period)).unwrap();

        assert_money_eq(prepaid.bill().unwrap().fixed_cost(), dec!(-10.00));
        assert_money_eq(prepaid.balance(), dec!(-10.00));
    }

    #[test]
    fn test_calls_draw_down_credit() {
        let mut prepaid =
            Prepaid::new(DateFixtures::signup(), MoneyFixtures::generous_credit()).unwrap();
        let period = DateFixtures::signup_month();
        prepaid.new_month(period, Bill::new(period)).unwrap();

        prepaid.bill_call(&CallBuilder::new().lasting_minutes(40).build()).unwrap();

        assert_money_eq(prepaid.balance(), dec!(-99.00));
        assert_money_eq(prepaid.bill().unwrap().minutes_cost(), dec!(1.00));
    }

    #[test]
    fn test_cancel_with_credit_forfeits_it() {
        init_test_tracing();
        let mut line = LineBuilder::new().prepaid(Money::new(dec!(20.00))).build();
        line.new_month(DateFixtures::signup_month()).unwrap();

        let settlement = line.cancel_line().unwrap();

        assert!(settlement.is_zero());
        assert_contract_closed(line.contract());
        let forfeited = line
            .contract()
            .events()
            .iter()
            .find_map(|e| match e {
                ContractEvent::CreditForfeited { credit, .. } => Some(*credit),
                _ => None,
            })
            .unwrap();
        assert_money_eq(forfeited, dec!(20.00));
    }

    #[test]
    fn test_cancel_with_balance_owing_settles_bill() {
        init_test_tracing();
        let mut line = LineBuilder::new().prepaid(MoneyFixtures::low_credit()).build();
        line.new_month(DateFixtures::signup_month()).unwrap();
        // $30 of credit covers 1200 minutes
        line.make_call(CallBuilder::new().lasting_minutes(1300).build()).unwrap();

        let settlement = line.cancel_line().unwrap();

        assert_money_eq(settlement, dec!(52.50));
    }

    #[test]
    fn test_remaining_credit_carries_into_next_month() {
        init_test_tracing();
        let december = DateFixtures::signup_month();
        let january = december.succ();
        let mut line = LineBuilder::new().prepaid(MoneyFixtures::generous_credit()).build();
        line.new_month(december).unwrap();
        line.make_call(CallBuilder::new().lasting_minutes(40).build()).unwrap();

        line.new_month(january).unwrap();

        let bill = line.contract().bill().unwrap();
        assert_money_eq(bill.fixed_cost_of(ChargeKind::CreditCarryover), dec!(-99.00));
        assert!(bill.fixed_cost_of(ChargeKind::TopUp).is_zero());
        assert_money_eq(bill.fixed_cost(), dec!(-99.00));
    }

    #[test]
    fn test_exhausted_credit_tops_up_next_month() {
        init_test_tracing();
        let december = DateFixtures::signup_month();
        let january = december.succ();
        let mut prepaid = Prepaid::new(DateFixtures::signup(), MoneyFixtures::low_credit()).unwrap();
        prepaid.new_month(december, Bill::new(december)).unwrap();
        // 1200 minutes use up the $30 left after the first top-up
        prepaid.bill_call(&CallBuilder::new().lasting_minutes(1200).build()).unwrap();
        assert!(prepaid.balance().is_zero());

        prepaid.new_month(january, Bill::new(january)).unwrap();

        let bill = prepaid.bill().unwrap();
        assert!(bill.fixed_cost_of(ChargeKind::CreditCarryover).is_zero());
        assert_money_eq(bill.fixed_cost_of(ChargeKind::TopUp), dec!(25.00));
        assert_money_eq(prepaid.balance(), dec!(-25.00));
        assert_event_types(
            prepaid.events(),
            &["ToppedUp", "MonthStarted", "CallBilled", "ToppedUp", "MonthStarted"],
        );
    }

    #[test]
    fn test_negative_credit_rejected() {
        let terms = ContractTerms::Prepaid {
            start: DateFixtures::signup(),
            credit: Money::new(dec!(-1.00)),
        };
        let result = terms.into_contract(&Tariff::default());
        assert!(matches!(result, Err(ContractError::InvalidCredit(_))));
    }
}

mod lifecycle_tests {
    use super::*;

    fn all_plans() -> Vec<PhoneLine> {
        vec![
            LineBuilder::new().month_to_month().build(),
            LineBuilder::new().term().build(),
            LineBuilder::new().prepaid_default().build(),
        ]
    }

    #[test]
    fn test_call_before_first_month_fails() {
        for mut line in all_plans() {
            assert_no_bill_error(line.make_call(CallBuilder::new().build()));
        }
    }

    #[test]
    fn test_cancel_before_first_month_fails() {
        for mut line in all_plans() {
            assert_no_bill_error(line.cancel_line());
            assert!(line.is_active());
        }
    }

    #[test]
    fn test_cancelled_contract_rejects_everything() {
        init_test_tracing();
        for mut line in all_plans() {
            let period = DateFixtures::signup_month();
            line.new_month(period).unwrap();
            line.cancel_line().unwrap();

            assert_closed_error(line.new_month(period.succ()));
            assert_closed_error(line.make_call(CallBuilder::new().build()));
            assert_closed_error(line.cancel_line());
        }
    }

    #[test]
    fn test_bill_for_another_month_rejected() {
        let mut contract = MonthToMonth::new(DateFixtures::signup());
        let january = DateFixtures::month(1, 2019);
        let result = contract.new_month(january, Bill::new(january.succ()));

        assert!(matches!(
            result,
            Err(ContractError::Billing(BillingError::PeriodMismatch { .. }))
        ));
        assert!(contract.bill().is_none());
    }

    #[test]
    fn test_minute_counter_overflow_is_an_error() {
        let mut contract = MonthToMonth::new(DateFixtures::signup());
        let period = DateFixtures::signup_month();
        contract.new_month(period, Bill::new(period)).unwrap();
        let longest = CallBuilder::new().lasting_secs(u32::MAX).build();

        for _ in 0..59 {
            contract.bill_call(&longest).unwrap();
        }
        let before = contract.bill().unwrap().billed_minutes();
        let result = contract.bill_call(&longest);

        assert!(matches!(
            result,
            Err(ContractError::Billing(BillingError::MinutesOverflow(_)))
        ));
        assert_eq!(contract.bill().unwrap().billed_minutes(), before);
    }

    #[test]
    fn test_events_belong_to_contract() {
        let mut line = LineBuilder::new().term().build();
        line.new_month(DateFixtures::signup_month()).unwrap();
        line.cancel_line().unwrap();

        let id = line.contract().id();
        assert!(line.contract().events().iter().all(|e| e.contract_id() == id));
    }
}

mod terms_tests {
    use super::*;

    #[test]
    fn test_terms_from_json() {
        let json = r#"{"plan":"term","start":"2018-12-17","end":"2019-06-17"}"#;
        let terms: ContractTerms = serde_json::from_str(json).unwrap();

        assert_eq!(
            terms,
            ContractTerms::Term {
                start: DateFixtures::signup(),
                end: DateFixtures::term_end(),
            }
        );
    }

    #[test]
    fn test_month_to_month_tag() {
        let terms = ContractTerms::MonthToMonth {
            start: DateFixtures::signup(),
        };
        let json = serde_json::to_value(&terms).unwrap();
        assert_eq!(json["plan"], "mtm");
    }

    #[test]
    fn test_tariff_overrides_reach_contract() {
        let mut tariff = Tariff::default();
        tariff.term.deposit = Money::new(dec!(250.00));
        tariff.month_to_month.monthly_fee = Money::new(dec!(45.00));

        let mut term = LineBuilder::new().term().with_tariff(tariff).build();
        term.new_month(DateFixtures::signup_month()).unwrap();
        assert_money_eq(term.contract().bill().unwrap().fixed_cost(), dec!(270.00));

        let mut mtm = LineBuilder::new().month_to_month().with_tariff(tariff).build();
        mtm.new_month(DateFixtures::signup_month()).unwrap();
        assert_money_eq(mtm.contract().bill().unwrap().fixed_cost(), dec!(45.00));
    }
}

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn free_and_billed_minutes_cover_every_call(durations in call_durations_strategy(20)) {
            let mut term = Term::new(DateFixtures::signup(), DateFixtures::term_end()).unwrap();
            let period = DateFixtures::signup_month();
            term.new_month(period, Bill::new(period)).unwrap();

            let mut needed = 0u32;
            for secs in durations {
                let call = CallBuilder::new().lasting_secs(secs).build();
                needed += call.billed_minutes();
                term.bill_call(&call).unwrap();
            }

            let bill = term.bill().unwrap();
            prop_assert!(bill.free_minutes() <= 100);
            prop_assert_eq!(bill.free_minutes() + bill.billed_minutes(), needed);
            if needed > 100 {
                prop_assert_eq!(bill.free_minutes(), 100);
            }
        }

        #[test]
        fn split_never_exceeds_allowance(
            used in free_minutes_used_strategy(),
            secs in call_duration_strategy(),
        ) {
            let term = Term::new(DateFixtures::signup(), DateFixtures::term_end()).unwrap();
            let needed = domain_billing::billed_minutes(secs);

            let (free, billed) = term.split_minutes(used, needed);

            prop_assert_eq!(free + billed, needed);
            prop_assert!(used + free <= 100);
        }

        #[test]
        fn top_up_only_below_ten_dollars(credit in credit_strategy()) {
            let mut prepaid = Prepaid::new(DateFixtures::signup(), credit).unwrap();
            let period = DateFixtures::signup_month();
            prepaid.new_month(period, Bill::new(period)).unwrap();

            let topped_up = !prepaid.bill().unwrap().fixed_cost_of(ChargeKind::TopUp).is_zero();
            prop_assert_eq!(topped_up, credit.amount() < dec!(10));
        }

        #[test]
        fn month_to_month_fee_is_constant(period in billing_month_strategy()) {
            let mut contract = MonthToMonth::new(DateFixtures::signup());
            contract.new_month(period, Bill::new(period)).unwrap();
            prop_assert_eq!(contract.bill().unwrap().cost().amount(), dec!(50.00));
        }
    }
}
