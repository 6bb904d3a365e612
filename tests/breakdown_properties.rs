// Property-based coverage of the breakdown invariants, over integer paise
// amounts and whole-percent rates.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use gst::prelude::*;

// Two-decimal amounts up to one crore, expressed in paise.
fn amount_from_paise(paise: u64) -> Decimal {
    Decimal::from(paise) / dec!(100)
}

proptest! {
    #[test]
    fn exclusive_fields_sum_within_rounding_tolerance(
        paise in 0u64..1_000_000_000u64,
        rate_percent in 0u8..=100u8,
    ) {
        let amount = amount_from_paise(paise);
        let rate = Decimal::from(rate_percent);

        let b = exclusive_breakdown(amount, rate);
        let drift = (b.original_amount + b.gst_amount - b.total_amount).abs();

        prop_assert!(
            drift <= dec!(0.01),
            "base {} + gst {} drifted {} from total {}",
            b.original_amount, b.gst_amount, drift, b.total_amount
        );
    }

    #[test]
    fn inclusive_preserves_the_supplied_total(
        paise in 0u64..1_000_000_000u64,
        rate_percent in 0u8..=100u8,
    ) {
        let amount = amount_from_paise(paise);
        let rate = Decimal::from(rate_percent);

        let b = inclusive_breakdown(amount, rate).unwrap();
        prop_assert_eq!(b.total_amount, round_money(amount));

        let drift = (b.original_amount + b.gst_amount - b.total_amount).abs();
        prop_assert!(drift <= dec!(0.01));
    }

    #[test]
    fn exclusive_then_inclusive_round_trips(
        paise in 0u64..1_000_000_000u64,
        rate_percent in 0u8..=100u8,
    ) {
        let amount = amount_from_paise(paise);
        let rate = Decimal::from(rate_percent);

        let total = exclusive_breakdown(amount, rate).total_amount;
        let recovered = inclusive_breakdown(total, rate).unwrap().original_amount;

        let drift = (recovered - amount).abs();
        prop_assert!(
            drift <= dec!(0.01),
            "recovered {} from {} at {}% (drift {})",
            recovered, amount, rate, drift
        );
    }

    #[test]
    fn calculation_is_deterministic(
        paise in 0u64..1_000_000_000u64,
        rate_percent in 0u8..=100u8,
    ) {
        let amount = amount_from_paise(paise);
        let rate = Decimal::from(rate_percent);

        let a = calculate_gst(amount, rate, TaxMode::Exclusive).unwrap();
        let b = calculate_gst(amount, rate, TaxMode::Exclusive).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn gst_is_non_negative_for_valid_inputs(
        paise in 0u64..1_000_000_000u64,
        rate_percent in 0u8..=100u8,
    ) {
        let amount = amount_from_paise(paise);
        let rate = Decimal::from(rate_percent);

        let b = calculate_gst(amount, rate, TaxMode::Exclusive).unwrap();
        prop_assert!(b.gst_amount >= Decimal::ZERO);
        // At rates up to 100%, the GST component never exceeds the base.
        prop_assert!(b.gst_amount <= b.original_amount);
        prop_assert!(b.total_amount >= b.original_amount);
    }

    #[test]
    fn valid_rates_are_exactly_zero_to_hundred(
        rate_tenths in -500i32..1500i32,
    ) {
        let rate = Decimal::from(rate_tenths) / dec!(10);
        prop_assert_eq!(
            is_valid_rate(rate),
            rate >= Decimal::ZERO && rate <= dec!(100)
        );
    }
}
