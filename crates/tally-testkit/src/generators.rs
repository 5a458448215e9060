//! Proptest generators for receipt documents.
//!
//! All strategies produce values that pass validation, so properties can
//! focus on scoring and submission behavior instead of parse failures.

use proptest::prelude::*;

use crate::fixtures::ReceiptFixture;

/// Retailer names with at least one non-space character.
pub fn retailer() -> impl Strategy<Value = String> {
    "[A-Za-z0-9&' -]{1,32}".prop_filter("retailer must not be blank", |s| !s.trim().is_empty())
}

/// Amount strings with two fractional digits.
pub fn amount() -> impl Strategy<Value = String> {
    (0u64..10_000, 0u64..100).prop_map(|(dollars, cents)| format!("{dollars}.{cents:02}"))
}

/// Well-formed purchase dates. Days stop at 28 so every month works.
pub fn purchase_date() -> impl Strategy<Value = String> {
    (2015i32..2030, 1u8..=12, 1u8..=28)
        .prop_map(|(year, month, day)| format!("{year:04}-{month:02}-{day:02}"))
}

/// Well-formed purchase times on the 24-hour clock.
pub fn purchase_time() -> impl Strategy<Value = String> {
    (0u8..24, 0u8..60).prop_map(|(hour, minute)| format!("{hour:02}:{minute:02}"))
}

/// Item descriptions with at least one non-space character.
pub fn description() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 -]{1,40}".prop_filter("description must not be blank", |s| !s.trim().is_empty())
}

/// Between one and seven line items.
pub fn line_items() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec((description(), amount()), 1..8)
}

/// A complete valid receipt fixture.
pub fn receipt_fixture() -> impl Strategy<Value = ReceiptFixture> {
    (
        retailer(),
        purchase_date(),
        purchase_time(),
        line_items(),
        amount(),
    )
        .prop_map(
            |(retailer, purchase_date, purchase_time, items, total)| ReceiptFixture {
                retailer,
                purchase_date,
                purchase_time,
                items,
                total,
            },
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::{parse_receipt, score};

    proptest! {
        #[test]
        fn generated_receipts_always_validate(fixture in receipt_fixture()) {
            let raw = fixture.to_json();
            prop_assert!(parse_receipt(&raw).is_ok());
        }

        #[test]
        fn scoring_is_deterministic(fixture in receipt_fixture()) {
            let receipt = fixture.to_receipt();
            prop_assert_eq!(score(&receipt), score(&receipt));
        }

        #[test]
        fn reparsing_identical_bytes_scores_identically(fixture in receipt_fixture()) {
            let raw = fixture.to_json();
            let a = parse_receipt(&raw).unwrap();
            let b = parse_receipt(&raw).unwrap();
            prop_assert_eq!(&a, &b);
            prop_assert_eq!(score(&a), score(&b));
        }
    }
}
