//! Golden scoring vectors.
//!
//! Complete receipt documents with their expected point totals, used to pin
//! the rule engine across refactors. The expected values were worked out by
//! hand, rule by rule, and must never change.

use tally_core::{parse_receipt, score};

/// A single golden vector: a raw receipt document and its expected score.
#[derive(Debug, Clone, Copy)]
pub struct GoldenVector {
    pub name: &'static str,
    /// What the vector exercises and how the total breaks down.
    pub description: &'static str,
    /// The submitted document, byte for byte.
    pub json: &'static str,
    pub expected_points: u64,
}

/// Worked example: 6 (retailer) + 10 (two pairs) + 3 + 3 (two descriptions
/// with length a multiple of 3) + 6 (odd day) = 28.
pub const TARGET_RECEIPT: &str = r#"{
  "retailer": "Target",
  "purchaseDate": "2022-01-01",
  "purchaseTime": "13:01",
  "items": [
    {"shortDescription": "Mountain Dew 12PK", "price": "6.49"},
    {"shortDescription": "Emils Cheese Pizza", "price": "12.25"},
    {"shortDescription": "Knorr Creamy Chicken", "price": "1.26"},
    {"shortDescription": "Doritos Nacho Cheese", "price": "3.35"},
    {"shortDescription": "   Klarbrunn 12-PK 12 FL OZ  ", "price": "12.00"}
  ],
  "total": "35.35"
}"#;

/// Worked example: 14 (retailer) + 50 (whole dollar) + 25 (quarter) +
/// 10 (two pairs) + 10 (afternoon) = 109.
pub const CORNER_MARKET_RECEIPT: &str = r#"{
  "retailer": "M&M Corner Market",
  "purchaseDate": "2022-03-20",
  "purchaseTime": "14:33",
  "items": [
    {"shortDescription": "Gatorade", "price": "2.25"},
    {"shortDescription": "Gatorade", "price": "2.25"},
    {"shortDescription": "Gatorade", "price": "2.25"},
    {"shortDescription": "Gatorade", "price": "2.25"}
  ],
  "total": "9.00"
}"#;

/// The Target receipt with a whole-dollar total: the retailer, pair, odd-day
/// and description contributions stay put while rules 2 and 3 kick in.
const TARGET_WHOLE_DOLLAR_RECEIPT: &str = r#"{
  "retailer": "Target",
  "purchaseDate": "2022-01-01",
  "purchaseTime": "13:01",
  "items": [
    {"shortDescription": "Mountain Dew 12PK", "price": "6.49"},
    {"shortDescription": "Emils Cheese Pizza", "price": "12.25"},
    {"shortDescription": "Knorr Creamy Chicken", "price": "1.26"},
    {"shortDescription": "Doritos Nacho Cheese", "price": "3.35"},
    {"shortDescription": "   Klarbrunn 12-PK 12 FL OZ  ", "price": "12.00"}
  ],
  "total": "35.00"
}"#;

const AFTERNOON_BOUNDARY_RECEIPT: &str = r#"{
  "retailer": "Market",
  "purchaseDate": "2022-03-20",
  "purchaseTime": "14:00",
  "items": [
    {"shortDescription": "Gatorade", "price": "2.25"}
  ],
  "total": "2.25"
}"#;

const AFTERNOON_INSIDE_RECEIPT: &str = r#"{
  "retailer": "Market",
  "purchaseDate": "2022-03-20",
  "purchaseTime": "14:01",
  "items": [
    {"shortDescription": "Gatorade", "price": "2.25"}
  ],
  "total": "2.25"
}"#;

const WHOLE_DOLLAR_RECEIPT: &str = r#"{
  "retailer": "Aldi",
  "purchaseDate": "2021-07-07",
  "purchaseTime": "08:13",
  "items": [
    {"shortDescription": "Milk", "price": "3.00"},
    {"shortDescription": "Bread", "price": "2.00"}
  ],
  "total": "5.00"
}"#;

const DESCRIPTION_THIRDS_RECEIPT: &str = r#"{
  "retailer": "7Eleven",
  "purchaseDate": "2022-10-02",
  "purchaseTime": "20:45",
  "items": [
    {"shortDescription": "abc", "price": "10.00"},
    {"shortDescription": "defGhi", "price": "10.00"}
  ],
  "total": "20.00"
}"#;

/// All golden vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "target_worked_example",
            description: "retailer 6 + pairs 10 + descriptions 3+3 + odd day 6",
            json: TARGET_RECEIPT,
            expected_points: 28,
        },
        GoldenVector {
            name: "corner_market_worked_example",
            description: "retailer 14 + whole dollar 50 + quarter 25 + pairs 10 + afternoon 10",
            json: CORNER_MARKET_RECEIPT,
            expected_points: 109,
        },
        GoldenVector {
            name: "target_whole_dollar_variant",
            description: "retailer 6 + whole dollar 50 + quarter 25 + pairs 10 + descriptions 3+3 + odd day 6",
            json: TARGET_WHOLE_DOLLAR_RECEIPT,
            expected_points: 103,
        },
        GoldenVector {
            name: "afternoon_boundary_excluded",
            description: "14:00 exactly does not earn the afternoon bonus: 6 + quarter 25",
            json: AFTERNOON_BOUNDARY_RECEIPT,
            expected_points: 31,
        },
        GoldenVector {
            name: "afternoon_just_inside",
            description: "14:01 earns the afternoon bonus: 6 + quarter 25 + 10",
            json: AFTERNOON_INSIDE_RECEIPT,
            expected_points: 41,
        },
        GoldenVector {
            name: "whole_dollar_total",
            description: "retailer 4 + whole dollar 50 + quarter 25 + one pair 5 + odd day 6",
            json: WHOLE_DOLLAR_RECEIPT,
            expected_points: 90,
        },
        GoldenVector {
            name: "description_thirds",
            description: "retailer 7 + whole dollar 50 + quarter 25 + one pair 5 + ceil(2.0)*2",
            json: DESCRIPTION_THIRDS_RECEIPT,
            expected_points: 91,
        },
    ]
}

/// Score every vector through the real validator and rule engine.
/// Panics on the first mismatch.
pub fn verify_all_vectors() {
    for vector in all_vectors() {
        let receipt = parse_receipt(vector.json.as_bytes())
            .unwrap_or_else(|e| panic!("vector {} failed validation: {e}", vector.name));
        let points = score(&receipt);
        assert_eq!(
            points, vector.expected_points,
            "vector {} scored {points}, expected {} ({})",
            vector.name, vector.expected_points, vector.description
        );
    }
}
