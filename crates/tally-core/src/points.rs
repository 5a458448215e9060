//! The points rule engine.
//!
//! Seven independent rules, each contributing a non-negative number of
//! points; [`score`] is their sum. Every rule is a pure function of the
//! receipt, all arithmetic is on integers (amounts are cents), and the
//! only rounding anywhere is the per-item round-up in the description rule.

use chrono::{Datelike, Timelike};

use crate::money::Amount;
use crate::receipt::{LineItem, Receipt};

/// Points for a whole-dollar total.
const WHOLE_DOLLAR_POINTS: u64 = 50;
/// Points for a total that is a multiple of 0.25.
const QUARTER_MULTIPLE_POINTS: u64 = 25;
/// Points per pair of line items.
const ITEM_PAIR_POINTS: u64 = 5;
/// Points when the purchase day-of-month is odd.
const ODD_DAY_POINTS: u64 = 6;
/// Points when the purchase time falls inside the afternoon window.
const AFTERNOON_POINTS: u64 = 10;

/// Afternoon window bounds in minutes since midnight, both exclusive:
/// 14:00 itself does not qualify, 14:01 through 15:59 do.
const AFTERNOON_OPEN: u32 = 14 * 60;
const AFTERNOON_CLOSE: u32 = 16 * 60;

/// Compute the point total for a validated receipt.
///
/// Deterministic: identical receipts always yield identical totals. The
/// rule order is fixed for auditability but does not affect the sum.
pub fn score(receipt: &Receipt) -> u64 {
    retailer_points(&receipt.retailer)
        + total_points(receipt.total)
        + item_pair_points(&receipt.items)
        + description_points(&receipt.items)
        + purchase_day_points(receipt)
        + purchase_time_points(receipt)
}

/// Rule 1: one point per alphanumeric character of the retailer name.
fn retailer_points(retailer: &str) -> u64 {
    retailer.chars().filter(|c| c.is_alphanumeric()).count() as u64
}

/// Rules 2 and 3: 50 for a whole-dollar total, 25 for a multiple of 0.25.
fn total_points(total: Amount) -> u64 {
    let mut points = 0;
    if total.is_whole_dollars() {
        points += WHOLE_DOLLAR_POINTS;
    }
    if total.is_quarter_multiple() {
        points += QUARTER_MULTIPLE_POINTS;
    }
    points
}

/// Rule 4: 5 points for every two line items.
fn item_pair_points(items: &[LineItem]) -> u64 {
    (items.len() as u64 / 2) * ITEM_PAIR_POINTS
}

/// Rule 5: for each item whose trimmed description length is a non-zero
/// multiple of 3, ceil(price * 0.2) points, summed per item.
fn description_points(items: &[LineItem]) -> u64 {
    items
        .iter()
        .filter(|item| {
            let trimmed = item.short_description.trim();
            !trimmed.is_empty() && trimmed.chars().count() % 3 == 0
        })
        .map(|item| fifth_rounded_up(item.price))
        .sum()
}

/// ceil(cents / 100 * 0.2) in integer arithmetic: ceil(cents / 500).
fn fifth_rounded_up(price: Amount) -> u64 {
    price.cents().div_ceil(500)
}

/// Rule 6: 6 points when the day-of-month is odd.
fn purchase_day_points(receipt: &Receipt) -> u64 {
    if receipt.purchase_date.day() % 2 == 1 {
        ODD_DAY_POINTS
    } else {
        0
    }
}

/// Rule 7: 10 points when the purchase time is strictly between
/// 14:00 and 16:00.
fn purchase_time_points(receipt: &Receipt) -> u64 {
    let minutes = receipt.purchase_time.hour() * 60 + receipt.purchase_time.minute();
    if minutes > AFTERNOON_OPEN && minutes < AFTERNOON_CLOSE {
        AFTERNOON_POINTS
    } else {
        0
    }
}
