//! Receipt: the submitted purchase document, after validation.
//!
//! A `Receipt` is only ever constructed by [`crate::validate::parse_receipt`],
//! so every instance satisfies the structural rules: non-empty retailer,
//! well-formed date and time, at least one line item, and parseable amounts.

use chrono::{NaiveDate, NaiveTime};

use crate::money::Amount;

/// A validated receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    /// Retailer or store name.
    pub retailer: String,
    /// Calendar date of the purchase.
    pub purchase_date: NaiveDate,
    /// Time of day of the purchase (minute granularity).
    pub purchase_time: NaiveTime,
    /// Purchased items, in submission order. Never empty.
    pub items: Vec<LineItem>,
    /// Total amount as declared by the caller. Not reconciled against items.
    pub total: Amount,
}

/// A single purchased item. Has no identity beyond its position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    /// Short product description.
    pub short_description: String,
    /// Item price.
    pub price: Amount,
}
