//! Structural validation of submitted receipt documents.
//!
//! The only way into a [`Receipt`]: raw bytes are deserialized into a draft
//! shape, then every field is checked and converted to its strong type.
//! Pure function of the input; nothing partial escapes on failure.

use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;

use crate::error::ValidationError;
use crate::money::Amount;
use crate::receipt::{LineItem, Receipt};

/// Purchase date layout, e.g. `2022-01-01`.
const DATE_FORMAT: &str = "%Y-%m-%d";
/// Purchase time layout, 24-hour clock, e.g. `13:01`.
const TIME_FORMAT: &str = "%H:%M";

/// The wire shape of a submitted receipt. Amounts, date, and time arrive
/// as strings and are validated into strong types below.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReceiptDraft {
    retailer: String,
    purchase_date: String,
    purchase_time: String,
    items: Vec<LineItemDraft>,
    total: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LineItemDraft {
    short_description: String,
    price: String,
}

/// Parse and validate raw receipt bytes.
///
/// Rejects malformed JSON, missing fields, a blank retailer, ill-formed
/// dates/times/amounts, an empty item list, and items with blank
/// descriptions or ill-formed prices.
pub fn parse_receipt(raw: &[u8]) -> Result<Receipt, ValidationError> {
    let draft: ReceiptDraft = serde_json::from_slice(raw)?;

    if draft.retailer.trim().is_empty() {
        return Err(ValidationError::EmptyRetailer);
    }

    let purchase_date = NaiveDate::parse_from_str(&draft.purchase_date, DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate(draft.purchase_date.clone()))?;
    let purchase_time = NaiveTime::parse_from_str(&draft.purchase_time, TIME_FORMAT)
        .map_err(|_| ValidationError::InvalidTime(draft.purchase_time.clone()))?;

    let total = draft
        .total
        .parse::<Amount>()
        .map_err(|_| ValidationError::InvalidTotal(draft.total.clone()))?;

    if draft.items.is_empty() {
        return Err(ValidationError::NoItems);
    }

    let mut items = Vec::with_capacity(draft.items.len());
    for (index, item) in draft.items.into_iter().enumerate() {
        if item.short_description.trim().is_empty() {
            return Err(ValidationError::EmptyItemDescription { index });
        }
        let price = item
            .price
            .parse::<Amount>()
            .map_err(|_| ValidationError::InvalidItemPrice {
                index,
                value: item.price.clone(),
            })?;
        items.push(LineItem {
            short_description: item.short_description,
            price,
        });
    }

    Ok(Receipt {
        retailer: draft.retailer,
        purchase_date,
        purchase_time,
        items,
        total,
    })
}
