//! Receipt document fixtures.
//!
//! Builder for the JSON shape the service accepts, with a small valid
//! receipt as the default. Override individual fields to probe validation
//! and scoring edges.

use serde_json::json;
use tally_core::{parse_receipt, Receipt};

/// Builder for receipt JSON documents.
#[derive(Debug, Clone)]
pub struct ReceiptFixture {
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    /// `(short description, price)` pairs.
    pub items: Vec<(String, String)>,
    pub total: String,
}

impl ReceiptFixture {
    /// A small valid receipt: one item, odd day, morning purchase.
    pub fn new() -> Self {
        Self {
            retailer: "Target".to_string(),
            purchase_date: "2022-01-01".to_string(),
            purchase_time: "13:01".to_string(),
            items: vec![("Mountain Dew 12PK".to_string(), "6.49".to_string())],
            total: "6.49".to_string(),
        }
    }

    /// Set the retailer name.
    pub fn retailer(mut self, retailer: &str) -> Self {
        self.retailer = retailer.to_string();
        self
    }

    /// Set the purchase date (as submitted text).
    pub fn purchase_date(mut self, date: &str) -> Self {
        self.purchase_date = date.to_string();
        self
    }

    /// Set the purchase time (as submitted text).
    pub fn purchase_time(mut self, time: &str) -> Self {
        self.purchase_time = time.to_string();
        self
    }

    /// Replace the item list.
    pub fn items(mut self, items: &[(&str, &str)]) -> Self {
        self.items = items
            .iter()
            .map(|(description, price)| (description.to_string(), price.to_string()))
            .collect();
        self
    }

    /// Append one item.
    pub fn push_item(mut self, description: &str, price: &str) -> Self {
        self.items.push((description.to_string(), price.to_string()));
        self
    }

    /// Set the total (as submitted text).
    pub fn total(mut self, total: &str) -> Self {
        self.total = total.to_string();
        self
    }

    /// Render the fixture as the JSON document the service accepts.
    pub fn to_json(&self) -> Vec<u8> {
        let items: Vec<_> = self
            .items
            .iter()
            .map(|(description, price)| {
                json!({ "shortDescription": description, "price": price })
            })
            .collect();

        serde_json::to_vec(&json!({
            "retailer": self.retailer,
            "purchaseDate": self.purchase_date,
            "purchaseTime": self.purchase_time,
            "items": items,
            "total": self.total,
        }))
        .expect("fixture serializes")
    }

    /// Run the fixture through the real validator. Panics if invalid.
    pub fn to_receipt(&self) -> Receipt {
        parse_receipt(&self.to_json()).expect("fixture is a valid receipt")
    }
}

impl Default for ReceiptFixture {
    fn default() -> Self {
        Self::new()
    }
}
