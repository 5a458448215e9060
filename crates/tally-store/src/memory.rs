//! In-memory implementation of the PointsStore trait.
//!
//! The only backend: records live for the process lifetime and are gone on
//! shutdown. Thread-safe via RwLock.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use tally_core::{score, Receipt, ReceiptId};

use crate::error::Result;
use crate::traits::{PointsStore, SubmitOutcome};

/// In-memory submission store.
///
/// Scoring happens inside the write critical section, which is what makes
/// concurrent submits of the same identifier score at most once.
pub struct MemoryStore {
    records: RwLock<HashMap<ReceiptId, u64>>,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PointsStore for MemoryStore {
    async fn submit(&self, id: ReceiptId, receipt: &Receipt) -> Result<SubmitOutcome> {
        let mut records = self.records.write().unwrap();

        match records.entry(id) {
            Entry::Occupied(entry) => Ok(SubmitOutcome::AlreadyScored {
                points: *entry.get(),
            }),
            Entry::Vacant(entry) => {
                let points = score(receipt);
                entry.insert(points);
                Ok(SubmitOutcome::Scored { points })
            }
        }
    }

    async fn points(&self, id: &ReceiptId) -> Result<Option<u64>> {
        let records = self.records.read().unwrap();
        Ok(records.get(id).copied())
    }

    async fn record_count(&self) -> Result<usize> {
        let records = self.records.read().unwrap();
        Ok(records.len())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use tally_core::parse_receipt;

    const RECEIPT: &[u8] = br#"{
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

    #[tokio::test]
    async fn test_first_submit_scores() {
        let store = MemoryStore::new();
        let receipt = parse_receipt(RECEIPT).unwrap();
        let id = ReceiptId::derive(RECEIPT);

        let outcome = store.submit(id, &receipt).await.unwrap();
        assert_eq!(outcome, SubmitOutcome::Scored { points: 109 });
        assert_eq!(store.points(&id).await.unwrap(), Some(109));
        assert_eq!(store.record_count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_submit_keeps_existing_record() {
        let store = MemoryStore::new();
        let receipt = parse_receipt(RECEIPT).unwrap();
        let id = ReceiptId::derive(RECEIPT);

        store.submit(id, &receipt).await.unwrap();
        let outcome = store.submit(id, &receipt).await.unwrap();

        assert_eq!(outcome, SubmitOutcome::AlreadyScored { points: 109 });
        assert_eq!(store.record_count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_lookup_of_unknown_id_is_none() {
        let store = MemoryStore::new();
        let id = ReceiptId::derive(b"never submitted");
        assert_eq!(store.points(&id).await.unwrap(), None);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_submits_score_at_most_once() {
        let store = Arc::new(MemoryStore::new());
        let receipt = Arc::new(parse_receipt(RECEIPT).unwrap());
        let id = ReceiptId::derive(RECEIPT);

        let mut handles = Vec::new();
        for _ in 0..32 {
            let store = Arc::clone(&store);
            let receipt = Arc::clone(&receipt);
            handles.push(tokio::spawn(async move {
                store.submit(id, &receipt).await.unwrap()
            }));
        }

        let mut first_count = 0;
        for handle in handles {
            let outcome = handle.await.unwrap();
            assert_eq!(outcome.points(), 109);
            if outcome.is_first() {
                first_count += 1;
            }
        }

        assert_eq!(first_count, 1);
        assert_eq!(store.record_count().await.unwrap(), 1);
    }
}
