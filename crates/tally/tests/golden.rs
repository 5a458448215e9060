//! End-to-end submission runs through the Processor.
//!
//! Golden vectors, idempotence, content addressing, and the at-most-once
//! scoring guarantee under concurrency.

use std::collections::HashSet;

use tally::{MemoryStore, PointsStore, ProcessError, Processor, ReceiptId};
use tally_testkit::fixtures::ReceiptFixture;
use tally_testkit::vectors::{all_vectors, CORNER_MARKET_RECEIPT};

fn processor() -> Processor<MemoryStore> {
    Processor::new(MemoryStore::new())
}

#[tokio::test]
async fn golden_vectors_score_through_the_processor() {
    let processor = processor();

    for vector in all_vectors() {
        let submission = processor.process(vector.json.as_bytes()).await.unwrap();
        assert_eq!(
            submission.points, vector.expected_points,
            "vector {}",
            vector.name
        );
        assert_eq!(
            processor.lookup(&submission.id).await.unwrap(),
            vector.expected_points,
            "vector {}",
            vector.name
        );
    }
}

#[tokio::test]
async fn resubmission_is_idempotent() {
    let processor = processor();
    let raw = CORNER_MARKET_RECEIPT.as_bytes();

    let first = processor.process(raw).await.unwrap();
    let second = processor.process(raw).await.unwrap();

    assert!(first.first_seen);
    assert!(!second.first_seen);
    assert_eq!(first.id, second.id);
    assert_eq!(first.points, second.points);
    assert_eq!(processor.store().record_count().await.unwrap(), 1);
}

#[tokio::test]
async fn identifier_follows_the_exact_bytes() {
    let processor = processor();

    // Logically identical documents with different whitespace are distinct
    // submissions.
    let compact = ReceiptFixture::new().to_json();
    let mut spaced = compact.clone();
    spaced.extend_from_slice(b" ");

    let a = processor.process(&compact).await.unwrap();
    let b = processor.process(&spaced).await.unwrap();

    assert_ne!(a.id, b.id);
    assert_eq!(a.points, b.points);
    assert_eq!(processor.store().record_count().await.unwrap(), 2);
}

#[tokio::test]
async fn unknown_identifier_is_not_found() {
    let processor = processor();
    let id = ReceiptId::derive(b"never submitted");

    let result = processor.lookup(&id).await;
    assert!(matches!(result, Err(ProcessError::ReceiptNotFound(got)) if got == id));
}

#[tokio::test]
async fn invalid_documents_never_create_records() {
    let processor = processor();

    for bad in [
        b"not json".to_vec(),
        ReceiptFixture::new().retailer("  ").to_json(),
        ReceiptFixture::new().total("-1.00").to_json(),
        ReceiptFixture::new().total("1.234").to_json(),
        ReceiptFixture::new().items(&[]).to_json(),
        ReceiptFixture::new().items(&[("", "1.00")]).to_json(),
    ] {
        let result = processor.process(&bad).await;
        assert!(matches!(result, Err(ProcessError::Validation(_))));
    }

    assert_eq!(processor.store().record_count().await.unwrap(), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_submissions_score_exactly_once() {
    let processor = processor();
    let raw: &'static [u8] = CORNER_MARKET_RECEIPT.as_bytes();

    let mut handles = Vec::new();
    for _ in 0..32 {
        let processor = processor.clone();
        handles.push(tokio::spawn(async move {
            processor.process(raw).await.unwrap()
        }));
    }

    let mut ids = HashSet::new();
    let mut first_count = 0;
    for handle in handles {
        let submission = handle.await.unwrap();
        ids.insert(submission.id);
        assert_eq!(submission.points, 109);
        if submission.first_seen {
            first_count += 1;
        }
    }

    assert_eq!(ids.len(), 1);
    assert_eq!(first_count, 1);
    assert_eq!(processor.store().record_count().await.unwrap(), 1);
}
