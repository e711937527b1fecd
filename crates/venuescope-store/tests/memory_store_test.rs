//! Concurrency and consistency tests for the in-memory venue store

use std::collections::HashSet;
use std::sync::Arc;
use venuescope_core::error::VenueError;
use venuescope_core::models::{GeoPoint, NewVenue};
use venuescope_store::{MemoryVenueStore, VenueStore};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_inserts_are_all_visible() {
    let store = Arc::new(MemoryVenueStore::new());

    let handles: Vec<_> = (0..50)
        .map(|i| {
            let store = store.clone();
            tokio::spawn(async move {
                let venue = NewVenue::new(
                    format!("venue-{}", i),
                    "hall",
                    GeoPoint::new(12.9 + i as f64 * 0.001, 77.6),
                );
                store.insert(venue).await
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let all = store.find_all().await.unwrap();
    assert_eq!(all.len(), 50);

    let ids: HashSet<_> = all.iter().map(|v| v.id).collect();
    assert_eq!(ids.len(), 50);

    // Every venue is reachable through the index as well
    let nearby = store.find_within_radius(GeoPoint::new(12.925, 77.6), 10_000.0).await.unwrap();
    assert_eq!(nearby.len(), 50);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_duplicate_external_ids_admit_exactly_one() {
    let store = Arc::new(MemoryVenueStore::new());

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let store = store.clone();
            tokio::spawn(async move {
                let venue = NewVenue::new(format!("copy-{}", i), "resort", GeoPoint::new(15.5, 73.8))
                    .with_external_id("ChIJ-goa-beach");
                store.insert(venue).await
            })
        })
        .collect();

    let mut inserted = 0;
    let mut duplicates = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => inserted += 1,
            Err(VenueError::DuplicateKey { .. }) => duplicates += 1,
            Err(other) => panic!("unexpected error: {:?}", other),
        }
    }

    assert_eq!(inserted, 1);
    assert_eq!(duplicates, 9);
    assert_eq!(store.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_clones_share_state() {
    let store = MemoryVenueStore::scan_only();
    let clone = store.clone();

    clone.insert(NewVenue::new("Shared", "hall", GeoPoint::new(0.0, 0.0))).await.unwrap();

    assert_eq!(store.count().await.unwrap(), 1);
    assert!(store.health_check().await.is_ok());
}
