use crate::{KvStore, MemoryKvStore};

use googletest::prelude::*;

#[tokio::test]
async fn given_entries_when_overwritten_and_removed_then_count_tracks_keys() {
    let store = MemoryKvStore::new();
    assert_that!(store.is_empty().await, eq(true));

    store.set("a", "1").await.unwrap();
    store.set("a", "2").await.unwrap();
    store.set("b", "3").await.unwrap();
    assert_that!(store.len().await, eq(2));
    assert_that!(store.get("a").await.unwrap(), some(eq("2")));

    store.remove("a").await.unwrap();
    store.remove("a").await.unwrap();
    assert_that!(store.len().await, eq(1));
}
