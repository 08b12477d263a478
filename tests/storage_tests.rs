//! # Storage Tests
//!
//! File-backed store behaviour and likes persistence across restarts.

use anyhow::Result;
use forkify::config::LIKES_STORAGE_KEY;
use forkify::likes::Likes;
use forkify::storage::{FileStore, KeyValueStore};
use std::sync::Arc;
use tempfile::TempDir;

#[test]
fn test_file_store_round_trip() -> Result<()> {
    let dir = TempDir::new()?;
    let store = FileStore::open(dir.path())?;

    assert_eq!(store.get("likes")?, None);

    store.set("likes", r#"[{"id":"1"}]"#)?;
    assert_eq!(store.get("likes")?, Some(r#"[{"id":"1"}]"#.to_string()));

    store.set("likes", "[]")?;
    assert_eq!(store.get("likes")?, Some("[]".to_string()));
    Ok(())
}

#[test]
fn test_file_store_creates_directory() -> Result<()> {
    let dir = TempDir::new()?;
    let nested = dir.path().join("nested").join("store");

    let store = FileStore::open(&nested)?;
    store.set("k", "v")?;

    assert!(nested.join("k.json").exists());
    Ok(())
}

#[test]
fn test_likes_survive_restart() -> Result<()> {
    let dir = TempDir::new()?;

    {
        let mut likes = Likes::new(Arc::new(FileStore::open(dir.path())?));
        likes.read_storage()?;
        likes.add_like("47746", "Best Pizza Dough Ever", "101 Cookbooks", "pizza.jpg")?;
        likes.add_like("46956", "Deep Dish Fruit Pizza", "The Pioneer Woman", "fruit.jpg")?;
        likes.add_like("35477", "Pizza Dip", "Closet Cooking", "dip.jpg")?;
        likes.delete_like("46956")?;
    }

    let mut restored = Likes::new(Arc::new(FileStore::open(dir.path())?));
    restored.read_storage()?;
    let ids: Vec<&str> = restored.likes().iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["47746", "35477"]);
    assert!(restored.is_liked("35477"));
    assert!(!restored.is_liked("46956"));
    Ok(())
}

#[test]
fn test_corrupt_likes_file_reads_empty() -> Result<()> {
    let dir = TempDir::new()?;
    let store = FileStore::open(dir.path())?;
    store.set(LIKES_STORAGE_KEY, "[{\"id\": ")?;

    let mut likes = Likes::new(Arc::new(store));
    likes.read_storage()?;
    assert_eq!(likes.num_likes(), 0);
    Ok(())
}
