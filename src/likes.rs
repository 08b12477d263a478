//! # Likes Entity
//!
//! Bookmarked recipes, unique by id, persisted as a JSON array under a fixed
//! key on every change and restored once at startup.
//!
//! The in-memory collection stays authoritative for the session. A failed
//! write keeps the change and hands the `StorageError` back to the caller; a
//! failed read leaves the collection empty and reports the error. Malformed
//! stored content is not an error and reads as empty.

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::config::LIKES_STORAGE_KEY;
use crate::errors::StorageError;
use crate::storage::KeyValueStore;

/// A bookmarked recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Like {
    pub id: String,
    pub title: String,
    pub author: String,
    pub img: String,
}

pub struct Likes {
    likes: Vec<Like>,
    store: Arc<dyn KeyValueStore>,
}

impl Likes {
    /// Create an empty collection backed by `store`
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            likes: Vec::new(),
            store,
        }
    }

    pub fn is_liked(&self, id: &str) -> bool {
        self.likes.iter().any(|like| like.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&Like> {
        self.likes.iter().find(|like| like.id == id)
    }

    /// Bookmark a recipe and persist.
    ///
    /// Liking an id twice keeps the first entry and returns it unchanged. If
    /// the write fails the like stays in memory and the error is returned.
    pub fn add_like(
        &mut self,
        id: &str,
        title: &str,
        author: &str,
        img: &str,
    ) -> Result<Like, StorageError> {
        if let Some(existing) = self.get(id) {
            warn!("Recipe {} is already liked", id);
            return Ok(existing.clone());
        }

        let like = Like {
            id: id.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            img: img.to_string(),
        };
        self.likes.push(like.clone());
        self.persist()?;
        Ok(like)
    }

    /// Remove a bookmark and persist. Unknown ids are ignored and nothing is
    /// written. If the write fails the like stays removed in memory.
    pub fn delete_like(&mut self, id: &str) -> Result<(), StorageError> {
        let before = self.likes.len();
        self.likes.retain(|like| like.id != id);
        if self.likes.len() != before {
            self.persist()?;
        }
        Ok(())
    }

    pub fn num_likes(&self) -> usize {
        self.likes.len()
    }

    pub fn likes(&self) -> &[Like] {
        &self.likes
    }

    fn persist(&self) -> Result<(), StorageError> {
        let json = serde_json::to_string(&self.likes)?;
        self.store.set(LIKES_STORAGE_KEY, &json).map_err(|e| {
            warn!("Failed to persist {} likes: {e}", self.likes.len());
            e
        })
    }

    /// Replace the collection with what the store holds.
    ///
    /// A missing key or malformed content yields an empty collection. An
    /// unreadable store also leaves it empty but returns the error. Duplicate
    /// ids in stored data keep their first occurrence.
    pub fn read_storage(&mut self) -> Result<(), StorageError> {
        self.likes = match self.store.get(LIKES_STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Like>>(&raw) {
                Ok(stored) => dedup_by_id(stored),
                Err(e) => {
                    warn!("Ignoring malformed stored likes: {e}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                self.likes.clear();
                warn!("Failed to read stored likes: {e}");
                return Err(e);
            }
        };
        info!("Restored {} liked recipes", self.likes.len());
        Ok(())
    }
}

fn dedup_by_id(stored: Vec<Like>) -> Vec<Like> {
    let mut unique: Vec<Like> = Vec::with_capacity(stored.len());
    for like in stored {
        if !unique.iter().any(|kept| kept.id == like.id) {
            unique.push(like);
        }
    }
    unique
}
