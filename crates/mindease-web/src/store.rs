//! Feedback storage behind a trait so a persistent backend can replace
//! the in-memory list without touching the handlers.

use async_trait::async_trait;
use mindease_common::error::Result;
use mindease_common::{FeedbackEntry, NewFeedback};
use tokio::sync::RwLock;

#[async_trait]
pub trait FeedbackStore: Send + Sync {
    /// Persist a submission, assigning its id, category default and timestamp.
    async fn insert(&self, feedback: NewFeedback) -> Result<FeedbackEntry>;

    /// All entries in insertion order.
    async fn list(&self) -> Result<Vec<FeedbackEntry>>;
}

/// Process-lifetime store. Contents are lost on restart.
#[derive(Default)]
pub struct InMemoryFeedbackStore {
    entries: RwLock<Vec<FeedbackEntry>>,
}

impl InMemoryFeedbackStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FeedbackStore for InMemoryFeedbackStore {
    async fn insert(&self, feedback: NewFeedback) -> Result<FeedbackEntry> {
        let entry = FeedbackEntry::from_submission(feedback);
        self.entries.write().await.push(entry.clone());
        Ok(entry)
    }

    async fn list(&self) -> Result<Vec<FeedbackEntry>> {
        Ok(self.entries.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn submission(rating: u8, text: &str) -> NewFeedback {
        NewFeedback { rating: rating.into(), feedback: text.to_string(), category: None }
    }

    #[tokio::test]
    async fn test_insert_then_list_preserves_order() {
        let store = InMemoryFeedbackStore::new();
        store.insert(submission(5, "first")).await.unwrap();
        store.insert(submission(3, "second")).await.unwrap();

        let all = store.list().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].feedback, "first");
        assert_eq!(all[1].feedback, "second");
        assert_eq!(all[0].category, "general");
    }

    #[tokio::test]
    async fn test_ids_are_unique() {
        let store = InMemoryFeedbackStore::new();
        for i in 0..50 {
            store.insert(submission(4, &format!("entry {i}"))).await.unwrap();
        }
        let ids: HashSet<_> = store.list().await.unwrap().into_iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), 50);
    }
}
