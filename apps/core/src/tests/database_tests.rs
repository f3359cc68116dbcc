//! Database Module Tests
//!
//! CRUD operations for mood and journal entries against an in-memory pool.

use crate::database;
use crate::models::{
    JournalEntryCreate, JournalEntryUpdate, MoodEntryCreate, MoodEntryUpdate,
};
use sqlx::sqlite::SqlitePool;

async fn create_test_pool() -> SqlitePool {
    database::init_memory_db()
        .await
        .expect("Failed to create test pool")
}

fn mood(score: i64, note: Option<&str>) -> MoodEntryCreate {
    MoodEntryCreate {
        mood_score: score,
        note: note.map(str::to_string),
    }
}

fn journal(title: &str, content: &str) -> JournalEntryCreate {
    JournalEntryCreate {
        title: title.to_string(),
        content: content.to_string(),
    }
}

#[cfg(test)]
mod mood_tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_get_mood() {
        let pool = create_test_pool().await;

        let created = database::create_mood(&pool, &mood(7, Some("Slept well")))
            .await
            .expect("Failed to create mood");
        assert!(created.id > 0);
        assert_eq!(created.mood_score, 7);
        assert_eq!(created.note.as_deref(), Some("Slept well"));

        let fetched = database::get_mood(&pool, created.id)
            .await
            .expect("Failed to get mood")
            .expect("Mood should exist");
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.mood_score, 7);
    }

    #[tokio::test]
    async fn test_list_moods_newest_first() {
        let pool = create_test_pool().await;

        let first = database::create_mood(&pool, &mood(3, None)).await.unwrap();
        let second = database::create_mood(&pool, &mood(8, None)).await.unwrap();

        let moods = database::list_moods(&pool).await.unwrap();
        assert_eq!(moods.len(), 2);
        assert_eq!(moods[0].id, second.id);
        assert_eq!(moods[1].id, first.id);
    }

    #[tokio::test]
    async fn test_update_mood_keeps_absent_fields() {
        let pool = create_test_pool().await;
        let created = database::create_mood(&pool, &mood(4, Some("Tired"))).await.unwrap();

        let update = MoodEntryUpdate {
            mood_score: Some(6),
            note: None,
        };
        let updated = database::update_mood(&pool, created.id, &update)
            .await
            .unwrap()
            .expect("Mood should exist");

        assert_eq!(updated.mood_score, 6);
        assert_eq!(updated.note.as_deref(), Some("Tired"));
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_update_missing_mood() {
        let pool = create_test_pool().await;
        let result = database::update_mood(&pool, 999, &MoodEntryUpdate::default())
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_mood() {
        let pool = create_test_pool().await;
        let created = database::create_mood(&pool, &mood(5, None)).await.unwrap();

        assert!(database::delete_mood(&pool, created.id).await.unwrap());
        assert!(!database::delete_mood(&pool, created.id).await.unwrap());
        assert!(database::get_mood(&pool, created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_out_of_range_score_rejected_by_schema() {
        let pool = create_test_pool().await;
        let result = database::create_mood(&pool, &mood(11, None)).await;
        assert!(result.is_err());
    }
}

#[cfg(test)]
mod journal_tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_list_journal() {
        let pool = create_test_pool().await;

        let first = database::create_journal(&pool, &journal("Monday", "Long day"))
            .await
            .expect("Failed to create entry");
        let second = database::create_journal(&pool, &journal("Tuesday", "Better"))
            .await
            .expect("Failed to create entry");

        let entries = database::list_journal(&pool).await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, second.id);
        assert_eq!(entries[1].id, first.id);
        assert_eq!(entries[1].title, "Monday");
    }

    #[tokio::test]
    async fn test_update_journal_partial() {
        let pool = create_test_pool().await;
        let created = database::create_journal(&pool, &journal("Draft", "First words"))
            .await
            .unwrap();

        let update = JournalEntryUpdate {
            title: Some("Final".to_string()),
            content: None,
        };
        let updated = database::update_journal(&pool, created.id, &update)
            .await
            .unwrap()
            .expect("Entry should exist");

        assert_eq!(updated.title, "Final");
        assert_eq!(updated.content, "First words");
    }

    #[tokio::test]
    async fn test_get_and_delete_missing_journal() {
        let pool = create_test_pool().await;
        assert!(database::get_journal(&pool, 42).await.unwrap().is_none());
        assert!(!database::delete_journal(&pool, 42).await.unwrap());
        assert!(database::update_journal(&pool, 42, &JournalEntryUpdate::default())
            .await
            .unwrap()
            .is_none());
    }
}
