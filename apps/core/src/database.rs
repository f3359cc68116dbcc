use crate::models::{
    JournalEntry, JournalEntryCreate, JournalEntryUpdate, MoodEntry, MoodEntryCreate,
    MoodEntryUpdate,
};
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;
use tracing::info;

pub async fn init_db(db_path: &Path) -> Result<SqlitePool, sqlx::Error> {
    let db_url = format!("sqlite://{}", db_path.to_string_lossy());

    info!("Initializing database at: {}", db_url);

    let options = SqliteConnectOptions::from_str(&db_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    migrate(&pool).await?;

    info!("Database initialized and migrations applied.");

    Ok(pool)
}

/// Single-connection in-memory database, used by tests.
pub async fn init_memory_db() -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;
    migrate(&pool).await?;
    Ok(pool)
}

async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

// --- Mood entries CRUD ---

pub async fn list_moods(pool: &SqlitePool) -> Result<Vec<MoodEntry>, sqlx::Error> {
    sqlx::query_as::<_, MoodEntry>(
        r#"
        SELECT id, created_at, mood_score, note
        FROM mood_entries
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn create_mood(pool: &SqlitePool, payload: &MoodEntryCreate) -> Result<MoodEntry, sqlx::Error> {
    let created_at = Utc::now();

    sqlx::query_as::<_, MoodEntry>(
        r#"
        INSERT INTO mood_entries (created_at, mood_score, note)
        VALUES (?, ?, ?)
        RETURNING id, created_at, mood_score, note
        "#,
    )
    .bind(created_at)
    .bind(payload.mood_score)
    .bind(&payload.note)
    .fetch_one(pool)
    .await
}

pub async fn get_mood(pool: &SqlitePool, id: i64) -> Result<Option<MoodEntry>, sqlx::Error> {
    sqlx::query_as::<_, MoodEntry>(
        r#"
        SELECT id, created_at, mood_score, note
        FROM mood_entries
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Returns `None` when the entry does not exist.
pub async fn update_mood(
    pool: &SqlitePool,
    id: i64,
    payload: &MoodEntryUpdate,
) -> Result<Option<MoodEntry>, sqlx::Error> {
    // Get the current entry to preserve unchanged fields
    let Some(current) = get_mood(pool, id).await? else {
        return Ok(None);
    };

    let mood_score = payload.mood_score.unwrap_or(current.mood_score);
    let note = payload.note.clone().or(current.note);

    sqlx::query_as::<_, MoodEntry>(
        r#"
        UPDATE mood_entries
        SET mood_score = ?, note = ?
        WHERE id = ?
        RETURNING id, created_at, mood_score, note
        "#,
    )
    .bind(mood_score)
    .bind(note)
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Returns `false` when nothing was deleted.
pub async fn delete_mood(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM mood_entries WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

// --- Journal entries CRUD ---

pub async fn list_journal(pool: &SqlitePool) -> Result<Vec<JournalEntry>, sqlx::Error> {
    sqlx::query_as::<_, JournalEntry>(
        r#"
        SELECT id, created_at, title, content
        FROM journal_entries
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn create_journal(
    pool: &SqlitePool,
    payload: &JournalEntryCreate,
) -> Result<JournalEntry, sqlx::Error> {
    let created_at = Utc::now();

    sqlx::query_as::<_, JournalEntry>(
        r#"
        INSERT INTO journal_entries (created_at, title, content)
        VALUES (?, ?, ?)
        RETURNING id, created_at, title, content
        "#,
    )
    .bind(created_at)
    .bind(&payload.title)
    .bind(&payload.content)
    .fetch_one(pool)
    .await
}

pub async fn get_journal(pool: &SqlitePool, id: i64) -> Result<Option<JournalEntry>, sqlx::Error> {
    sqlx::query_as::<_, JournalEntry>(
        r#"
        SELECT id, created_at, title, content
        FROM journal_entries
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn update_journal(
    pool: &SqlitePool,
    id: i64,
    payload: &JournalEntryUpdate,
) -> Result<Option<JournalEntry>, sqlx::Error> {
    let Some(current) = get_journal(pool, id).await? else {
        return Ok(None);
    };

    let title = payload.title.clone().unwrap_or(current.title);
    let content = payload.content.clone().unwrap_or(current.content);

    sqlx::query_as::<_, JournalEntry>(
        r#"
        UPDATE journal_entries
        SET title = ?, content = ?
        WHERE id = ?
        RETURNING id, created_at, title, content
        "#,
    )
    .bind(title)
    .bind(content)
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete_journal(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM journal_entries WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
