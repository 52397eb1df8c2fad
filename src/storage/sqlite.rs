//! SQLite storage backend

use super::traits::{DocumentStore, OpenStore, StorageError, StorageResult};
use crate::model::{Document, DocumentId, NewUser, User, UserId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, ErrorCode, OptionalExtension};
use std::path::Path;
use std::sync::Mutex;

/// SQLite-backed document store
///
/// One database file with `users` and `texts` tables; texts cascade-delete
/// with their owner. Thread-safe via an internal mutex on the connection;
/// queries are short, so the lock is held only across single statements.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Initialize the database schema
    fn init_schema(conn: &Connection) -> StorageResult<()> {
        conn.execute_batch(
            r#"
            -- Users table
            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                username TEXT NOT NULL,
                email TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );

            CREATE UNIQUE INDEX IF NOT EXISTS idx_users_username ON users(username);
            CREATE UNIQUE INDEX IF NOT EXISTS idx_users_email ON users(email);

            -- Texts table; rows are owner-scoped and die with their owner
            CREATE TABLE IF NOT EXISTS texts (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                content TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE
            );

            CREATE INDEX IF NOT EXISTS idx_texts_user ON texts(user_id);

            -- Enable foreign keys (required for the cascade)
            PRAGMA foreign_keys = ON;

            -- Enable WAL mode for concurrent reads during writes
            PRAGMA journal_mode = WAL;
            "#,
        )?;
        Ok(())
    }

    fn parse_timestamp(raw: &str) -> StorageResult<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| StorageError::DateParse(format!("{}: {}", raw, e)))
    }

    fn row_to_user(
        id: String,
        name: String,
        username: String,
        email: String,
        created_at: String,
        updated_at: String,
    ) -> StorageResult<User> {
        Ok(User {
            id: UserId::parse(&id)?,
            name,
            username,
            email,
            created_at: Self::parse_timestamp(&created_at)?,
            updated_at: Self::parse_timestamp(&updated_at)?,
        })
    }

    fn row_to_document(
        id: String,
        user_id: String,
        content: String,
        created_at: String,
        updated_at: String,
    ) -> StorageResult<Document> {
        Ok(Document {
            id: DocumentId::parse(&id)?,
            owner: UserId::parse(&user_id)?,
            content,
            created_at: Self::parse_timestamp(&created_at)?,
            updated_at: Self::parse_timestamp(&updated_at)?,
        })
    }

    /// Map unique-constraint failures to [`StorageError::Conflict`]
    fn map_constraint(err: rusqlite::Error, what: &str) -> StorageError {
        match &err {
            rusqlite::Error::SqliteFailure(failure, _)
                if failure.code == ErrorCode::ConstraintViolation =>
            {
                StorageError::Conflict(what.to_string())
            }
            _ => StorageError::Database(err),
        }
    }
}

impl OpenStore for SqliteStore {
    fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        Self::init_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn open_in_memory() -> StorageResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

#[async_trait]
impl DocumentStore for SqliteStore {
    async fn create_user(&self, input: NewUser) -> StorageResult<User> {
        let user = User::from_new(input);
        let conn = self.conn.lock().unwrap();
        conn.execute(
            r#"
            INSERT INTO users (id, name, username, email, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                user.id.to_string(),
                user.name,
                user.username,
                user.email,
                user.created_at.to_rfc3339(),
                user.updated_at.to_rfc3339(),
            ],
        )
        .map_err(|e| Self::map_constraint(e, "username or email already taken"))?;
        Ok(user)
    }

    async fn get_user(&self, id: &UserId) -> StorageResult<Option<User>> {
        let conn = self.conn.lock().unwrap();
        let row = conn
            .query_row(
                "SELECT id, name, username, email, created_at, updated_at FROM users WHERE id = ?1",
                params![id.to_string()],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, String>(2)?,
                        row.get::<_, String>(3)?,
                        row.get::<_, String>(4)?,
                        row.get::<_, String>(5)?,
                    ))
                },
            )
            .optional()?;

        row.map(|(id, name, username, email, created, updated)| {
            Self::row_to_user(id, name, username, email, created, updated)
        })
        .transpose()
    }

    async fn delete_user(&self, id: &UserId) -> StorageResult<bool> {
        let conn = self.conn.lock().unwrap();
        let rows = conn.execute("DELETE FROM users WHERE id = ?1", params![id.to_string()])?;
        Ok(rows > 0)
    }

    async fn create_document(&self, owner: &UserId, content: &str) -> StorageResult<Document> {
        let doc = Document::new(*owner, content);
        let conn = self.conn.lock().unwrap();

        let owner_exists: Option<String> = conn
            .query_row(
                "SELECT id FROM users WHERE id = ?1",
                params![owner.to_string()],
                |row| row.get(0),
            )
            .optional()?;
        if owner_exists.is_none() {
            return Err(StorageError::UserNotFound(owner.to_string()));
        }

        conn.execute(
            r#"
            INSERT INTO texts (id, user_id, content, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                doc.id.to_string(),
                doc.owner.to_string(),
                doc.content,
                doc.created_at.to_rfc3339(),
                doc.updated_at.to_rfc3339(),
            ],
        )?;
        Ok(doc)
    }

    async fn get_document(
        &self,
        id: &DocumentId,
        owner: &UserId,
    ) -> StorageResult<Option<Document>> {
        let conn = self.conn.lock().unwrap();
        let row = conn
            .query_row(
                r#"
                SELECT id, user_id, content, created_at, updated_at
                FROM texts WHERE id = ?1 AND user_id = ?2
                "#,
                params![id.to_string(), owner.to_string()],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, String>(2)?,
                        row.get::<_, String>(3)?,
                        row.get::<_, String>(4)?,
                    ))
                },
            )
            .optional()?;

        row.map(|(id, user_id, content, created, updated)| {
            Self::row_to_document(id, user_id, content, created, updated)
        })
        .transpose()
    }

    async fn update_document(
        &self,
        id: &DocumentId,
        owner: &UserId,
        content: &str,
    ) -> StorageResult<bool> {
        let conn = self.conn.lock().unwrap();
        let rows = conn.execute(
            "UPDATE texts SET content = ?3, updated_at = ?4 WHERE id = ?1 AND user_id = ?2",
            params![
                id.to_string(),
                owner.to_string(),
                content,
                Utc::now().to_rfc3339(),
            ],
        )?;
        Ok(rows > 0)
    }

    async fn delete_document(&self, id: &DocumentId, owner: &UserId) -> StorageResult<bool> {
        let conn = self.conn.lock().unwrap();
        let rows = conn.execute(
            "DELETE FROM texts WHERE id = ?1 AND user_id = ?2",
            params![id.to_string(), owner.to_string()],
        )?;
        Ok(rows > 0)
    }

    async fn list_documents(&self, owner: &UserId) -> StorageResult<Vec<Document>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            r#"
            SELECT id, user_id, content, created_at, updated_at
            FROM texts WHERE user_id = ?1
            ORDER BY rowid
            "#,
        )?;

        let rows = stmt.query_map(params![owner.to_string()], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
            ))
        })?;

        let mut docs = Vec::new();
        for row in rows {
            let (id, user_id, content, created, updated) = row?;
            docs.push(Self::row_to_document(id, user_id, content, created, updated)?);
        }
        Ok(docs)
    }
}
