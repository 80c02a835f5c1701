use std::collections::HashMap;
use std::sync::Arc;

use argon2::Argon2;
use argon2::password_hash::{PasswordHasher, SaltString, rand_core::OsRng};
use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::store::models::{Counter, FileRecord, Session, UsageStats, User};
use crate::store::tokens::TokenIssuer;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("password hashing failed: {0}")]
    PasswordHash(argon2::password_hash::Error),
    #[error("token signing failed: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
    #[error("blocking task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

#[derive(Default)]
struct Tables {
    users: HashMap<String, User>,
    sessions: HashMap<String, Session>,
    files: HashMap<String, FileRecord>,
}

// Each insert returns the table's new size for the debug events.
impl Tables {
    fn add_user(&mut self, user: User) -> usize {
        self.users.insert(user.id.clone(), user);
        self.users.len()
    }

    fn add_session(&mut self, session: Session) -> usize {
        self.sessions.insert(session.token.clone(), session);
        self.sessions.len()
    }

    fn add_file(&mut self, record: FileRecord) -> usize {
        self.files.insert(record.id.clone(), record);
        self.files.len()
    }
}

struct Inner {
    stats: UsageStats,
    tables: Tables,
}

/// Process-lifetime state shared by every request.
///
/// One mutex covers counters and record tables alike, so concurrent handlers
/// never lose an increment or observe a half-inserted record.
#[derive(Clone)]
pub struct Store {
    inner: Arc<Mutex<Inner>>,
    tokens: TokenIssuer,
}

impl Store {
    pub fn new(tokens: TokenIssuer) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                stats: UsageStats::seeded(),
                tables: Tables::default(),
            })),
            tokens,
        }
    }

    pub async fn usage(&self) -> UsageStats {
        self.inner.lock().await.stats.clone()
    }

    pub async fn increment(&self, counter: Counter) -> u64 {
        let mut inner = self.inner.lock().await;
        let value = inner.stats.increment(counter);
        tracing::debug!(?counter, value, "counter incremented");
        value
    }

    pub async fn create_user(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<String, StoreError> {
        // Hashing is CPU-bound: off the async workers, outside the lock.
        let password = password.to_string();
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password)).await??;

        let user = User {
            id: Uuid::new_v4().to_string(),
            username: username.to_string(),
            email: email.to_string(),
            password_hash,
            created_at: Utc::now(),
            is_premium: false,
        };
        let id = user.id.clone();

        let users = self.inner.lock().await.tables.add_user(user);
        tracing::debug!(user_id = %id, username, users, "user created");
        Ok(id)
    }

    pub async fn create_session(&self, username: &str) -> Result<String, StoreError> {
        let token = self.tokens.issue(username)?;
        let session = Session {
            token: token.clone(),
            username: username.to_string(),
            created_at: Utc::now(),
        };

        let sessions = self.inner.lock().await.tables.add_session(session);
        tracing::debug!(username, sessions, "session created");
        Ok(token)
    }

    pub async fn create_file_record(&self, name: &str, size: u64, kind: &str) -> String {
        let record = FileRecord {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            size,
            uploaded_at: Utc::now(),
            kind: kind.to_string(),
        };
        let id = record.id.clone();

        let files = self.inner.lock().await.tables.add_file(record);
        tracing::debug!(file_id = %id, name, size, files, "file record created");
        id
    }

    #[cfg(test)]
    pub async fn user(&self, id: &str) -> Option<User> {
        self.inner.lock().await.tables.users.get(id).cloned()
    }

    #[cfg(test)]
    pub async fn file(&self, id: &str) -> Option<FileRecord> {
        self.inner.lock().await.tables.files.get(id).cloned()
    }

    #[cfg(test)]
    pub async fn user_count(&self) -> usize {
        self.inner.lock().await.tables.users.len()
    }

    #[cfg(test)]
    pub async fn session_count(&self) -> usize {
        self.inner.lock().await.tables.sessions.len()
    }

    #[cfg(test)]
    pub async fn file_count(&self) -> usize {
        self.inner.lock().await.tables.files.len()
    }
}

fn hash_password(password: &str) -> Result<String, StoreError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(StoreError::PasswordHash)
}
