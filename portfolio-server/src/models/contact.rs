//! Contact model and stores

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use portfolio_shared::ContactMessage;
use serde::Serialize;
use sqlx::{FromRow, PgPool};
use tokio::sync::Mutex;

use crate::{AppError, AppResult};

/// A stored contact message
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Contact {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Append-only persistence for contact messages.
#[async_trait]
pub trait ContactStore: Send + Sync + 'static {
    fn backend_tag(&self) -> &'static str;

    async fn insert(&self, message: &ContactMessage) -> AppResult<Contact>;
}

/// Postgres-backed store
pub struct PgContactStore {
    pool: PgPool,
    timeout: Duration,
}

impl PgContactStore {
    pub fn new(pool: PgPool, timeout: Duration) -> Self {
        Self { pool, timeout }
    }
}

#[async_trait]
impl ContactStore for PgContactStore {
    fn backend_tag(&self) -> &'static str {
        "postgres"
    }

    async fn insert(&self, message: &ContactMessage) -> AppResult<Contact> {
        let query = sqlx::query_as::<_, Contact>(
            r#"
            INSERT INTO contacts (name, email, subject, message, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#
        )
        .bind(&message.name)
        .bind(&message.email)
        .bind(&message.subject)
        .bind(&message.message)
        .bind(message.submitted_at)
        .fetch_one(&self.pool);

        tokio::time::timeout(self.timeout, query)
            .await
            .map_err(|_| AppError::DatabaseError("contact insert timed out".to_string()))?
            .map_err(AppError::from)
    }
}

/// In-process store for local runs and tests
#[derive(Default)]
pub struct MemoryContactStore {
    rows: Mutex<Vec<Contact>>,
}

impl MemoryContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn all(&self) -> Vec<Contact> {
        self.rows.lock().await.clone()
    }
}

#[async_trait]
impl ContactStore for MemoryContactStore {
    fn backend_tag(&self) -> &'static str {
        "memory"
    }

    async fn insert(&self, message: &ContactMessage) -> AppResult<Contact> {
        let mut rows = self.rows.lock().await;
        let contact = Contact {
            id: i32::try_from(rows.len() + 1)
                .map_err(|_| AppError::InternalError("contact id overflow".to_string()))?,
            name: message.name.clone(),
            email: message.email.clone(),
            subject: message.subject.clone(),
            message: message.message.clone(),
            created_at: message.submitted_at,
        };
        rows.push(contact.clone());
        Ok(contact)
    }
}
