use async_trait::async_trait;
use chrono::{DateTime, Utc};
use redis::AsyncCommands;
use serde::{Deserialize, Serialize};
use sqlx::{PgPool, Row};
use std::collections::HashMap;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

pub const DUPLICATE_USER: &str = "A user with this email or username already exists.";

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sqlx::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("{0}")]
    Conflict(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub user_id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_date: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

impl NewUser {
    fn into_user(self) -> User {
        User {
            user_id: Uuid::new_v4(),
            username: self.username,
            email: self.email,
            password_hash: self.password_hash,
            created_date: Utc::now(),
        }
    }
}

/// Persistence for registered accounts. Emails are expected to be normalized
/// by the caller; lookups are exact.
#[async_trait]
pub trait UserStore {
    async fn create_user(&self, new_user: NewUser) -> Result<User, StorageError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StorageError>;
    async fn test_connection(&self) -> Result<(), StorageError>;
}

#[derive(Default)]
pub struct MemoryUserStore {
    users: RwLock<HashMap<String, User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create_user(&self, new_user: NewUser) -> Result<User, StorageError> {
        let mut users = self.users.write().await;

        if users.contains_key(&new_user.email)
            || users.values().any(|u| u.username == new_user.username)
        {
            return Err(StorageError::Conflict(DUPLICATE_USER.to_string()));
        }

        let user = new_user.into_user();
        users.insert(user.email.clone(), user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StorageError> {
        Ok(self.users.read().await.get(email).cloned())
    }

    async fn test_connection(&self) -> Result<(), StorageError> {
        Ok(())
    }
}

pub struct RedisUserStore {
    client: redis::Client,
}

impl RedisUserStore {
    pub fn new(redis_url: &str) -> Result<Self, StorageError> {
        let client = redis::Client::open(redis_url)?;
        Ok(Self { client })
    }

    pub async fn get_connection(&self) -> Result<redis::aio::MultiplexedConnection, StorageError> {
        Ok(self.client.get_multiplexed_async_connection().await?)
    }
}

fn email_key(email: &str) -> String {
    format!("user:email:{}", email)
}

fn username_key(username: &str) -> String {
    format!("user:name:{}", username)
}

/// Sets both keys or neither. KEYS[1] is the email key holding the record,
/// KEYS[2] the username reservation.
const CLAIM_USER: &str = r#"
if redis.call('EXISTS', KEYS[1]) == 1 or redis.call('EXISTS', KEYS[2]) == 1 then
    return 0
end
redis.call('SET', KEYS[1], ARGV[1])
redis.call('SET', KEYS[2], ARGV[2])
return 1
"#;

#[async_trait]
impl UserStore for RedisUserStore {
    async fn create_user(&self, new_user: NewUser) -> Result<User, StorageError> {
        let mut conn = self.get_connection().await?;

        let user = new_user.into_user();
        let name_key = username_key(&user.username);
        let user_key = email_key(&user.email);

        let value = serde_json::to_string(&user)?;
        let script = redis::Script::new(CLAIM_USER);
        let claimed: bool = script
            .key(&user_key)
            .key(&name_key)
            .arg(&value)
            .arg(&user.email)
            .invoke_async(&mut conn)
            .await?;
        if !claimed {
            return Err(StorageError::Conflict(DUPLICATE_USER.to_string()));
        }

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StorageError> {
        let mut conn = self.get_connection().await?;

        let value: Option<String> = conn.get(email_key(email)).await?;

        match value {
            Some(json_str) => Ok(Some(serde_json::from_str(&json_str)?)),
            None => Ok(None),
        }
    }

    async fn test_connection(&self) -> Result<(), StorageError> {
        let mut conn = self.get_connection().await?;
        let _: Option<String> = conn.get("__connection_test__").await?;
        Ok(())
    }
}

pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool = PgPool::connect(database_url).await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                user_id UUID PRIMARY KEY,
                username VARCHAR(50) NOT NULL UNIQUE,
                email VARCHAR(100) NOT NULL UNIQUE,
                password_hash VARCHAR(255) NOT NULL,
                created_date TIMESTAMPTZ NOT NULL DEFAULT CURRENT_TIMESTAMP
            )
            "#,
        )
        .execute(&pool)
        .await?;

        Ok(Self { pool })
    }
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    match e {
        sqlx::Error::Database(db) => db.code().as_deref() == Some("23505"),
        _ => false,
    }
}

#[async_trait]
impl UserStore for PostgresUserStore {
    async fn create_user(&self, new_user: NewUser) -> Result<User, StorageError> {
        let user = new_user.into_user();

        let result = sqlx::query(
            r#"
            INSERT INTO users (user_id, username, email, password_hash, created_date)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(user.user_id)
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.created_date)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(user),
            Err(e) if is_unique_violation(&e) => {
                Err(StorageError::Conflict(DUPLICATE_USER.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StorageError> {
        let row = sqlx::query(
            "SELECT user_id, username, email, password_hash, created_date FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| User {
            user_id: row.get("user_id"),
            username: row.get("username"),
            email: row.get("email"),
            password_hash: row.get("password_hash"),
            created_date: row.get("created_date"),
        }))
    }

    async fn test_connection(&self) -> Result<(), StorageError> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }
}
