//! Business repository for database operations
//!
//! The unique index on `owner_id` enforces the one-business-per-user
//! invariant; inserts for an owner who already has a business fail with a
//! unique violation regardless of any earlier existence check.

use chrono::{DateTime, Utc};
use marketplace_shared::Business;
use sqlx::PgPool;
use uuid::Uuid;

/// Business record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BusinessRecord {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub description: String,
    pub category: String,
    pub contact: String,
    pub address: String,
    pub image_path: String,
    pub created_at: DateTime<Utc>,
}

impl From<BusinessRecord> for Business {
    fn from(record: BusinessRecord) -> Self {
        Business {
            id: record.id,
            owner_id: record.owner_id,
            name: record.name,
            description: record.description,
            category: record.category,
            contact: record.contact,
            address: record.address,
            image_path: record.image_path,
            created_at: record.created_at,
        }
    }
}

/// Input for creating a business
#[derive(Debug, Clone)]
pub struct NewBusiness {
    pub name: String,
    pub description: String,
    pub category: String,
    pub contact: String,
    pub address: String,
    /// Stored upload path, or empty when no image was supplied
    pub image_path: String,
}

/// Business repository for database operations
pub struct BusinessRepository;

impl BusinessRepository {
    /// Create a business owned by the given user
    pub async fn create(
        pool: &PgPool,
        owner_id: Uuid,
        input: &NewBusiness,
    ) -> Result<BusinessRecord, sqlx::Error> {
        sqlx::query_as::<_, BusinessRecord>(
            r#"
            INSERT INTO businesses (owner_id, name, description, category, contact, address, image_path)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, owner_id, name, description, category, contact, address, image_path, created_at
            "#,
        )
        .bind(owner_id)
        .bind(&input.name)
        .bind(&input.description)
        .bind(&input.category)
        .bind(&input.contact)
        .bind(&input.address)
        .bind(&input.image_path)
        .fetch_one(pool)
        .await
    }

    /// Find the business owned by the given user, if any
    pub async fn find_by_owner(
        pool: &PgPool,
        owner_id: Uuid,
    ) -> Result<Option<BusinessRecord>, sqlx::Error> {
        sqlx::query_as::<_, BusinessRecord>(
            r#"
            SELECT id, owner_id, name, description, category, contact, address, image_path, created_at
            FROM businesses
            WHERE owner_id = $1
            "#,
        )
        .bind(owner_id)
        .fetch_optional(pool)
        .await
    }

    /// List all businesses, newest first
    pub async fn list_all(pool: &PgPool) -> Result<Vec<BusinessRecord>, sqlx::Error> {
        sqlx::query_as::<_, BusinessRecord>(
            r#"
            SELECT id, owner_id, name, description, category, contact, address, image_path, created_at
            FROM businesses
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(pool)
        .await
    }
}
