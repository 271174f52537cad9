//! Business registration and listing
//!
//! The one-business-per-owner invariant lives in the storage layer (unique
//! index on `owner_id`). The existence check here only gives the common
//! case a friendlier failure before any file is written; it is advisory,
//! not a correctness guarantee.

use crate::error::ApiError;
use crate::repositories::{is_unique_violation, BusinessRepository, NewBusiness};
use crate::storage::ImageStore;
use marketplace_shared::Business;
use sqlx::PgPool;
use uuid::Uuid;

/// An uploaded image: the client-supplied filename plus the raw bytes
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Business service
pub struct BusinessService;

impl BusinessService {
    /// Register the business owned by `owner_id`
    ///
    /// Fails with [`ApiError::AlreadyRegistered`] when the owner already
    /// has one, whether the advisory pre-check or the unique index catches
    /// it. A stored image is not removed if the insert then fails; the
    /// upload is best-effort, not transactional.
    pub async fn register(
        pool: &PgPool,
        images: &ImageStore,
        owner_id: Uuid,
        mut input: NewBusiness,
        image: Option<UploadedImage>,
    ) -> Result<Business, ApiError> {
        // Advisory pre-flight check; the unique index is authoritative
        if BusinessRepository::find_by_owner(pool, owner_id)
            .await?
            .is_some()
        {
            return Err(ApiError::AlreadyRegistered);
        }

        input.image_path = match image {
            Some(image) => images
                .save(&image.filename, &image.bytes)
                .await
                .map_err(ApiError::Upload)?,
            None => String::new(),
        };

        let record = match BusinessRepository::create(pool, owner_id, &input).await {
            Ok(record) => record,
            Err(e) if is_unique_violation(&e) => return Err(ApiError::AlreadyRegistered),
            Err(e) => return Err(e.into()),
        };

        Ok(record.into())
    }

    /// The business owned by `owner_id`, if registered
    pub async fn for_owner(pool: &PgPool, owner_id: Uuid) -> Result<Option<Business>, ApiError> {
        Ok(BusinessRepository::find_by_owner(pool, owner_id)
            .await?
            .map(Business::from))
    }

    /// All registered businesses
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Business>, ApiError> {
        Ok(BusinessRepository::list_all(pool)
            .await?
            .into_iter()
            .map(Business::from)
            .collect())
    }
}
