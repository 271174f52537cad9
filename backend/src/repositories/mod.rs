//! Data access layer

mod business;
mod user;

pub use business::{BusinessRecord, BusinessRepository, NewBusiness};
pub use user::{UserRecord, UserRepository};

/// Whether a database error is a unique-constraint violation
///
/// The unique indexes on `users.email` and `businesses.owner_id` are the
/// authoritative duplicate guards; callers map this case to their domain
/// error instead of a generic store failure.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}
