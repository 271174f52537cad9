//! Business logic layer

mod business;
mod user;

pub use business::{BusinessService, UploadedImage};
pub use user::UserService;
