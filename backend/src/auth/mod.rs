//! Authentication module
//!
//! Provides JWT tokens, bcrypt password hashing, the session-held identity,
//! and the request guard that turns either into an authenticated user.

mod jwt;
mod middleware;
mod password;
mod session;

pub use jwt::{Claims, JwtService};
pub use middleware::AuthUser;
pub use password::PasswordService;
pub use session::{AuthenticatedIdentity, SessionIdentity};
