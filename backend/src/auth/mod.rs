//! Authentication module
//!
//! JWT-based authentication with argon2 password hashing. The rest of
//! the API only sees the `AuthUser` extractor, which carries the stable
//! user id every query is scoped by.

mod jwt;
mod middleware;
mod password;

pub use jwt::{Claims, JwtService};
pub use middleware::AuthUser;
pub use password::PasswordService;
