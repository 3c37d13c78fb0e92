//! Authentication Module
//!
//! Token generation and the bearer session table.

mod session;
mod token;

pub use session::{AuthSession, SessionStore};
pub use token::{generate_token, is_well_formed, TOKEN_LENGTH};
