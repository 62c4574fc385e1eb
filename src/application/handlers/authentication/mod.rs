//! Registration and login handlers.
//!
//! Both flows end the same way: a token is requested for the user and
//! returned together with the user as an [`AuthenticationResult`].

mod login;
mod register;
#[cfg(test)]
mod test_doubles;

pub use login::{LoginHandler, LoginQuery};
pub use register::{RegisterCommand, RegisterHandler};

use crate::domain::user::User;

/// Result of successful registration or login.
#[derive(Debug, Clone)]
pub struct AuthenticationResult {
    pub user: User,
    pub token: String,
}
