//! Threads OAuth login provider (authorization code grant).
//!
//! The flow has two states. [`ThreadsProvider::start_authorization`] issues an
//! [`AuthorizationSession`] whose authorize URL the user is redirected to; the host persists
//! the session. When the platform redirects back,
//! [`ThreadsProvider::complete_authorization`] checks the returned `state`, exchanges the
//! code, fetches the profile, and yields a normalized [`ThreadsUser`].

mod provider;
mod session;
mod user;

pub use provider::*;
pub use session::*;
pub use user::*;
