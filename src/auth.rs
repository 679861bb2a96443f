//! Access-token models and the sources that supply them.

pub mod grant;
pub mod secret;
pub mod source;

pub use grant::*;
pub use secret::*;
pub use source::*;
