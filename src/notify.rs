//! Notification channel that publishes messages as Threads posts.
//!
//! A host notification converts itself into a [`ThreadsMessage`] for a given recipient; the
//! [`ThreadsChannel`] resolves the recipient's token, stages exactly one container (video,
//! then image, then text), and publishes it.

mod channel;
mod message;

pub use channel::*;
pub use message::*;
