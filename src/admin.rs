//! Admin panel operations against the blog backend.
//!
//! The backend owns all posts and testimonials. A [`Session`] keeps the
//! bearer token between invocations; an [`AdminClient`] performs the
//! requests. There is no local cache: callers refetch after every change.

pub mod client;
pub mod error;
pub mod session;

pub use client::AdminClient;
pub use error::{AdminError, Result};
pub use session::Session;
