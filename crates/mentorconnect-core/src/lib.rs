//! Core types and the listing engine for the MentorConnect directory.
//!
//! Everything here is pure and synchronous: callers own the entity
//! collection, and every call is a function of its arguments. The only
//! parsing this crate does is turning a JSON string into a [`Directory`].

pub mod directory;
pub mod entity;
pub mod error;
pub mod filter;
pub mod listing;
pub mod ranking;
pub mod search;
pub mod session;

pub use directory::Directory;
pub use error::{Error, Result};
pub use listing::{Listing, Page, list};
