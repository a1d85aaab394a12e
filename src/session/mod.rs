//! Per-browser session management.
//!
//! Each browser gets a [`Session`] (keyed by a cookie) holding its own view
//! router and the state of the screen it has mounted. Nothing is persisted;
//! idle sessions are pruned from the [`SessionStore`].
//!
//! # Example
//!
//! ```rust
//! use toolbox::router::Tool;
//! use toolbox::session::SessionStore;
//!
//! let store = SessionStore::new();
//! let session = store.create();
//! assert!(session.select(Tool::Gender));
//! assert_eq!(session.current_tool(), Tool::Gender);
//! ```

mod store;

pub use store::{Session, SessionStore};
