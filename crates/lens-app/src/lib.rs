//! # lens-app
//!
//! Application state for PaperLens: the [`Router`] that ties a
//! [`ContentSource`](lens_client::ContentSource) to the rendered
//! [`Page`](lens_render::Page), the [`History`] it navigates, URL [`Route`]
//! parsing, and best-effort [`Preferences`].

pub mod history;
pub mod prefs;
pub mod route;
pub mod router;

pub use history::{History, MemoryHistory};
pub use prefs::{
    FileStore, KeyValueStore, MemoryStore, Preferences, StorageUnavailable, UnavailableStore,
};
pub use route::Route;
pub use router::Router;
