//! # lens-core
//!
//! Content model and shared types for PaperLens.
//!
//! This crate provides the foundational types shared across all PaperLens crates:
//! - Language and reading-level enums
//! - Localized text containers
//! - Index entries, paper documents, sections, and content blocks
//! - Slug helpers used for routing and file naming
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod localized;
pub mod slug;

pub use entities::{
    BlockBody, ContentBlock, IndexEntry, Link, Links, PaperDocument, PaperIndex, Section,
};
pub use enums::{Lang, Level};
pub use errors::CoreError;
pub use localized::{Localized, Summary};
