//! # lens-render
//!
//! Pure `model -> virtual tree` rendering for PaperLens.
//!
//! - [`node`]: the virtual tree and its HTML serialization
//! - [`blocks`]: per-block rendering and the localized/leveled helpers
//! - [`index_view`]: search predicate and paper cards
//! - [`paper_view`]: hero, links, metadata, and sections of one paper
//! - [`page`]: the page shell that render outputs are committed into
//!
//! Every language and every reading level is always drawn. Which ones are
//! visible is decided by the root `data-lang` / `data-level` attributes on
//! the [`Page`], so toggling either never re-renders anything.

pub mod blocks;
pub mod index_view;
pub mod node;
pub mod page;
pub mod paper_view;

pub use blocks::render_block;
pub use index_view::IndexRender;
pub use node::{Element, Node};
pub use page::{Page, View};
pub use paper_view::PaperRender;
