//! Interactive catalog engine
//!
//! One generic implementation of the list pattern used by the FAQ,
//! showroom, careers and travel pages:
//! - `filter`: category + free-text search over an immutable record list
//! - `interaction`: per-record votes, favorites and the "thanks" flag
//! - `detail`: single-slot detail view with scoped body scroll lock
//! - `gallery`: directional scroll commands for the image strip
//! - `catalog`: facade tying the store, filter and tracker together

pub mod catalog;
pub mod detail;
pub mod error;
pub mod filter;
pub mod gallery;
pub mod interaction;

pub use catalog::Catalog;
pub use detail::{ClickTarget, DetailController, ScrollHost, ScrollLock};
pub use error::CatalogError;
pub use filter::{category_counts, visible, CatalogFilter};
pub use gallery::{GalleryScroller, GalleryViewport, ScrollCommand, ScrollDirection};
pub use interaction::{InteractionState, InteractionTracker, VoteCounts, VoteDirection};
