pub mod catalog;
pub mod content;
pub mod io;
pub mod navigator;
pub mod render;

// Re-export key types for easier usage
pub use catalog::{ContentSource, StaticCatalog};
pub use content::{Author, Category, ContentBlock, HeadingLevel, Post, PostImage};
pub use navigator::{
    HeadingWatch, IntersectionSample, NullWatch, Phase, ReadingNavigator, ReadingState,
    ViewportBand,
};
pub use render::{NormalizedDocument, RenderNode, TocEntry, normalize, slug};
