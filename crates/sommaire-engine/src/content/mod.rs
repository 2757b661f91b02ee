pub mod block;
pub mod post;

pub use block::{ContentBlock, HeadingLevel};
pub use post::{Author, Category, Post, PostImage};
