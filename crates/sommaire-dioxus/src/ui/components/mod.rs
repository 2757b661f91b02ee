mod article_body;
mod block_node;
mod code_block;
mod heading;
mod image_figure;
mod list_block;
mod paragraph;
mod post_header;
mod post_view;
mod progress_bar;
mod quote_block;
mod recent_posts;
mod toc_panel;
pub mod viewport_bridge;

pub use article_body::ArticleBody;
pub use block_node::BlockNode;
pub use code_block::CodeBlock;
pub use heading::Heading;
pub use image_figure::ImageFigure;
pub use list_block::ListBlock;
pub use paragraph::Paragraph;
pub use post_header::PostHeader;
pub use post_view::PostView;
pub use progress_bar::ProgressBar;
pub use quote_block::QuoteBlock;
pub use recent_posts::RecentPosts;
pub use toc_panel::TocPanel;
