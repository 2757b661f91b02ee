use crate::content::Post;

/// Read-only provider of the post catalog.
///
/// The normalizer and navigator only ever see content through this
/// trait, so they are testable without a live catalog and indifferent
/// to where the documents came from (bundled files, a CMS export, a
/// fixture).
pub trait ContentSource {
    /// All posts, newest first.
    fn posts(&self) -> &[Post];

    fn post_by_slug(&self, slug: &str) -> Option<&Post> {
        self.posts().iter().find(|post| post.slug == slug)
    }

    /// Newest posts excluding the one currently open.
    fn recent(&self, exclude_slug: Option<&str>, limit: usize) -> Vec<&Post> {
        self.posts()
            .iter()
            .filter(|post| Some(post.slug.as_str()) != exclude_slug)
            .take(limit)
            .collect()
    }
}

/// In-memory catalog over a fixed post list.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    posts: Vec<Post>,
}

impl StaticCatalog {
    /// Build a catalog, ordering posts newest first. Posts without a
    /// publication date sort last, in their given order.
    pub fn new(mut posts: Vec<Post>) -> Self {
        posts.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        Self { posts }
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

impl ContentSource for StaticCatalog {
    fn posts(&self) -> &[Post] {
        &self.posts
    }
}
