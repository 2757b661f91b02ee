use serde::{Deserialize, Serialize};

use crate::content::ContentBlock;

/// Post author as stored in the catalog.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Author {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Category entries appear in the catalog both as bare strings and as
/// titled objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Category {
    Titled { title: String },
    Plain(String),
}

impl Category {
    pub fn title(&self) -> &str {
        match self {
            Category::Titled { title } => title,
            Category::Plain(title) => title,
        }
    }
}

/// Hero or inline image metadata attached to a post.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PostImage {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
}

/// A catalog entry: one article plus the metadata shown around it.
///
/// Field names mirror the content source's JSON shape (`_id`,
/// `publishedAt`, `mainImage`). Everything beyond the identity triple
/// (`_id`, `title`, `slug`) is optional; absent fields degrade to
/// "not shown" rather than failing deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default, rename = "publishedAt")]
    pub published_at: Option<String>,
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default, rename = "category")]
    pub categories: Vec<Category>,
    #[serde(default, rename = "mainImage")]
    pub main_image: Option<PostImage>,
    #[serde(default)]
    pub body: Vec<ContentBlock>,
}

impl Post {
    /// First category title, used as the badge next to the byline.
    pub fn main_category(&self) -> Option<&str> {
        self.categories
            .first()
            .map(Category::title)
            .filter(|title| !title.is_empty())
    }

    /// Author display name, when one is present.
    pub fn author_name(&self) -> Option<&str> {
        self.author
            .as_ref()
            .and_then(|author| author.name.as_deref())
            .filter(|name| !name.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::HeadingLevel;
    use pretty_assertions::assert_eq;

    fn sample_post_json() -> &'static str {
        r#"{
            "_id": "blog-001",
            "title": "Moderniser son infrastructure réseau",
            "slug": "moderniser-reseau",
            "excerpt": "Un guide complet.",
            "publishedAt": "2025-10-08",
            "author": { "name": "Équipe Réseaux", "avatar": "/images/logo.png" },
            "category": [{ "title": "Réseau" }, "Sécurité"],
            "mainImage": { "url": "/images/code.png", "alt": "Infrastructure" },
            "body": [
                { "_type": "h2", "text": "Pourquoi moderniser ?" },
                { "_type": "p", "text": "Parce que." }
            ]
        }"#
    }

    #[test]
    fn deserializes_full_post() {
        let post: Post = serde_json::from_str(sample_post_json()).unwrap();

        assert_eq!(post.id, "blog-001");
        assert_eq!(post.slug, "moderniser-reseau");
        assert_eq!(post.published_at.as_deref(), Some("2025-10-08"));
        assert_eq!(post.main_category(), Some("Réseau"));
        assert_eq!(post.author_name(), Some("Équipe Réseaux"));
        assert_eq!(post.body.len(), 2);
        assert!(matches!(
            &post.body[0],
            ContentBlock::Heading {
                level: HeadingLevel::H2,
                ..
            }
        ));
    }

    #[test]
    fn category_accepts_both_wire_shapes() {
        let post: Post = serde_json::from_str(sample_post_json()).unwrap();
        assert_eq!(post.categories[0].title(), "Réseau");
        assert_eq!(post.categories[1].title(), "Sécurité");
    }

    #[test]
    fn optional_metadata_defaults_to_absent() {
        let post: Post =
            serde_json::from_str(r#"{ "_id": "p1", "title": "Bare", "slug": "bare" }"#).unwrap();

        assert_eq!(post.excerpt, None);
        assert_eq!(post.author, None);
        assert_eq!(post.main_category(), None);
        assert!(post.body.is_empty());
    }
}
