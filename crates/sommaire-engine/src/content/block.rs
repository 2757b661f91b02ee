use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Heading depth used in post bodies.
///
/// The catalog format only carries two levels; anything deeper is not
/// part of the content schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeadingLevel {
    H2,
    H3,
}

impl HeadingLevel {
    pub fn as_u8(self) -> u8 {
        match self {
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
        }
    }
}

/// One unit of rich content in source order.
///
/// Blocks arrive from the content source as a loosely-typed tagged
/// sequence; this enum makes every variant's optional fields explicit.
/// Source order is render order — nothing downstream may reorder
/// blocks.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentBlock {
    Heading { level: HeadingLevel, text: String },
    Paragraph { text: String },
    Quote { text: String },
    List { items: Vec<String> },
    Code { code: String, lang: Option<String> },
    /// `url` is required for rendering; a block without one is dropped
    /// by the normalizer rather than failing the document.
    Image { url: Option<String>, alt: Option<String> },
    /// Unrecognized block tag. New content types degrade to "absent"
    /// instead of breaking the page.
    Unknown,
}

/// Wire shape of the catalog's block format (`_type`-tagged objects).
#[derive(Serialize, Deserialize)]
#[serde(tag = "_type", rename_all = "lowercase")]
enum RawBlock {
    H2 {
        text: String,
    },
    H3 {
        text: String,
    },
    P {
        text: String,
    },
    Quote {
        text: String,
    },
    Ul {
        items: Vec<String>,
    },
    Code {
        code: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        lang: Option<String>,
    },
    Image {
        #[serde(default)]
        url: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        alt: Option<String>,
    },
    #[serde(other)]
    Unknown,
}

impl From<RawBlock> for ContentBlock {
    fn from(raw: RawBlock) -> Self {
        match raw {
            RawBlock::H2 { text } => ContentBlock::Heading {
                level: HeadingLevel::H2,
                text,
            },
            RawBlock::H3 { text } => ContentBlock::Heading {
                level: HeadingLevel::H3,
                text,
            },
            RawBlock::P { text } => ContentBlock::Paragraph { text },
            RawBlock::Quote { text } => ContentBlock::Quote { text },
            RawBlock::Ul { items } => ContentBlock::List { items },
            RawBlock::Code { code, lang } => ContentBlock::Code { code, lang },
            RawBlock::Image { url, alt } => ContentBlock::Image { url, alt },
            RawBlock::Unknown => ContentBlock::Unknown,
        }
    }
}

impl From<&ContentBlock> for RawBlock {
    fn from(block: &ContentBlock) -> Self {
        match block {
            ContentBlock::Heading {
                level: HeadingLevel::H2,
                text,
            } => RawBlock::H2 { text: text.clone() },
            ContentBlock::Heading {
                level: HeadingLevel::H3,
                text,
            } => RawBlock::H3 { text: text.clone() },
            ContentBlock::Paragraph { text } => RawBlock::P { text: text.clone() },
            ContentBlock::Quote { text } => RawBlock::Quote { text: text.clone() },
            ContentBlock::List { items } => RawBlock::Ul {
                items: items.clone(),
            },
            ContentBlock::Code { code, lang } => RawBlock::Code {
                code: code.clone(),
                lang: lang.clone(),
            },
            ContentBlock::Image { url, alt } => RawBlock::Image {
                url: url.clone(),
                alt: alt.clone(),
            },
            ContentBlock::Unknown => RawBlock::Unknown,
        }
    }
}

impl<'de> Deserialize<'de> for ContentBlock {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        RawBlock::deserialize(deserializer).map(ContentBlock::from)
    }
}

impl Serialize for ContentBlock {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        RawBlock::from(self).serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn deserializes_catalog_block_format() {
        let json = r#"[
            { "_type": "h2", "text": "Pourquoi moderniser ?" },
            { "_type": "p", "text": "Les réseaux modernes doivent évoluer." },
            { "_type": "ul", "items": ["Segmenter", "Chiffrer"] },
            { "_type": "code", "lang": "bash", "code": "ping -c 3 example.com" },
            { "_type": "quote", "text": "La simplicité est un avantage." },
            { "_type": "image", "url": "/images/arch.jpg", "alt": "Architecture" }
        ]"#;

        let blocks: Vec<ContentBlock> = serde_json::from_str(json).unwrap();

        assert_eq!(
            blocks[0],
            ContentBlock::Heading {
                level: HeadingLevel::H2,
                text: "Pourquoi moderniser ?".to_string(),
            }
        );
        assert_eq!(
            blocks[2],
            ContentBlock::List {
                items: vec!["Segmenter".to_string(), "Chiffrer".to_string()],
            }
        );
        assert_eq!(
            blocks[3],
            ContentBlock::Code {
                code: "ping -c 3 example.com".to_string(),
                lang: Some("bash".to_string()),
            }
        );
    }

    #[test]
    fn code_block_language_tag_is_optional() {
        let block: ContentBlock =
            serde_json::from_str(r#"{ "_type": "code", "code": "ls" }"#).unwrap();
        assert_eq!(
            block,
            ContentBlock::Code {
                code: "ls".to_string(),
                lang: None,
            }
        );
    }

    #[test]
    fn image_block_tolerates_missing_url() {
        let block: ContentBlock = serde_json::from_str(r#"{ "_type": "image" }"#).unwrap();
        assert_eq!(block, ContentBlock::Image { url: None, alt: None });
    }

    #[test]
    fn unknown_block_tag_degrades_to_unknown() {
        let block: ContentBlock =
            serde_json::from_str(r#"{ "_type": "video", "url": "https://example.com" }"#).unwrap();
        assert_eq!(block, ContentBlock::Unknown);
    }

    #[test]
    fn block_format_roundtrips_through_serde() {
        let original = vec![
            ContentBlock::Heading {
                level: HeadingLevel::H3,
                text: "Setup".to_string(),
            },
            ContentBlock::Paragraph {
                text: "Install things.".to_string(),
            },
        ];

        let json = serde_json::to_string(&original).unwrap();
        assert!(json.contains(r#""_type":"h3""#));

        let parsed: Vec<ContentBlock> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, original);
    }
}
