pub mod slug;

pub use slug::slug;

use crate::content::{ContentBlock, HeadingLevel};

/// Render-ready node prepared for UI consumption.
///
/// Nodes carry everything a frontend needs to paint the document body
/// without reaching back into the raw block sequence. Headings carry
/// the slug that the paint layer must assign as the element's anchor
/// id — TOC links point at `#<id>`.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderNode {
    Heading {
        level: HeadingLevel,
        text: String,
        id: String,
    },
    Paragraph {
        text: String,
    },
    Quote {
        text: String,
    },
    List {
        items: Vec<String>,
    },
    Code {
        code: String,
        lang: Option<String>,
    },
    Image {
        url: String,
        alt: Option<String>,
    },
}

/// One navigable heading in the table of contents.
///
/// Slug collisions between distinct headings are deliberately NOT
/// deduplicated — both entries carry the same id, matching what the
/// paint layer puts on the elements.
#[derive(Debug, Clone, PartialEq)]
pub struct TocEntry {
    pub title: String,
    pub id: String,
}

/// Output of [`normalize`]: ordered render nodes plus the derived
/// table of contents.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NormalizedDocument {
    pub nodes: Vec<RenderNode>,
    pub toc: Vec<TocEntry>,
}

/// Convert a raw block sequence into render nodes and a table of
/// contents.
///
/// Total and pure: never fails, never mutates its input, and preserves
/// source order. Malformed blocks degrade per-block instead of taking
/// the document down:
///
/// - a heading whose slug is empty is still rendered but excluded from
///   the TOC (no navigable identity),
/// - an image without a url is dropped with a warning,
/// - unrecognized block tags are skipped.
pub fn normalize(blocks: &[ContentBlock]) -> NormalizedDocument {
    let mut nodes = Vec::with_capacity(blocks.len());
    let mut toc = Vec::new();

    for block in blocks {
        match block {
            ContentBlock::Heading { level, text } => {
                let id = slug(text);
                if id.is_empty() {
                    log::debug!("heading {text:?} has no navigable identity, omitted from toc");
                } else {
                    toc.push(TocEntry {
                        title: text.trim().to_string(),
                        id: id.clone(),
                    });
                }
                nodes.push(RenderNode::Heading {
                    level: *level,
                    text: text.clone(),
                    id,
                });
            }
            ContentBlock::Paragraph { text } => {
                nodes.push(RenderNode::Paragraph { text: text.clone() });
            }
            ContentBlock::Quote { text } => {
                nodes.push(RenderNode::Quote { text: text.clone() });
            }
            ContentBlock::List { items } => {
                // An empty list is preserved, not dropped.
                nodes.push(RenderNode::List {
                    items: items.clone(),
                });
            }
            ContentBlock::Code { code, lang } => {
                nodes.push(RenderNode::Code {
                    code: code.clone(),
                    lang: lang.clone(),
                });
            }
            ContentBlock::Image { url, alt } => match url {
                Some(url) if !url.is_empty() => {
                    nodes.push(RenderNode::Image {
                        url: url.clone(),
                        alt: alt.clone(),
                    });
                }
                _ => {
                    log::warn!("image block without url skipped (alt: {alt:?})");
                }
            },
            ContentBlock::Unknown => {
                log::debug!("unrecognized block tag skipped");
            }
        }
    }

    NormalizedDocument { nodes, toc }
}
