use crate::ui::components::{CodeBlock, Heading, ImageFigure, ListBlock, Paragraph, QuoteBlock};
use dioxus::prelude::*;
use sommaire_engine::RenderNode;

/// Dispatch one render node to its element component.
#[component]
pub fn BlockNode(node: RenderNode) -> Element {
    match node {
        RenderNode::Heading { level, text, id } => {
            rsx! { Heading { level, text, id } }
        }
        RenderNode::Paragraph { text } => {
            rsx! { Paragraph { text } }
        }
        RenderNode::Quote { text } => {
            rsx! { QuoteBlock { text } }
        }
        RenderNode::List { items } => {
            rsx! { ListBlock { items } }
        }
        RenderNode::Code { code, lang } => {
            rsx! { CodeBlock { code, lang } }
        }
        RenderNode::Image { url, alt } => {
            rsx! { ImageFigure { url, alt } }
        }
    }
}
