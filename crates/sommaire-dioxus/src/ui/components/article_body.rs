use crate::ui::components::BlockNode;
use dioxus::prelude::*;
use sommaire_engine::RenderNode;

/// The document body: render nodes painted in source order.
#[component]
pub fn ArticleBody(nodes: Vec<RenderNode>) -> Element {
    rsx! {
        div { class: "article-body",
            for (index, node) in nodes.iter().enumerate() {
                BlockNode { key: "{index}", node: node.clone() }
            }
        }
    }
}
