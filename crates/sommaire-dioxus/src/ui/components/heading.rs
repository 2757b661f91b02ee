use dioxus::prelude::*;
use sommaire_engine::HeadingLevel;

/// Heading element carrying its slug as the anchor id. TOC links point
/// at `#<id>`, so the id painted here must be exactly the slug the
/// normalizer derived.
#[component]
pub fn Heading(level: HeadingLevel, text: String, id: String) -> Element {
    match level {
        HeadingLevel::H2 => {
            rsx! { h2 { id: "{id}", class: "article-heading level-2", "{text}" } }
        }
        HeadingLevel::H3 => {
            rsx! { h3 { id: "{id}", class: "article-heading level-3", "{text}" } }
        }
    }
}
