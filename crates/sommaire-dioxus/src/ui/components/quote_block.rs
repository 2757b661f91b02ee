use dioxus::prelude::*;

#[component]
pub fn QuoteBlock(text: String) -> Element {
    rsx! {
        blockquote { class: "article-quote", "{text}" }
    }
}
