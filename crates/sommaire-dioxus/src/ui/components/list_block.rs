use dioxus::prelude::*;

#[component]
pub fn ListBlock(items: Vec<String>) -> Element {
    rsx! {
        ul { class: "article-list",
            for (index, item) in items.iter().enumerate() {
                li { key: "{index}", "{item}" }
            }
        }
    }
}
