use dioxus::prelude::*;

#[component]
pub fn CodeBlock(code: String, lang: Option<String>) -> Element {
    let code_class = lang
        .as_ref()
        .map(|l| format!("language-{l}"))
        .unwrap_or_else(|| "language-text".to_string());

    rsx! {
        pre { class: "article-code",
            code {
                class: "{code_class}",
                "{code}"
            }
        }
    }
}
