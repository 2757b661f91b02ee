use dioxus::prelude::*;

#[component]
pub fn ImageFigure(url: String, alt: Option<String>) -> Element {
    let alt_text = alt.clone().unwrap_or_default();

    rsx! {
        figure { class: "article-figure",
            img { src: "{url}", alt: "{alt_text}" }
            if let Some(caption) = alt.as_ref() {
                figcaption { "{caption}" }
            }
        }
    }
}
