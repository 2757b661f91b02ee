use dioxus::prelude::*;
use sommaire_engine::Post;

/// Article header: title, excerpt, byline and category badge.
#[component]
pub fn PostHeader(post: Post) -> Element {
    let author_name = post.author_name().map(str::to_string);
    let avatar = post
        .author
        .as_ref()
        .and_then(|a| a.avatar.clone())
        .unwrap_or_else(|| "/images/logo.png".to_string());
    let date = post.published_at.clone().unwrap_or_default();
    let category = post.main_category().map(str::to_string);

    rsx! {
        header { class: "post-header",
            h1 { class: "post-title", "{post.title}" }
            if let Some(excerpt) = post.excerpt.as_ref() {
                p { class: "post-excerpt", "{excerpt}" }
            }
            div { class: "post-byline",
                img { class: "post-avatar", src: "{avatar}", alt: "Auteur" }
                if let Some(name) = author_name.as_ref() {
                    span { class: "post-author", "{name}" }
                }
                if !date.is_empty() {
                    span { class: "post-date", "{date}" }
                }
                if let Some(category) = category.as_ref() {
                    span { class: "post-category", "{category}" }
                }
            }
        }
    }
}
