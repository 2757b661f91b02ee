use dioxus::prelude::*;
use sommaire_engine::Post;

/// Cards for the latest posts, excluding the one currently open.
#[component]
pub fn RecentPosts(posts: Vec<Post>, on_select: Callback<String>) -> Element {
    if posts.is_empty() {
        return rsx! {};
    }

    rsx! {
        section { class: "recent-posts",
            h2 { "Articles récents" }
            div { class: "recent-grid",
                for post in posts.iter().cloned() {
                    article {
                        key: "{post.slug}",
                        class: "recent-card",
                        onclick: {
                            let slug = post.slug.clone();
                            move |_| on_select.call(slug.clone())
                        },
                        h3 { "{post.title}" }
                        if let Some(excerpt) = post.excerpt.as_ref() {
                            p { "{excerpt}" }
                        }
                        if let Some(date) = post.published_at.as_ref() {
                            span { class: "recent-date", "{date}" }
                        }
                    }
                }
            }
        }
    }
}
