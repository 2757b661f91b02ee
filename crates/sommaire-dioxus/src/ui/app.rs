use crate::ui::components::PostView;
use dioxus::prelude::*;
use sommaire_config::BandConfig;
use sommaire_engine::{ContentSource, Post, StaticCatalog, ViewportBand, io};
use std::path::PathBuf;

const READER_CSS: &str = include_str!("../assets/reader.css");

fn viewport_band(band: &BandConfig) -> ViewportBand {
    ViewportBand {
        top_fraction: band.top_fraction,
        bottom_fraction: band.bottom_fraction,
        thresholds: band.thresholds.clone(),
    }
}

#[component]
pub fn App(content_path: PathBuf, band: BandConfig) -> Element {
    // Load the catalog once per app; the post list is read-only.
    let catalog = use_signal(move || match io::load_catalog(&content_path) {
        Ok(catalog) => catalog,
        Err(e) => {
            log::error!("Error loading catalog: {e}");
            StaticCatalog::default()
        }
    });

    let mut selected_slug = use_signal(|| None::<String>);

    let posts: Vec<Post> = catalog.read().posts().to_vec();
    let selected: Option<String> = selected_slug
        .read()
        .clone()
        .or_else(|| posts.first().map(|post| post.slug.clone()));
    let open_post: Option<Post> = selected
        .as_ref()
        .and_then(|slug| catalog.read().post_by_slug(slug).cloned());
    let recent: Vec<Post> = selected
        .as_ref()
        .map(|slug| {
            catalog
                .read()
                .recent(Some(slug.as_str()), 3)
                .into_iter()
                .cloned()
                .collect()
        })
        .unwrap_or_default();
    let band = viewport_band(&band);

    rsx! {
        style { {READER_CSS} }
        div { class: "app-container",
            div { class: "sidebar",
                h2 { "Articles" }
                ul { class: "post-list",
                    for post in posts.iter().cloned() {
                        li {
                            key: "{post.slug}",
                            class: if Some(post.slug.as_str()) == selected.as_deref() {
                                "post-item selected"
                            } else {
                                "post-item"
                            },
                            onclick: {
                                let slug = post.slug.clone();
                                move |_| selected_slug.set(Some(slug.clone()))
                            },
                            span { class: "post-item-title", "{post.title}" }
                            if let Some(date) = post.published_at.as_ref() {
                                span { class: "post-item-date", "{date}" }
                            }
                        }
                    }
                }
            }
            div { class: "main-content",
                if let Some(post) = open_post.as_ref() {
                    PostView {
                        key: "{post.slug}",
                        post: post.clone(),
                        band: band.clone(),
                        recent: recent.clone(),
                        on_select: move |slug: String| selected_slug.set(Some(slug)),
                    }
                } else {
                    p { class: "empty-state", "Aucun article disponible." }
                }
            }
        }
    }
}
