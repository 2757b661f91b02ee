use crate::ui::components::viewport_bridge::{EvalWatch, ViewportReport};
use crate::ui::components::{ArticleBody, PostHeader, RecentPosts, TocPanel};
use dioxus::prelude::*;
use sommaire_engine::{IntersectionSample, Post, ReadingNavigator, ViewportBand, normalize};

/// One open article: body, table of contents, reading progress.
///
/// The caller must key this component by post slug so a different post
/// remounts the view — the navigator is created fresh per view and is
/// never re-mounted.
#[component]
pub fn PostView(post: Post, band: ViewportBand, recent: Vec<Post>, on_select: Callback<String>) -> Element {
    let doc = normalize(&post.body);

    let mut navigator =
        use_signal(move || ReadingNavigator::with_band(EvalWatch::new(), band.clone()));

    // Attach the watch and drain its report channel for the lifetime
    // of this view.
    let toc = doc.toc.clone();
    use_future(move || {
        let toc = toc.clone();
        async move {
            let channel = {
                let mut nav = navigator.write();
                nav.mount(&toc);
                nav.watch_mut().take_channel()
            };
            let Some(mut channel) = channel else {
                return;
            };

            loop {
                match channel.recv::<ViewportReport>().await {
                    Ok(ViewportReport::Scroll { offset, scrollable }) => {
                        navigator.write().on_scroll(offset, scrollable);
                    }
                    Ok(ViewportReport::Headings { samples }) => {
                        let samples: Vec<IntersectionSample> =
                            samples.into_iter().map(Into::into).collect();
                        navigator.write().on_viewport(&samples);
                    }
                    Err(e) => {
                        log::debug!("viewport channel closed: {e}");
                        break;
                    }
                }
            }
        }
    });

    // Teardown must run on every exit path; a signal arriving after
    // this point is a defect.
    use_drop(move || {
        navigator.write().unmount();
    });

    let state = navigator.read().state().clone();
    let hero = post.main_image.clone().and_then(|image| image.url);
    let hero_alt = post
        .main_image
        .as_ref()
        .and_then(|image| image.alt.clone())
        .unwrap_or_else(|| post.title.clone());

    rsx! {
        article { class: "post-view",
            PostHeader { post: post.clone() }
            if let Some(hero) = hero.as_ref() {
                div { class: "post-hero",
                    img { src: "{hero}", alt: "{hero_alt}" }
                }
            }
            section { class: "post-layout",
                ArticleBody { nodes: doc.nodes.clone() }
                if !doc.toc.is_empty() {
                    TocPanel {
                        toc: doc.toc.clone(),
                        active_id: state.active_id.clone(),
                        progress: state.progress_percent,
                    }
                }
            }
            RecentPosts { posts: recent, on_select }
        }
    }
}
