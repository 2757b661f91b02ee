use crate::ui::components::ProgressBar;
use dioxus::prelude::*;
use sommaire_engine::TocEntry;

/// Navigation list over the document's headings.
///
/// The entry matching `active_id` is highlighted. Colliding slugs mean
/// several entries can share an id; they highlight together, which
/// matches the anchors painted in the body.
#[component]
pub fn TocPanel(toc: Vec<TocEntry>, active_id: Option<String>, progress: f64) -> Element {
    rsx! {
        aside { class: "toc-panel",
            p { class: "toc-title", "Sommaire" }
            nav { class: "toc-links",
                for (index, entry) in toc.iter().enumerate() {
                    a {
                        key: "{index}",
                        href: "#{entry.id}",
                        class: if active_id.as_deref() == Some(entry.id.as_str()) {
                            "toc-link active"
                        } else {
                            "toc-link"
                        },
                        "{entry.title}"
                    }
                }
            }
            ProgressBar { percent: progress }
        }
    }
}
