use dioxus::prelude::*;

/// Reading progress as a filled fraction of its track.
#[component]
pub fn ProgressBar(percent: f64) -> Element {
    let width = percent.clamp(0.0, 100.0);

    rsx! {
        div { class: "progress-track",
            div { class: "progress-bar", style: "width: {width}%;" }
        }
    }
}
