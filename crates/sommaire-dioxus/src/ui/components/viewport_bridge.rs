use dioxus::document::{self, Eval};
use serde::Deserialize;
use sommaire_engine::{HeadingWatch, IntersectionSample, ViewportBand};

/// One report streamed back from the page script.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ViewportReport {
    Scroll { offset: f64, scrollable: f64 },
    Headings { samples: Vec<SampleReport> },
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SampleReport {
    pub id: String,
    pub ratio: f64,
    pub is_intersecting: bool,
}

impl From<SampleReport> for IntersectionSample {
    fn from(report: SampleReport) -> Self {
        IntersectionSample {
            id: report.id,
            ratio: report.ratio,
            is_intersecting: report.is_intersecting,
        }
    }
}

/// `HeadingWatch` backed by an injected page script: an
/// IntersectionObserver over the heading ids plus a passive scroll
/// listener. Reports flow back over the eval channel; `release` tears
/// the script down so no signal can arrive after unmount.
#[derive(Default)]
pub struct EvalWatch {
    channel: Option<Eval>,
}

impl EvalWatch {
    pub fn new() -> Self {
        Self { channel: None }
    }

    /// Hand the report channel over to the component's receive loop.
    pub fn take_channel(&mut self) -> Option<Eval> {
        self.channel.take()
    }
}

impl HeadingWatch for EvalWatch {
    fn observe(&mut self, ids: &[String], band: &ViewportBand) {
        self.channel = Some(document::eval(&install_script(ids, band)));
    }

    fn release(&mut self) {
        document::eval(TEARDOWN_JS);
        self.channel = None;
    }
}

pub const TEARDOWN_JS: &str =
    "if (window.__sommaireWatch) { window.__sommaireWatch.teardown(); }";

/// Build the page script observing the given heading ids.
///
/// The band fractions become the observer's root margins (negative
/// percentages shrink the viewport to the active band); the scroll
/// listener reports document offset and scrollable extent on every
/// scroll, plus once on install so progress starts correct.
pub fn install_script(ids: &[String], band: &ViewportBand) -> String {
    let ids_json = serde_json::to_string(ids).unwrap_or_else(|_| "[]".to_string());
    let thresholds = band
        .thresholds
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    let top_pct = band.top_fraction * 100.0;
    let bottom_pct = band.bottom_fraction * 100.0;

    format!(
        r#"
(function () {{
  if (window.__sommaireWatch) {{ window.__sommaireWatch.teardown(); }}

  const ids = {ids_json};
  const onScroll = () => {{
    const doc = document.documentElement;
    const offset = window.scrollY || doc.scrollTop || 0;
    const scrollable = Math.max(0, doc.scrollHeight - window.innerHeight);
    dioxus.send({{ kind: "scroll", offset: offset, scrollable: scrollable }});
  }};

  const observer = new IntersectionObserver((entries) => {{
    dioxus.send({{
      kind: "headings",
      samples: entries.map((e) => ({{
        id: e.target.id,
        ratio: e.intersectionRatio,
        isIntersecting: e.isIntersecting,
      }})),
    }});
  }}, {{
    rootMargin: "-{top_pct}% 0px -{bottom_pct}% 0px",
    threshold: [{thresholds}],
  }});

  ids.forEach((id) => {{
    const el = document.getElementById(id);
    if (el) {{ observer.observe(el); }}
  }});

  window.addEventListener("scroll", onScroll, {{ passive: true }});
  onScroll();

  window.__sommaireWatch = {{
    teardown: () => {{
      observer.disconnect();
      window.removeEventListener("scroll", onScroll);
      delete window.__sommaireWatch;
    }},
  }};
}})();
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn scroll_report_deserializes() {
        let report: ViewportReport =
            serde_json::from_str(r#"{ "kind": "scroll", "offset": 120.5, "scrollable": 900.0 }"#)
                .unwrap();
        assert_eq!(
            report,
            ViewportReport::Scroll {
                offset: 120.5,
                scrollable: 900.0,
            }
        );
    }

    #[test]
    fn headings_report_deserializes_camel_case_samples() {
        let report: ViewportReport = serde_json::from_str(
            r#"{
                "kind": "headings",
                "samples": [
                    { "id": "intro", "ratio": 0.75, "isIntersecting": true },
                    { "id": "setup", "ratio": 0.0, "isIntersecting": false }
                ]
            }"#,
        )
        .unwrap();

        let ViewportReport::Headings { samples } = report else {
            panic!("expected headings report");
        };
        assert_eq!(samples.len(), 2);

        let sample: IntersectionSample = samples.into_iter().next().unwrap().into();
        assert_eq!(sample.id, "intro");
        assert!(sample.is_intersecting);
    }

    #[test]
    fn install_script_embeds_ids_and_band() {
        let ids = vec!["intro".to_string(), "setup".to_string()];
        let band = ViewportBand::default();

        let script = install_script(&ids, &band);

        assert!(script.contains(r#"["intro","setup"]"#));
        assert!(script.contains("rootMargin: \"-20% 0px -70% 0px\""));
        assert!(script.contains("threshold: [0.1, 0.25, 0.5, 0.75]"));
        assert!(script.contains("passive: true"));
    }
}
