pub mod watch;

pub use watch::{HeadingWatch, NullWatch};

use crate::render::TocEntry;

/// The viewport region in which a heading counts as "active".
///
/// Fractions of viewport height cut off the top and bottom of the
/// screen, biasing the band toward the upper/middle portion — a
/// heading just scrolled under the page header should win over one
/// barely peeking in at the bottom. `thresholds` are the intersection
/// ratios at which the host re-reports visibility.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportBand {
    pub top_fraction: f32,
    pub bottom_fraction: f32,
    pub thresholds: Vec<f32>,
}

impl Default for ViewportBand {
    fn default() -> Self {
        Self {
            top_fraction: 0.2,
            bottom_fraction: 0.7,
            thresholds: vec![0.1, 0.25, 0.5, 0.75],
        }
    }
}

/// One visibility report for a heading element.
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionSample {
    pub id: String,
    pub ratio: f64,
    pub is_intersecting: bool,
}

/// What the UI consumes: the highlighted TOC entry and how far the
/// reader has scrolled. Recreated fresh for every page view, never
/// persisted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReadingState {
    pub active_id: Option<String>,
    pub progress_percent: f64,
}

/// Lifecycle of one mounted document view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No headings to track; scroll progress still updates.
    Idle,
    /// Watch attached, visibility signals drive the active heading.
    Tracking,
    /// View torn down; every further signal is a no-op.
    Unmounted,
}

/// Tracks which heading is "active" and how far the document has been
/// scrolled, driven by discrete host signals.
///
/// One navigator is owned by exactly one mounted view. All methods run
/// synchronously on the host's event loop; signals are applied in
/// delivery order with last-write-wins semantics. There is no
/// buffering and no locking — the single-threaded event model makes
/// races impossible by construction.
pub struct ReadingNavigator<W: HeadingWatch> {
    phase: Phase,
    /// Toc ids in document order; index is the tie-break rank.
    order: Vec<String>,
    state: ReadingState,
    band: ViewportBand,
    watch: W,
    released: bool,
}

impl<W: HeadingWatch> ReadingNavigator<W> {
    pub fn new(watch: W) -> Self {
        Self::with_band(watch, ViewportBand::default())
    }

    pub fn with_band(watch: W, band: ViewportBand) -> Self {
        Self {
            phase: Phase::Idle,
            order: Vec::new(),
            state: ReadingState::default(),
            band,
            watch,
            released: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn state(&self) -> &ReadingState {
        &self.state
    }

    pub fn band(&self) -> &ViewportBand {
        &self.band
    }

    /// Host access to the watch, e.g. to take over a channel the watch
    /// opened in `observe`.
    pub fn watch_mut(&mut self) -> &mut W {
        &mut self.watch
    }

    /// Attach to a rendered document. With a non-empty TOC this enters
    /// `Tracking`, registers every heading id with the watch, and seeds
    /// the active heading with the first entry. An empty TOC stays
    /// `Idle` — nothing to track, but progress still updates.
    pub fn mount(&mut self, toc: &[TocEntry]) {
        if self.phase != Phase::Idle {
            log::debug!("mount ignored in phase {:?}", self.phase);
            return;
        }

        if toc.is_empty() {
            return;
        }

        self.order = toc.iter().map(|entry| entry.id.clone()).collect();
        self.state.active_id = Some(self.order[0].clone());
        self.watch.observe(&self.order, &self.band);
        self.phase = Phase::Tracking;
    }

    /// Apply a batch of visibility reports.
    ///
    /// Among intersecting samples for known heading ids, the greatest
    /// intersection ratio wins; ties break to the earliest heading in
    /// document order. When nothing intersects the previous active id
    /// is kept (sticky last-known). Samples for ids that were never
    /// registered — a slug collision, an element that never mounted —
    /// are inert.
    pub fn on_viewport(&mut self, samples: &[IntersectionSample]) {
        if self.phase != Phase::Tracking {
            return;
        }

        let mut best: Option<(usize, f64)> = None;
        for sample in samples {
            if !sample.is_intersecting {
                continue;
            }
            let Some(rank) = self.order.iter().position(|id| *id == sample.id) else {
                continue;
            };
            best = match best {
                None => Some((rank, sample.ratio)),
                Some((best_rank, best_ratio)) => {
                    if sample.ratio > best_ratio
                        || (sample.ratio == best_ratio && rank < best_rank)
                    {
                        Some((rank, sample.ratio))
                    } else {
                        Some((best_rank, best_ratio))
                    }
                }
            };
        }

        if let Some((rank, _)) = best {
            self.state.active_id = Some(self.order[rank].clone());
        }
    }

    /// Apply a scroll report.
    ///
    /// `scrollable_height` is the scrollable extent of the document
    /// container. The `max(1, …)` guards division by zero when content
    /// is shorter than the viewport; the clamp guards overscroll and
    /// bounce effects.
    pub fn on_scroll(&mut self, offset: f64, scrollable_height: f64) {
        if self.phase == Phase::Unmounted {
            return;
        }

        let total = scrollable_height.max(1.0);
        let percent = 100.0 * offset.max(0.0) / total;
        self.state.progress_percent = percent.clamp(0.0, 100.0);
    }

    /// Tear down the view. Releases the watch and drops into
    /// `Unmounted`; any signal delivered afterwards must not mutate
    /// state.
    pub fn unmount(&mut self) {
        self.release_watch();
        self.phase = Phase::Unmounted;
    }

    fn release_watch(&mut self) {
        if !self.released {
            if self.phase == Phase::Tracking {
                self.watch.release();
            }
            self.released = true;
        }
    }
}

impl<W: HeadingWatch> Drop for ReadingNavigator<W> {
    fn drop(&mut self) {
        // Release on every exit path, including panic unwinds and
        // views dropped without an explicit unmount.
        self.release_watch();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records observe/release calls so tests can assert the resource
    /// lifecycle contract.
    #[derive(Default)]
    struct WatchLog {
        observed: Vec<Vec<String>>,
        releases: usize,
    }

    #[derive(Clone, Default)]
    struct RecordingWatch {
        log: Rc<RefCell<WatchLog>>,
    }

    impl HeadingWatch for RecordingWatch {
        fn observe(&mut self, ids: &[String], _band: &ViewportBand) {
            self.log.borrow_mut().observed.push(ids.to_vec());
        }

        fn release(&mut self) {
            self.log.borrow_mut().releases += 1;
        }
    }

    fn toc(ids: &[&str]) -> Vec<TocEntry> {
        ids.iter()
            .map(|id| TocEntry {
                title: id.to_string(),
                id: id.to_string(),
            })
            .collect()
    }

    fn sample(id: &str, ratio: f64, is_intersecting: bool) -> IntersectionSample {
        IntersectionSample {
            id: id.to_string(),
            ratio,
            is_intersecting,
        }
    }

    #[test]
    fn empty_toc_stays_idle_with_no_active_heading() {
        let watch = RecordingWatch::default();
        let log = watch.log.clone();
        let mut nav = ReadingNavigator::new(watch);

        nav.mount(&[]);

        assert_eq!(nav.phase(), Phase::Idle);
        assert_eq!(nav.state().active_id, None);
        assert!(log.borrow().observed.is_empty());
    }

    #[test]
    fn mount_enters_tracking_and_seeds_first_entry() {
        let watch = RecordingWatch::default();
        let log = watch.log.clone();
        let mut nav = ReadingNavigator::new(watch);

        nav.mount(&toc(&["intro", "setup"]));

        assert_eq!(nav.phase(), Phase::Tracking);
        assert_eq!(nav.state().active_id.as_deref(), Some("intro"));
        assert_eq!(
            log.borrow().observed,
            vec![vec!["intro".to_string(), "setup".to_string()]]
        );
    }

    #[test]
    fn highest_intersection_ratio_wins() {
        let mut nav = ReadingNavigator::new(NullWatch);
        nav.mount(&toc(&["intro", "setup"]));

        nav.on_viewport(&[
            sample("intro", 0.25, true),
            sample("setup", 0.75, true),
        ]);

        assert_eq!(nav.state().active_id.as_deref(), Some("setup"));
    }

    #[test]
    fn ratio_ties_break_to_document_order() {
        let mut nav = ReadingNavigator::new(NullWatch);
        nav.mount(&toc(&["intro", "setup", "wrap-up"]));

        nav.on_viewport(&[
            sample("wrap-up", 0.5, true),
            sample("setup", 0.5, true),
        ]);

        assert_eq!(nav.state().active_id.as_deref(), Some("setup"));
    }

    #[test]
    fn active_heading_is_sticky_when_nothing_intersects() {
        let mut nav = ReadingNavigator::new(NullWatch);
        nav.mount(&toc(&["intro", "setup"]));

        nav.on_viewport(&[sample("setup", 0.9, true)]);
        assert_eq!(nav.state().active_id.as_deref(), Some("setup"));

        // Reader scrolled to a gap between headings.
        nav.on_viewport(&[
            sample("intro", 0.0, false),
            sample("setup", 0.0, false),
        ]);
        assert_eq!(nav.state().active_id.as_deref(), Some("setup"));
    }

    #[test]
    fn unregistered_ids_are_inert() {
        let mut nav = ReadingNavigator::new(NullWatch);
        nav.mount(&toc(&["intro"]));

        nav.on_viewport(&[sample("phantom", 1.0, true)]);

        assert_eq!(nav.state().active_id.as_deref(), Some("intro"));
    }

    #[test]
    fn progress_is_clamped_against_overscroll() {
        let mut nav = ReadingNavigator::new(NullWatch);
        nav.mount(&toc(&["intro"]));

        nav.on_scroll(-50.0, 1000.0);
        assert_eq!(nav.state().progress_percent, 0.0);

        nav.on_scroll(2000.0, 1000.0);
        assert_eq!(nav.state().progress_percent, 100.0);
    }

    #[test]
    fn progress_guards_division_by_zero_for_short_content() {
        let mut nav = ReadingNavigator::new(NullWatch);
        nav.mount(&toc(&["intro"]));

        nav.on_scroll(0.0, 0.0);
        assert_eq!(nav.state().progress_percent, 0.0);

        nav.on_scroll(10.0, 0.0);
        assert_eq!(nav.state().progress_percent, 100.0);
    }

    #[test]
    fn progress_is_monotone_while_scrolling_down() {
        let mut nav = ReadingNavigator::new(NullWatch);
        nav.mount(&toc(&["intro"]));

        let mut last = nav.state().progress_percent;
        for offset in [0.0, 120.0, 480.0, 730.0, 1000.0] {
            nav.on_scroll(offset, 1000.0);
            let current = nav.state().progress_percent;
            assert!(current >= last, "progress regressed: {last} -> {current}");
            last = current;
        }
        assert_eq!(last, 100.0);
    }

    #[test]
    fn progress_updates_even_without_headings() {
        let mut nav = ReadingNavigator::new(NullWatch);
        nav.mount(&[]);

        nav.on_scroll(250.0, 1000.0);

        assert_eq!(nav.phase(), Phase::Idle);
        assert_eq!(nav.state().progress_percent, 25.0);
    }

    #[test]
    fn unmount_releases_watch_exactly_once() {
        let watch = RecordingWatch::default();
        let log = watch.log.clone();
        let mut nav = ReadingNavigator::new(watch);
        nav.mount(&toc(&["intro"]));

        nav.unmount();
        nav.unmount();
        drop(nav);

        assert_eq!(log.borrow().releases, 1);
    }

    #[test]
    fn drop_without_unmount_still_releases_watch() {
        let watch = RecordingWatch::default();
        let log = watch.log.clone();
        {
            let mut nav = ReadingNavigator::new(watch);
            nav.mount(&toc(&["intro"]));
        }
        assert_eq!(log.borrow().releases, 1);
    }

    #[test]
    fn idle_navigator_never_touches_the_watch() {
        let watch = RecordingWatch::default();
        let log = watch.log.clone();
        {
            let mut nav = ReadingNavigator::new(watch);
            nav.mount(&[]);
            nav.unmount();
        }
        assert_eq!(log.borrow().releases, 0);
    }

    #[test]
    fn stale_signals_after_unmount_do_not_mutate_state() {
        let mut nav = ReadingNavigator::new(NullWatch);
        nav.mount(&toc(&["intro", "setup"]));
        nav.on_viewport(&[sample("setup", 0.8, true)]);
        nav.on_scroll(500.0, 1000.0);
        let frozen = nav.state().clone();

        nav.unmount();
        nav.on_viewport(&[sample("intro", 1.0, true)]);
        nav.on_scroll(900.0, 1000.0);

        assert_eq!(nav.state(), &frozen);
    }

    #[test]
    fn remount_after_unmount_is_rejected() {
        let watch = RecordingWatch::default();
        let log = watch.log.clone();
        let mut nav = ReadingNavigator::new(watch);
        nav.mount(&toc(&["intro"]));
        nav.unmount();

        nav.mount(&toc(&["setup"]));

        assert_eq!(nav.phase(), Phase::Unmounted);
        assert_eq!(log.borrow().observed.len(), 1);
    }

    #[test]
    fn colliding_slug_signal_maps_to_earliest_entry() {
        // Two headings normalized to the same slug: the toc carries the
        // id twice, and a signal for it highlights the earlier entry.
        let entries = vec![
            TocEntry {
                title: "Setup".to_string(),
                id: "setup".to_string(),
            },
            TocEntry {
                title: "Setup!".to_string(),
                id: "setup".to_string(),
            },
        ];
        let mut nav = ReadingNavigator::new(NullWatch);
        nav.mount(&entries);

        nav.on_viewport(&[sample("setup", 0.4, true)]);

        assert_eq!(nav.state().active_id.as_deref(), Some("setup"));
    }
}
