use crate::navigator::ViewportBand;

/// Registration of interest in heading visibility.
///
/// This is the one scoped resource in the engine: whatever machinery a
/// host uses to deliver visibility signals (an IntersectionObserver
/// bridge, synthesized terminal geometry, a test fake), the navigator
/// guarantees `release` is called exactly once on every exit path from
/// tracking — explicit unmount or drop. A watch must never deliver a
/// signal that mutates navigator state after `release`.
pub trait HeadingWatch {
    /// Start observing the given heading ids within the viewport band.
    fn observe(&mut self, ids: &[String], band: &ViewportBand);

    /// Stop observing and free whatever the watch holds.
    fn release(&mut self);
}

/// Watch for hosts with no observation machinery of their own
/// (server-side rendering, tests, hosts that push samples directly).
#[derive(Debug, Clone, Copy, Default)]
pub struct NullWatch;

impl HeadingWatch for NullWatch {
    fn observe(&mut self, _ids: &[String], _band: &ViewportBand) {}

    fn release(&mut self) {}
}
