//! Viewport intersection watcher
//!
//! Notifies when registered page regions cross a visibility threshold
//! inside the scrolled viewport. Targets live in page space (y offset
//! from the top of the scrollable content); the watcher is fed the
//! current scroll offset and viewport height on every scroll or resize.
//!
//! Crossings are edge-triggered: a target is reported once when it
//! becomes visible and not again until it has left the viewport. Callers
//! that want fire-once semantics unobserve the target when it fires.

/// A single watched region
#[derive(Debug, Clone, Copy)]
struct Watch {
    top: f32,
    height: f32,
    threshold: f32,
    was_intersecting: bool,
}

/// Tracks visibility crossings for a set of keyed page regions
#[derive(Debug, Default)]
pub struct ViewportWatcher<K: Eq + Copy> {
    watches: Vec<(K, Watch)>,
}

impl<K: Eq + Copy> ViewportWatcher<K> {
    pub fn new() -> Self {
        Self {
            watches: Vec::new(),
        }
    }

    /// Register a region; re-observing an existing key updates it in place
    pub fn observe(&mut self, key: K, top: f32, height: f32, threshold: f32) {
        let watch = Watch {
            top,
            height,
            threshold,
            was_intersecting: false,
        };
        if let Some(entry) = self.watches.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = watch;
        } else {
            self.watches.push((key, watch));
        }
    }

    /// Stop watching a key
    pub fn unobserve(&mut self, key: K) {
        self.watches.retain(|(k, _)| *k != key);
    }

    /// Update a region's page-space bounds without resetting its edge state
    pub fn set_bounds(&mut self, key: K, top: f32, height: f32) {
        if let Some((_, watch)) = self.watches.iter_mut().find(|(k, _)| *k == key) {
            watch.top = top;
            watch.height = height;
        }
    }

    /// Scan all watched regions against the current viewport and return
    /// the keys that just crossed into visibility
    pub fn scan(&mut self, scroll_y: f32, viewport_height: f32) -> Vec<K> {
        let mut entered = Vec::new();
        for (key, watch) in &mut self.watches {
            let fraction = visible_fraction(watch.top, watch.height, scroll_y, viewport_height);
            let intersecting = fraction >= watch.threshold;
            if intersecting && !watch.was_intersecting {
                entered.push(*key);
            }
            watch.was_intersecting = intersecting;
        }
        entered
    }
}

/// Fraction of a region visible in the viewport (0.0 - 1.0)
///
/// Intersection extent over target extent, measured along the scroll
/// axis.
pub fn visible_fraction(top: f32, height: f32, scroll_y: f32, viewport_height: f32) -> f32 {
    if height <= 0.0 || viewport_height <= 0.0 {
        return 0.0;
    }
    let visible_top = top.max(scroll_y);
    let visible_bottom = (top + height).min(scroll_y + viewport_height);
    ((visible_bottom - visible_top) / height).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Target {
        About,
        Skills,
    }

    #[test]
    fn fraction_zero_when_below_viewport() {
        assert_eq!(visible_fraction(1000.0, 400.0, 0.0, 800.0), 0.0);
    }

    #[test]
    fn fraction_full_when_contained() {
        assert_eq!(visible_fraction(100.0, 400.0, 0.0, 800.0), 1.0);
    }

    #[test]
    fn fraction_partial_at_viewport_edge() {
        // Region [700, 1100) against viewport [0, 800): 100 of 400 visible
        let fraction = visible_fraction(700.0, 400.0, 0.0, 800.0);
        assert!((fraction - 0.25).abs() < 1e-6);
    }

    #[test]
    fn degenerate_height_never_visible() {
        assert_eq!(visible_fraction(100.0, 0.0, 0.0, 800.0), 0.0);
    }

    #[test]
    fn scan_reports_entry_once_until_exit() {
        let mut watcher = ViewportWatcher::new();
        watcher.observe(Target::About, 1000.0, 400.0, 0.12);

        // Off-screen: nothing fires
        assert!(watcher.scan(0.0, 800.0).is_empty());

        // Scrolled into view: fires exactly once
        assert_eq!(watcher.scan(400.0, 800.0), vec![Target::About]);
        assert!(watcher.scan(500.0, 800.0).is_empty());

        // Leaves and re-enters: fires again (edge-triggered, not fire-once)
        assert!(watcher.scan(3000.0, 800.0).is_empty());
        assert_eq!(watcher.scan(400.0, 800.0), vec![Target::About]);
    }

    #[test]
    fn unobserved_target_never_fires_again() {
        let mut watcher = ViewportWatcher::new();
        watcher.observe(Target::About, 1000.0, 400.0, 0.12);

        assert_eq!(watcher.scan(400.0, 800.0), vec![Target::About]);
        watcher.unobserve(Target::About);

        assert!(watcher.scan(3000.0, 800.0).is_empty());
        assert!(watcher.scan(400.0, 800.0).is_empty());
    }

    #[test]
    fn threshold_gates_entry() {
        let mut watcher = ViewportWatcher::new();
        watcher.observe(Target::Skills, 800.0, 400.0, 0.5);

        // Only 100 of 400 px visible: below the 50% threshold
        assert!(watcher.scan(100.0, 800.0).is_empty());
        // 200 of 400 px visible: exactly at threshold
        assert_eq!(watcher.scan(200.0, 800.0), vec![Target::Skills]);
    }

    #[test]
    fn bounds_update_preserves_edge_state() {
        let mut watcher = ViewportWatcher::new();
        watcher.observe(Target::About, 1000.0, 400.0, 0.12);
        assert_eq!(watcher.scan(400.0, 800.0), vec![Target::About]);

        // Relayout moves the region but it stays visible: no re-fire
        watcher.set_bounds(Target::About, 1050.0, 400.0);
        assert!(watcher.scan(400.0, 800.0).is_empty());
    }
}
