//! Synchronized scrolling of the two comparison panes

/// The two panes of the compare view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pane {
    Source,
    Matches,
}

impl Pane {
    pub fn other(self) -> Self {
        match self {
            Pane::Source => Pane::Matches,
            Pane::Matches => Pane::Source,
        }
    }
}

/// Scroll geometry of one pane, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

impl ScrollMetrics {
    pub fn new(top: f64, scroll_height: f64, client_height: f64) -> Self {
        Self {
            top,
            scroll_height,
            client_height,
        }
    }

    /// Maximum scroll offset.
    pub fn range(&self) -> f64 {
        (self.scroll_height - self.client_height).max(0.0)
    }

    /// Relative offset in [0, 1]; 0 for panes that do not scroll.
    pub fn ratio(&self) -> f64 {
        let range = self.range();
        if range <= 0.0 {
            return 0.0;
        }
        (self.top / range).clamp(0.0, 1.0)
    }
}

/// Keeps the follower pane at the same relative offset as the pane the
/// user scrolled.
///
/// Setting the follower's offset makes the browser fire a scroll event on
/// it; that echo is swallowed once so the panes do not chase each other.
#[derive(Debug, Clone, Default)]
pub struct ScrollSync {
    echo: Option<Pane>,
}

/// Offsets closer than this are treated as already aligned.
const EPSILON_PX: f64 = 0.5;

impl ScrollSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles a scroll event on `pane`. Returns the offset to apply to the
    /// other pane, or `None` when nothing should move.
    pub fn on_scroll(
        &mut self,
        pane: Pane,
        scrolled: ScrollMetrics,
        follower: ScrollMetrics,
    ) -> Option<f64> {
        if self.echo == Some(pane) {
            self.echo = None;
            return None;
        }

        let target = scrolled.ratio() * follower.range();
        if (target - follower.top).abs() < EPSILON_PX {
            return None;
        }

        self.echo = Some(pane.other());
        Some(target)
    }

    /// Forgets a pending echo, e.g. after the pane contents are replaced.
    pub fn reset(&mut self) {
        self.echo = None;
    }
}
