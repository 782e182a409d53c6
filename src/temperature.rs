/// Bounded chip-temperature history with running all-time extrema.
///
/// The tracker is an explicitly owned value: construct it once, pass it by
/// reference to whatever records or renders temperatures, and `reset()` it
/// to start over. The history holds the most recent [`TEMP_HISTORY_LEN`]
/// samples in arrival order; the extrema cover every sample ever recorded
/// and survive eviction from the history window.
///
/// Single execution context assumed — no interior locking. A multi-threaded
/// host must wrap the tracker in its own mutex.
use heapless::Deque;

/// Number of samples kept in the history window
pub const TEMP_HISTORY_LEN: usize = 40;

#[derive(Debug)]
pub struct TemperatureTracker {
    history: Deque<f32, TEMP_HISTORY_LEN>,
    /// All-time bounds, `None` until the first finite sample arrives
    extremes: Option<(f32, f32)>,
}

impl TemperatureTracker {
    pub const fn new() -> Self {
        Self {
            history: Deque::new(),
            extremes: None,
        }
    }

    /// Record one Celsius sample.
    ///
    /// Appends to the history, evicting the oldest sample when the window is
    /// full. The first sample initializes both extremes to itself; later
    /// samples only widen the bounds.
    ///
    /// Non-finite input (NaN, ±inf) is silently ignored — it would poison
    /// the extrema comparisons and has no meaningful display.
    pub fn record(&mut self, celsius: f32) {
        if !celsius.is_finite() {
            return;
        }

        self.extremes = match self.extremes {
            None => Some((celsius, celsius)),
            Some((min, max)) => Some((min.min(celsius), max.max(celsius))),
        };

        if self.history.is_full() {
            self.history.pop_front();
        }
        // Cannot fail: a slot was just freed if the deque was full
        let _ = self.history.push_back(celsius);
    }

    /// Samples in recording order, oldest first. Read-only.
    pub fn samples(&self) -> impl Iterator<Item = f32> + '_ {
        self.history.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Most recently recorded sample, if any.
    pub fn latest(&self) -> Option<f32> {
        self.history.back().copied()
    }

    /// All-time `(min, max)` in Celsius. `None` until the first sample
    /// arrives — the "collecting data" state.
    pub fn extremes(&self) -> Option<(f32, f32)> {
        self.extremes
    }

    /// Clear the history and the all-time extrema.
    pub fn reset(&mut self) {
        self.history.clear();
        self.extremes = None;
    }
}

impl Default for TemperatureTracker {
    fn default() -> Self {
        Self::new()
    }
}
