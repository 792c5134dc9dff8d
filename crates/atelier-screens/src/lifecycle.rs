//! Per-screen load state machine.
//!
//! `Idle → Loading` on mount, `Ready → Loading` on focus regain or explicit
//! refresh, `Loading → Ready` when the newest request settles. Local-only
//! mutations never touch the tracker.
//!
//! Every request gets a monotonically increasing generation. A result is
//! applied only if no newer result has already been applied, so a slow old
//! fetch can never overwrite a fast new one. After [`LoadTracker::unmount`]
//! every late result is ignored.

use atelier_core::FailureKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Constructed, not yet mounted.
    Idle,
    /// At least one request is in flight and the newest has not settled.
    Loading,
    /// The newest request has settled (successfully or not).
    Ready,
}

/// What started a load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// First display of the screen.
    Mount,
    /// The screen became the visible screen again.
    Focus,
    /// Explicit user pull-to-refresh.
    Refresh,
}

/// Handle for one in-flight request, returned by [`LoadTracker::begin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    trigger: Trigger,
}

impl LoadTicket {
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn trigger(&self) -> Trigger {
        self.trigger
    }
}

/// Tracker verdict for a completed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settled {
    /// Apply the result.
    Current,
    /// A newer result already landed; drop this one.
    Stale,
    /// The screen is gone; drop this one.
    Unmounted,
}

/// Outcome of a screen load, reported back to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Fresh data was applied.
    Applied,
    /// The request failed; previous data is kept and a notice is pending.
    Failed(FailureKind),
    /// The result was superseded by a newer request and ignored.
    Stale,
    /// The screen was unmounted before the result arrived.
    Unmounted,
    /// Nothing to load (detail screen opened without a product id).
    Skipped,
}

#[derive(Debug)]
pub struct LoadTracker {
    phase: Phase,
    mounted: bool,
    /// Newest in-flight mount or focus load.
    loading: Option<u64>,
    /// Newest in-flight refresh.
    refreshing: Option<u64>,
    latest_issued: u64,
    latest_settled: u64,
}

impl Default for LoadTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadTracker {
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            mounted: true,
            loading: None,
            refreshing: None,
            latest_issued: 0,
            latest_settled: 0,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// `true` while a mount or focus load is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading.is_some()
    }

    /// `true` while a user-initiated refresh is in flight.
    #[must_use]
    pub fn is_refreshing(&self) -> bool {
        self.refreshing.is_some()
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Registers a new request and moves to `Loading`.
    pub fn begin(&mut self, trigger: Trigger) -> LoadTicket {
        self.latest_issued += 1;
        self.phase = Phase::Loading;
        if trigger == Trigger::Refresh {
            self.refreshing = Some(self.latest_issued);
        } else {
            self.loading = Some(self.latest_issued);
        }
        tracing::debug!(generation = self.latest_issued, ?trigger, "load started");
        LoadTicket {
            generation: self.latest_issued,
            trigger,
        }
    }

    /// Decides whether the result for `ticket` should be applied and updates
    /// the phase accordingly.
    ///
    /// A failure from a request that has since been superseded is reported
    /// as stale: the newer request decides what the user sees.
    pub fn settle(&mut self, ticket: LoadTicket, succeeded: bool) -> Settled {
        if !self.mounted {
            tracing::debug!(generation = ticket.generation, "result after unmount ignored");
            return Settled::Unmounted;
        }
        if self.loading == Some(ticket.generation) {
            self.loading = None;
        }
        if self.refreshing == Some(ticket.generation) {
            self.refreshing = None;
        }
        let superseded_failure = !succeeded && ticket.generation < self.latest_issued;
        if ticket.generation <= self.latest_settled || superseded_failure {
            tracing::debug!(
                generation = ticket.generation,
                latest_settled = self.latest_settled,
                latest_issued = self.latest_issued,
                "stale result discarded"
            );
            return Settled::Stale;
        }

        self.latest_settled = ticket.generation;
        // Everything older than the newest request is stale from here on.
        if ticket.generation == self.latest_issued {
            self.phase = Phase::Ready;
            self.loading = None;
            self.refreshing = None;
        }
        Settled::Current
    }

    /// Marks the screen as gone. Later results are ignored.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.loading = None;
        self.refreshing = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tracker_is_idle_and_mounted() {
        let tracker = LoadTracker::new();
        assert_eq!(tracker.phase(), Phase::Idle);
        assert!(tracker.is_mounted());
        assert!(!tracker.is_loading());
        assert!(!tracker.is_refreshing());
    }

    #[test]
    fn mount_moves_idle_to_loading_then_ready() {
        let mut tracker = LoadTracker::new();
        let ticket = tracker.begin(Trigger::Mount);
        assert_eq!(tracker.phase(), Phase::Loading);
        assert!(tracker.is_loading());

        assert_eq!(tracker.settle(ticket, true), Settled::Current);
        assert_eq!(tracker.phase(), Phase::Ready);
        assert!(!tracker.is_loading());
    }

    #[test]
    fn refresh_sets_refreshing_not_loading() {
        let mut tracker = LoadTracker::new();
        let first = tracker.begin(Trigger::Mount);
        tracker.settle(first, true);

        let ticket = tracker.begin(Trigger::Refresh);
        assert_eq!(tracker.phase(), Phase::Loading);
        assert!(tracker.is_refreshing());
        assert!(!tracker.is_loading());

        tracker.settle(ticket, true);
        assert!(!tracker.is_refreshing());
        assert_eq!(tracker.phase(), Phase::Ready);
    }

    #[test]
    fn failure_still_returns_to_ready() {
        let mut tracker = LoadTracker::new();
        let ticket = tracker.begin(Trigger::Focus);
        assert_eq!(tracker.settle(ticket, false), Settled::Current);
        assert_eq!(tracker.phase(), Phase::Ready);
    }

    #[test]
    fn older_result_after_newer_is_stale() {
        let mut tracker = LoadTracker::new();
        let slow = tracker.begin(Trigger::Mount);
        let fast = tracker.begin(Trigger::Refresh);

        assert_eq!(tracker.settle(fast, true), Settled::Current);
        assert_eq!(tracker.phase(), Phase::Ready);
        assert_eq!(tracker.settle(slow, true), Settled::Stale);
        assert_eq!(tracker.phase(), Phase::Ready);
    }

    #[test]
    fn older_success_before_newer_is_applied_but_stays_loading() {
        let mut tracker = LoadTracker::new();
        let first = tracker.begin(Trigger::Mount);
        let second = tracker.begin(Trigger::Focus);

        assert_eq!(tracker.settle(first, true), Settled::Current);
        assert_eq!(tracker.phase(), Phase::Loading);
        assert_eq!(tracker.settle(second, true), Settled::Current);
        assert_eq!(tracker.phase(), Phase::Ready);
    }

    #[test]
    fn superseded_failure_is_stale() {
        let mut tracker = LoadTracker::new();
        let first = tracker.begin(Trigger::Mount);
        let second = tracker.begin(Trigger::Focus);

        assert_eq!(tracker.settle(first, false), Settled::Stale);
        assert_eq!(tracker.phase(), Phase::Loading);
        assert_eq!(tracker.settle(second, true), Settled::Current);
    }

    #[test]
    fn refresh_settling_before_newer_focus_clears_refreshing_only() {
        let mut tracker = LoadTracker::new();
        let first = tracker.begin(Trigger::Mount);
        tracker.settle(first, true);

        let refresh = tracker.begin(Trigger::Refresh);
        let focus = tracker.begin(Trigger::Focus);
        assert!(tracker.is_refreshing());
        assert!(tracker.is_loading());

        assert_eq!(tracker.settle(refresh, true), Settled::Current);
        assert!(!tracker.is_refreshing());
        assert!(tracker.is_loading());
        assert_eq!(tracker.phase(), Phase::Loading);

        tracker.settle(focus, true);
        assert!(!tracker.is_loading());
        assert_eq!(tracker.phase(), Phase::Ready);
    }

    #[test]
    fn superseded_refresh_failure_still_clears_refreshing() {
        let mut tracker = LoadTracker::new();
        let refresh = tracker.begin(Trigger::Refresh);
        let focus = tracker.begin(Trigger::Focus);

        assert_eq!(tracker.settle(refresh, false), Settled::Stale);
        assert!(!tracker.is_refreshing());
        assert!(tracker.is_loading());
        tracker.settle(focus, true);
        assert_eq!(tracker.phase(), Phase::Ready);
    }

    #[test]
    fn newest_settling_clears_older_in_flight_flags() {
        let mut tracker = LoadTracker::new();
        let refresh = tracker.begin(Trigger::Refresh);
        let focus = tracker.begin(Trigger::Focus);

        tracker.settle(focus, true);
        assert!(!tracker.is_refreshing());
        assert!(!tracker.is_loading());
        assert_eq!(tracker.settle(refresh, true), Settled::Stale);
    }

    #[test]
    fn results_after_unmount_are_ignored() {
        let mut tracker = LoadTracker::new();
        let ticket = tracker.begin(Trigger::Mount);
        tracker.unmount();
        assert_eq!(tracker.settle(ticket, true), Settled::Unmounted);
        assert!(!tracker.is_mounted());
    }

    #[test]
    fn generations_increase() {
        let mut tracker = LoadTracker::new();
        let a = tracker.begin(Trigger::Mount);
        let b = tracker.begin(Trigger::Focus);
        assert!(b.generation() > a.generation());
        assert_eq!(b.trigger(), Trigger::Focus);
    }
}
