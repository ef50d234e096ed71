//! Timed transitions between projections.
//!
//! The controller tracks the logically current projection and, while a
//! change is animating, the projection it came from. Progress is eased with
//! a monotonic ease-in-out cubic so blends never overshoot their endpoints.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use crate::config::RenderConfig;
use crate::params::ViewParameters;
use crate::proj::ProjectionId;

pub const DEFAULT_DURATION_MS: f64 = 1000.0;

/// Source of the current time in milliseconds since a fixed origin.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Wall clock backed by [`Instant`].
#[derive(Clone, Copy, Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Manually driven clock. Clones share the same time, so a caller can keep
/// a handle while the controller owns another.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    bits: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new(start_ms: f64) -> Self {
        Self {
            bits: Arc::new(AtomicU64::new(start_ms.to_bits())),
        }
    }

    pub fn set(&self, ms: f64) {
        self.bits.store(ms.to_bits(), Ordering::Relaxed);
    }

    pub fn advance(&self, ms: f64) {
        self.set(self.now_ms() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Relaxed))
    }
}

/// Ease-in-out cubic on [0, 1]: monotonic, f(0) = 0, f(1) = 1.
pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransitionState {
    Idle,
    Active {
        from: ProjectionId,
        to: ProjectionId,
        start_ms: f64,
    },
}

/// Everything the render pipeline needs for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameState {
    /// Logically current projection.
    pub to: ProjectionId,
    /// Projection being blended away from, while a transition is active.
    pub from: Option<ProjectionId>,
    /// Eased blend factor in [0, 1].
    pub progress: f64,
    pub params: ViewParameters,
}

impl FrameState {
    /// A frame with no transition in flight.
    pub fn settled(projection: ProjectionId, params: ViewParameters) -> Self {
        Self {
            to: projection,
            from: None,
            progress: 1.0,
            params,
        }
    }

    /// Whether pixels must blend two projections.
    pub fn is_blending(&self) -> bool {
        self.from.is_some() && self.progress < 1.0
    }
}

pub struct TransitionController<C: Clock = MonotonicClock> {
    clock: C,
    current: ProjectionId,
    state: TransitionState,
    duration_ms: f64,
}

impl TransitionController<MonotonicClock> {
    pub fn new(initial: ProjectionId, duration_ms: f64) -> Self {
        Self::with_clock(initial, duration_ms, MonotonicClock::new())
    }

    /// Start on the configured initial projection with the configured duration.
    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(config.initial_projection, config.transition_ms)
    }
}

impl<C: Clock> TransitionController<C> {
    pub fn with_clock(initial: ProjectionId, duration_ms: f64, clock: C) -> Self {
        Self {
            clock,
            current: initial,
            state: TransitionState::Idle,
            duration_ms,
        }
    }

    pub fn current(&self) -> ProjectionId {
        self.current
    }

    /// Stored state. It only returns to `Idle` when [`progress`](Self::progress)
    /// observes the end of the transition; see [`is_active`](Self::is_active).
    pub fn state(&self) -> TransitionState {
        self.state
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    /// Whether a transition is still running at the current clock time.
    pub fn is_active(&self) -> bool {
        match self.state {
            TransitionState::Active { start_ms, .. } => self.linear(start_ms) < 1.0,
            TransitionState::Idle => false,
        }
    }

    /// Projection being blended away from, while a transition is running.
    pub fn from_projection(&self) -> Option<ProjectionId> {
        match self.state {
            TransitionState::Active { from, .. } if self.is_active() => Some(from),
            _ => None,
        }
    }

    /// Linear progress in [0, 1] of a transition started at `start_ms`.
    fn linear(&self, start_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((self.clock.now_ms() - start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Begin animating from the current projection to `to`. The current
    /// projection switches to `to` immediately; an in-flight transition is
    /// discarded.
    pub fn start_transition(&mut self, to: ProjectionId) {
        if let TransitionState::Active { from, to: pending, .. } = self.state {
            log::debug!(
                "Cancelling transition {} -> {}",
                from.key(),
                pending.key()
            );
        } else if to == self.current {
            return;
        }

        let from = self.current;
        let start_ms = self.clock.now_ms();
        log::debug!("Starting transition {} -> {}", from.key(), to.key());
        self.state = TransitionState::Active { from, to, start_ms };
        self.current = to;
    }

    /// Eased progress in [0, 1]. Reverts to idle once the duration elapses.
    pub fn progress(&mut self) -> f64 {
        let TransitionState::Active { start_ms, to, .. } = self.state else {
            return 1.0;
        };

        let linear = self.linear(start_ms);
        if linear >= 1.0 {
            log::debug!("Transition to {} finished", to.key());
            self.state = TransitionState::Idle;
            return 1.0;
        }
        ease_in_out_cubic(linear)
    }

    /// Snapshot for rendering one frame.
    pub fn frame(&mut self, params: ViewParameters) -> FrameState {
        let progress = self.progress();
        FrameState {
            to: self.current,
            from: self.from_projection(),
            progress,
            params,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn controller() -> (TransitionController<ManualClock>, ManualClock) {
        let clock = ManualClock::new(1_000.0);
        let ctl = TransitionController::with_clock(
            ProjectionId::Mercator,
            DEFAULT_DURATION_MS,
            clock.clone(),
        );
        (ctl, clock)
    }

    #[test]
    fn test_easing_endpoints_and_monotonic() {
        assert_relative_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_relative_eq!(ease_in_out_cubic(0.5), 0.5);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        let mut prev = 0.0;
        for i in 0..=1000 {
            let v = ease_in_out_cubic(i as f64 / 1000.0);
            assert!(v >= prev && v <= 1.0);
            prev = v;
        }
    }

    #[test]
    fn test_idle_progress_is_one() {
        let (mut ctl, _) = controller();
        assert!(!ctl.is_active());
        assert_eq!(ctl.progress(), 1.0);
    }

    #[test]
    fn test_start_switches_current_immediately() {
        let (mut ctl, _) = controller();
        ctl.start_transition(ProjectionId::Mollweide);
        assert_eq!(ctl.current(), ProjectionId::Mollweide);
        assert_eq!(ctl.from_projection(), Some(ProjectionId::Mercator));
        assert!(ctl.is_active());
        assert_eq!(ctl.progress(), 0.0);
    }

    #[test]
    fn test_progress_monotonic_and_completes() {
        let (mut ctl, clock) = controller();
        ctl.start_transition(ProjectionId::Orthographic);

        let mut prev = 0.0;
        for _ in 0..9 {
            clock.advance(100.0);
            let p = ctl.progress();
            assert!(p >= prev, "progress decreased: {prev} -> {p}");
            assert!(ctl.is_active());
            prev = p;
        }

        clock.advance(100.0); // exactly start + duration
        assert_eq!(ctl.progress(), 1.0);
        assert!(!ctl.is_active());

        clock.advance(1.0);
        assert_eq!(ctl.progress(), 1.0);
        assert_eq!(ctl.state(), TransitionState::Idle);
    }

    #[test]
    fn test_new_transition_discards_previous() {
        let (mut ctl, clock) = controller();
        ctl.start_transition(ProjectionId::EqualEarth);
        clock.advance(300.0);
        ctl.start_transition(ProjectionId::Gnomonic);

        match ctl.state() {
            TransitionState::Active { from, to, start_ms } => {
                assert_eq!(from, ProjectionId::EqualEarth);
                assert_eq!(to, ProjectionId::Gnomonic);
                assert_relative_eq!(start_ms, 1_300.0);
            }
            TransitionState::Idle => panic!("expected an active transition"),
        }
        assert_eq!(ctl.current(), ProjectionId::Gnomonic);
        assert_eq!(ctl.progress(), 0.0);
    }

    #[test]
    fn test_is_active_follows_clock_without_progress() {
        let (mut ctl, clock) = controller();
        ctl.start_transition(ProjectionId::Mollweide);
        clock.advance(999.0);
        assert!(ctl.is_active());
        assert_eq!(ctl.from_projection(), Some(ProjectionId::Mercator));

        clock.advance(1.0);
        assert!(!ctl.is_active());
        assert_eq!(ctl.from_projection(), None);
        assert_eq!(ctl.current(), ProjectionId::Mollweide);

        // The stored state catches up on the next progress query
        assert!(matches!(ctl.state(), TransitionState::Active { .. }));
        assert_eq!(ctl.progress(), 1.0);
        assert_eq!(ctl.state(), TransitionState::Idle);
    }

    #[test]
    fn test_same_projection_while_idle_is_noop() {
        let (mut ctl, _) = controller();
        ctl.start_transition(ProjectionId::Mercator);
        assert!(!ctl.is_active());
    }

    #[test]
    fn test_stalled_clock_stays_active() {
        let (mut ctl, _) = controller();
        ctl.start_transition(ProjectionId::Stereographic);
        for _ in 0..5 {
            assert_eq!(ctl.progress(), 0.0);
        }
        assert!(ctl.is_active());
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        let clock = ManualClock::new(0.0);
        let mut ctl = TransitionController::with_clock(ProjectionId::Mercator, 0.0, clock);
        ctl.start_transition(ProjectionId::Mollweide);
        assert_eq!(ctl.progress(), 1.0);
        assert!(!ctl.is_active());
    }

    #[test]
    fn test_from_config() {
        let config = RenderConfig {
            initial_projection: ProjectionId::Orthographic,
            transition_ms: 250.0,
            ..RenderConfig::default()
        };
        let ctl = TransitionController::from_config(&config);
        assert_eq!(ctl.current(), ProjectionId::Orthographic);
        assert_relative_eq!(ctl.duration_ms(), 250.0);
        assert!(!ctl.is_active());
    }

    #[test]
    fn test_frame_snapshot() {
        let (mut ctl, clock) = controller();
        let params = ViewParameters::new(200.0, 10.0, 0.0);
        assert_eq!(
            ctl.frame(params),
            FrameState::settled(ProjectionId::Mercator, params)
        );

        ctl.start_transition(ProjectionId::NaturalEarth);
        clock.advance(500.0);
        let frame = ctl.frame(params);
        assert_eq!(frame.to, ProjectionId::NaturalEarth);
        assert_eq!(frame.from, Some(ProjectionId::Mercator));
        assert_relative_eq!(frame.progress, 0.5);
        assert!(frame.is_blending());

        clock.advance(500.0);
        let frame = ctl.frame(params);
        assert_eq!(frame.from, None);
        assert!(!frame.is_blending());
    }
}
