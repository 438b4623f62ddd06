use crate::core::data::viewport::Viewport;
use crate::core::zoom::config::ZoomConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomAnimation {
    pub start_viewport: Viewport,
    pub target_viewport: Viewport,
    pub start_time_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AnimatorState {
    #[default]
    Idle,
    Animating(ZoomAnimation),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomRequestOutcome {
    /// A new animation began; the caller must schedule the first tick.
    Started,
    /// An in-flight animation was retargeted; its pending tick picks this up.
    Retargeted,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZoomTickOutcome {
    /// No animation was running.
    Idle,
    /// The viewport moved; the caller should redraw and schedule another tick.
    Advanced { progress: f64 },
    /// The duration elapsed. The viewport is left where the last step put it.
    Finished,
}

/// Drives a viewport towards a zoom target over a fixed duration.
///
/// Each tick moves the live viewport by `progress = elapsed / duration` of
/// its remaining distance to the target, so motion decelerates as it nears
/// the target. The tick that observes `elapsed >= duration` only ends the
/// animation; it does not snap to the target.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomAnimator {
    config: ZoomConfig,
    state: AnimatorState,
}

impl ZoomAnimator {
    #[must_use]
    pub fn new(config: ZoomConfig) -> Self {
        Self {
            config,
            state: AnimatorState::Idle,
        }
    }

    #[must_use]
    pub fn config(&self) -> ZoomConfig {
        self.config
    }

    #[must_use]
    pub fn state(&self) -> AnimatorState {
        self.state
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        matches!(self.state, AnimatorState::Animating(_))
    }

    #[must_use]
    pub fn animation(&self) -> Option<&ZoomAnimation> {
        match &self.state {
            AnimatorState::Animating(animation) => Some(animation),
            AnimatorState::Idle => None,
        }
    }

    pub fn request(
        &mut self,
        current: Viewport,
        target: Viewport,
        now_ms: u64,
    ) -> ZoomRequestOutcome {
        let outcome = if self.is_animating() {
            ZoomRequestOutcome::Retargeted
        } else {
            ZoomRequestOutcome::Started
        };

        self.state = AnimatorState::Animating(ZoomAnimation {
            start_viewport: current,
            target_viewport: target,
            start_time_ms: now_ms,
        });

        outcome
    }

    pub fn tick(&mut self, viewport: &mut Viewport, now_ms: u64) -> ZoomTickOutcome {
        let AnimatorState::Animating(animation) = self.state else {
            return ZoomTickOutcome::Idle;
        };

        let elapsed_ms = now_ms.saturating_sub(animation.start_time_ms);
        let duration_ms = self.config.duration_ms();

        if elapsed_ms >= duration_ms {
            self.state = AnimatorState::Idle;
            return ZoomTickOutcome::Finished;
        }

        let progress = (elapsed_ms as f64 / duration_ms as f64).clamp(0.0, 1.0);
        viewport.approach(&animation.target_viewport, progress);

        ZoomTickOutcome::Advanced { progress }
    }
}

impl Default for ZoomAnimator {
    fn default() -> Self {
        Self::new(ZoomConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::point::Point;
    use crate::core::data::surface_size::SurfaceSize;
    use crate::core::zoom::target::{ZoomDirection, zoom_target};

    const TICK_MS: u64 = 16;

    fn target() -> Viewport {
        Viewport::new(-2.0, -1.0, 1.5, 1.0).unwrap()
    }

    /// Ticks every `TICK_MS` from `start_ms` until the animator stops, returning
    /// the time of the finishing tick.
    fn run_to_completion(
        animator: &mut ZoomAnimator,
        viewport: &mut Viewport,
        start_ms: u64,
    ) -> u64 {
        let mut now = start_ms;
        loop {
            now += TICK_MS;
            if animator.tick(viewport, now) == ZoomTickOutcome::Finished {
                return now;
            }
        }
    }

    #[test]
    fn new_animator_is_idle() {
        let animator = ZoomAnimator::default();

        assert_eq!(animator.state(), AnimatorState::Idle);
        assert!(!animator.is_animating());
        assert!(animator.animation().is_none());
    }

    #[test]
    fn tick_while_idle_leaves_viewport_untouched() {
        let mut animator = ZoomAnimator::default();
        let mut viewport = Viewport::default();

        assert_eq!(animator.tick(&mut viewport, 1_000), ZoomTickOutcome::Idle);
        assert_eq!(viewport, Viewport::default());
    }

    #[test]
    fn request_from_idle_starts_animation() {
        let mut animator = ZoomAnimator::default();

        let outcome = animator.request(Viewport::default(), target(), 100);

        assert_eq!(outcome, ZoomRequestOutcome::Started);
        assert_eq!(
            animator.animation(),
            Some(&ZoomAnimation {
                start_viewport: Viewport::default(),
                target_viewport: target(),
                start_time_ms: 100,
            })
        );
    }

    #[test]
    fn first_tick_moves_by_elapsed_fraction() {
        let mut animator = ZoomAnimator::default();
        let mut viewport = Viewport::default();
        animator.request(viewport, target(), 0);

        let outcome = animator.tick(&mut viewport, 55);

        assert_eq!(outcome, ZoomTickOutcome::Advanced { progress: 0.1 });
        assert!((viewport.width() - (3.0 - 1.5 * 0.1)).abs() < 1e-12);
        assert!((viewport.height() - (2.0 - 1.0 * 0.1)).abs() < 1e-12);
    }

    #[test]
    fn ticks_rebase_on_the_live_viewport() {
        let mut animator = ZoomAnimator::default();
        let mut viewport = Viewport::new(0.0, 0.0, 4.0, 4.0).unwrap();
        let goal = Viewport::new(0.0, 0.0, 2.0, 2.0).unwrap();
        animator.request(viewport, goal, 0);

        animator.tick(&mut viewport, 110); // progress 0.2: 4 -> 3.6
        animator.tick(&mut viewport, 220); // progress 0.4: 3.6 -> 2.96

        assert!((viewport.width() - 2.96).abs() < 1e-12);
        // A blend from the start snapshot would give 4 - 2 * 0.4 = 3.2.
        assert!((viewport.width() - 3.2).abs() > 0.1);
    }

    #[test]
    fn finishing_tick_does_not_snap_to_target() {
        let mut animator = ZoomAnimator::default();
        let mut viewport = Viewport::default();
        animator.request(viewport, target(), 0);
        animator.tick(&mut viewport, 275);
        let before_finish = viewport;

        let outcome = animator.tick(&mut viewport, 550);

        assert_eq!(outcome, ZoomTickOutcome::Finished);
        assert_eq!(viewport, before_finish);
        assert_ne!(viewport, target());
        assert!(!animator.is_animating());
    }

    #[test]
    fn single_request_returns_to_idle_within_duration_plus_one_tick() {
        let mut animator = ZoomAnimator::default();
        let mut viewport = Viewport::default();
        animator.request(viewport, target(), 1_000);

        let finished_at = run_to_completion(&mut animator, &mut viewport, 1_000);

        assert!(finished_at - 1_000 >= 550);
        assert!(finished_at - 1_000 <= 550 + TICK_MS);
        assert_eq!(animator.state(), AnimatorState::Idle);
    }

    #[test]
    fn animation_converges_on_target() {
        let mut animator = ZoomAnimator::default();
        let mut viewport = Viewport::default();
        animator.request(viewport, target(), 0);

        run_to_completion(&mut animator, &mut viewport, 0);

        assert!((viewport.left() - target().left()).abs() < 1e-9);
        assert!((viewport.top() - target().top()).abs() < 1e-9);
        assert!((viewport.width() - target().width()).abs() < 1e-9);
        assert!((viewport.height() - target().height()).abs() < 1e-9);
    }

    #[test]
    fn request_while_animating_retargets_and_restarts_clock() {
        let mut animator = ZoomAnimator::default();
        let mut viewport = Viewport::default();
        animator.request(viewport, target(), 0);
        animator.tick(&mut viewport, 16);
        let new_target = Viewport::new(0.0, 0.0, 0.5, 0.25).unwrap();

        let outcome = animator.request(viewport, new_target, 200);

        assert_eq!(outcome, ZoomRequestOutcome::Retargeted);
        let animation = animator.animation().unwrap();
        assert_eq!(animation.start_viewport, viewport);
        assert_eq!(animation.target_viewport, new_target);
        assert_eq!(animation.start_time_ms, 200);

        // 600ms after the first request, but only 400ms after the second.
        let outcome = animator.tick(&mut viewport, 600);
        assert!(matches!(outcome, ZoomTickOutcome::Advanced { .. }));
    }

    #[test]
    fn tick_before_start_time_does_not_move() {
        let mut animator = ZoomAnimator::default();
        let mut viewport = Viewport::default();
        animator.request(viewport, target(), 500);

        let outcome = animator.tick(&mut viewport, 400);

        assert_eq!(outcome, ZoomTickOutcome::Advanced { progress: 0.0 });
        assert_eq!(viewport, Viewport::default());
    }

    #[test]
    fn zero_duration_finishes_on_first_tick() {
        let mut animator = ZoomAnimator::new(ZoomConfig {
            duration: std::time::Duration::ZERO,
            ..ZoomConfig::default()
        });
        let mut viewport = Viewport::default();
        animator.request(viewport, target(), 0);

        assert_eq!(animator.tick(&mut viewport, 0), ZoomTickOutcome::Finished);
        assert_eq!(viewport, Viewport::default());
    }

    #[test]
    fn zoom_in_then_out_restores_extent() {
        let surface = SurfaceSize::new(800, 600).unwrap();
        let click = Point { x: 250, y: 410 };
        let mut animator = ZoomAnimator::default();
        let mut viewport = Viewport::default();

        let zoom_in = zoom_target(&viewport, click, surface, ZoomDirection::In).unwrap();
        animator.request(viewport, zoom_in, 0);
        let finished_at = run_to_completion(&mut animator, &mut viewport, 0);

        let zoom_out = zoom_target(&viewport, click, surface, ZoomDirection::Out).unwrap();
        animator.request(viewport, zoom_out, finished_at);
        run_to_completion(&mut animator, &mut viewport, finished_at);

        assert!((viewport.width() - 3.0).abs() < 1e-9);
        assert!((viewport.height() - 2.0).abs() < 1e-9);
    }
}
