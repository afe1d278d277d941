//! Per-cell scale animation driven by cell state-change events.

use crate::domain::{CellEvent, CellRegistry, CellState};

/// Scale of a live cube
pub const ALIVE_SCALE: f32 = 1.0;
/// Scale of a dead cube. Kept non-zero so the grid stays visible.
pub const DEAD_SCALE: f32 = 0.05;

/// Target scale for a cell state
pub const fn scale_for(state: CellState) -> f32 {
    match state {
        CellState::Alive => ALIVE_SCALE,
        CellState::Dead => DEAD_SCALE,
    }
}

/// A single scale animation from `from` to `to`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleTween {
    from: f32,
    to: f32,
    elapsed: f32,
    duration: f32,
}

impl ScaleTween {
    /// Tween already at rest on `value`
    pub const fn settled(value: f32) -> Self {
        Self {
            from: value,
            to: value,
            elapsed: 0.0,
            duration: 0.0,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    /// Current scale
    pub fn value(&self) -> f32 {
        if self.is_finished() {
            return self.to;
        }
        let t = self.elapsed / self.duration;
        self.from + (self.to - self.from) * ease_out(t)
    }

    pub fn advance(&mut self, delta_time: f32) {
        self.elapsed = (self.elapsed + delta_time).min(self.duration);
    }

    /// Drop the running animation and head for `to` from wherever it is now
    pub fn retarget(&mut self, to: f32, duration: f32) {
        self.from = self.value();
        self.to = to;
        self.elapsed = 0.0;
        self.duration = duration.max(0.0);
    }
}

fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Durations of the birth and death animations, in seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationTiming {
    pub born: f32,
    pub die: f32,
}

impl AnimationTiming {
    /// Deaths fade over ten step intervals, births grow twice as fast
    pub fn from_step_interval(step_interval_secs: f32) -> Self {
        let die = step_interval_secs * 10.0;
        Self { born: die * 0.5, die }
    }

    pub fn duration_for(&self, state: CellState) -> f32 {
        match state {
            CellState::Alive => self.born,
            CellState::Dead => self.die,
        }
    }
}

/// CellAnimator maps every cell index to its visual scale.
pub struct CellAnimator {
    tweens: Vec<ScaleTween>,
    timing: AnimationTiming,
}

impl CellAnimator {
    /// Start every cube at rest on its current state
    pub fn from_registry(registry: &CellRegistry, timing: AnimationTiming) -> Self {
        let tweens = registry
            .all()
            .iter()
            .map(|cell| ScaleTween::settled(scale_for(cell.state())))
            .collect();
        Self { tweens, timing }
    }

    /// React to a state change. Unknown indices are ignored.
    pub fn handle(&mut self, event: CellEvent) {
        if let Some(tween) = self.tweens.get_mut(event.index) {
            tween.retarget(scale_for(event.state), self.timing.duration_for(event.state));
        }
    }

    pub fn update(&mut self, delta_time: f32) {
        self.tweens
            .iter_mut()
            .filter(|tween| !tween.is_finished())
            .for_each(|tween| tween.advance(delta_time));
    }

    pub fn scale(&self, index: usize) -> f32 {
        self.tweens.get(index).map_or(DEAD_SCALE, ScaleTween::value)
    }

    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    /// Number of cubes still animating
    pub fn active(&self) -> usize {
        self.tweens.iter().filter(|tween| !tween.is_finished()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Resolution;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_tween_reaches_target() {
        let mut tween = ScaleTween::settled(DEAD_SCALE);
        tween.retarget(ALIVE_SCALE, 1.0);
        assert!(approx(tween.value(), DEAD_SCALE));

        tween.advance(0.5);
        let mid = tween.value();
        assert!(mid > DEAD_SCALE && mid < ALIVE_SCALE);

        tween.advance(5.0);
        assert!(tween.is_finished());
        assert!(approx(tween.value(), ALIVE_SCALE));
    }

    #[test]
    fn test_retarget_starts_from_current_value() {
        let mut tween = ScaleTween::settled(DEAD_SCALE);
        tween.retarget(ALIVE_SCALE, 1.0);
        tween.advance(0.5);
        let current = tween.value();

        tween.retarget(DEAD_SCALE, 2.0);
        assert!(approx(tween.value(), current));
        assert_eq!(tween.target(), DEAD_SCALE);
    }

    #[test]
    fn test_zero_duration_jumps() {
        let mut tween = ScaleTween::settled(ALIVE_SCALE);
        tween.retarget(DEAD_SCALE, 0.0);
        assert!(approx(tween.value(), DEAD_SCALE));
    }

    #[test]
    fn test_timing_from_step_interval() {
        let timing = AnimationTiming::from_step_interval(0.15);
        assert!(approx(timing.die, 1.5));
        assert!(approx(timing.born, 0.75));
    }

    #[test]
    fn test_animator_follows_registry_events() {
        let mut registry = CellRegistry::new(Resolution::new(3, 3).unwrap());
        registry.born(4).unwrap();
        registry.drain_events().for_each(drop);

        let mut animator = CellAnimator::from_registry(&registry, AnimationTiming::from_step_interval(0.1));
        assert_eq!(animator.len(), 9);
        assert!(approx(animator.scale(4), ALIVE_SCALE));
        assert!(approx(animator.scale(0), DEAD_SCALE));

        registry.die(4).unwrap();
        registry.born(0).unwrap();
        for event in registry.drain_events() {
            animator.handle(event);
        }
        assert_eq!(animator.active(), 2);

        animator.update(2.0);
        assert_eq!(animator.active(), 0);
        assert!(approx(animator.scale(4), DEAD_SCALE));
        assert!(approx(animator.scale(0), ALIVE_SCALE));
    }

    #[test]
    fn test_animator_ignores_unknown_index() {
        let registry = CellRegistry::new(Resolution::new(2, 2).unwrap());
        let mut animator = CellAnimator::from_registry(&registry, AnimationTiming::from_step_interval(0.1));
        animator.handle(CellEvent { index: 99, state: CellState::Alive });
        assert_eq!(animator.active(), 0);
        assert!(approx(animator.scale(99), DEAD_SCALE));
    }
}
