use std::time::Duration;

pub const ANIMATION_DURATION: Duration = Duration::from_millis(1500);
pub const ANIMATION_STEPS: u32 = 60;

/// Interval between animation steps (25ms).
pub fn tick_interval() -> Duration {
    ANIMATION_DURATION / ANIMATION_STEPS
}

/// Displayed-value schedule for one animated statistic: 60 linear steps
/// from zero to the target. Intermediate values are floored; the final
/// step lands on the target exactly, so rounding drift never shows.
/// The caller owns the timer that drives this; dropping the iterator
/// cancels the remainder of the animation.
#[derive(Debug, Clone)]
pub struct CounterSchedule {
    target: u64,
    step: u32,
}

impl CounterSchedule {
    pub fn new(target: u64) -> Self {
        Self { target, step: 0 }
    }
}

impl Iterator for CounterSchedule {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.step >= ANIMATION_STEPS {
            return None;
        }
        self.step += 1;

        if self.step == ANIMATION_STEPS {
            Some(self.target)
        } else {
            let progress = f64::from(self.step) / f64::from(ANIMATION_STEPS);
            Some((self.target as f64 * progress).floor() as u64)
        }
    }
}
