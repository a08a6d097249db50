//! Difficulty curve and power timers

use super::state::{ActivePower, PowerKind};
use crate::tuning::Tuning;

/// Step interval at speed 1 for a given score. Shrinks by
/// `interval_step_ms` every `points_per_level` points and never goes below
/// `min_interval_ms`.
pub fn base_interval_ms(score: u64, tuning: &Tuning) -> u32 {
    let levels = score / tuning.points_per_level.max(1);
    let reduction = levels.saturating_mul(u64::from(tuning.interval_step_ms));
    let interval = u64::from(tuning.start_interval_ms).saturating_sub(reduction);
    interval.max(u64::from(tuning.min_interval_ms)) as u32
}

/// Real time one tick takes at the given speed (ms)
#[inline]
pub fn tick_interval_ms(base_interval_ms: u32, speed_multiplier: f64) -> f64 {
    f64::from(base_interval_ms) / speed_multiplier
}

/// Burn `elapsed_ms` off the active power. Returns the kind that ran out,
/// if any.
pub fn decay_power(power: &mut Option<ActivePower>, elapsed_ms: f64) -> Option<PowerKind> {
    let active = power.as_mut()?;
    active.remaining_ms -= elapsed_ms;
    if active.remaining_ms <= 0.0 {
        let kind = active.kind;
        *power = None;
        return Some(kind);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_base_interval_steps() {
        let tuning = Tuning::default();
        assert_eq!(base_interval_ms(0, &tuning), 140);
        assert_eq!(base_interval_ms(59, &tuning), 140);
        assert_eq!(base_interval_ms(60, &tuning), 134);
        assert_eq!(base_interval_ms(125, &tuning), 128);
        assert_eq!(base_interval_ms(660, &tuning), 74);
        assert_eq!(base_interval_ms(720, &tuning), 70);
        assert_eq!(base_interval_ms(u64::MAX, &tuning), 70);
    }

    #[test]
    fn test_tick_interval_scales_with_speed() {
        assert_eq!(tick_interval_ms(140, 1.0), 140.0);
        assert_eq!(tick_interval_ms(140, 2.0), 70.0);
    }

    #[test]
    fn test_decay_power_expires() {
        let mut power = Some(ActivePower {
            kind: PowerKind::Invincible,
            remaining_ms: 200.0,
        });
        assert_eq!(decay_power(&mut power, 140.0), None);
        assert_eq!(power.map(|p| p.remaining_ms), Some(60.0));
        assert_eq!(decay_power(&mut power, 60.0), Some(PowerKind::Invincible));
        assert!(power.is_none());
        assert_eq!(decay_power(&mut power, 60.0), None);
    }

    proptest! {
        #[test]
        fn prop_base_interval_monotone_and_floored(a in 0u64..100_000, b in 0u64..100_000) {
            let tuning = Tuning::default();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let at_lo = base_interval_ms(lo, &tuning);
            let at_hi = base_interval_ms(hi, &tuning);
            prop_assert!(at_hi <= at_lo);
            prop_assert!(at_hi >= 70);
        }
    }
}
