/// Side a shooter or projectile fights for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Faction {
    Player,
    Enemy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShooterId(pub u32);

/// Rate limiter between successive shots.
///
/// `last_shot` is `None` until the first shot, which makes a fresh cooldown
/// eligible at any timestamp, including `0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Cooldown {
    /// Shots per second
    pub rate: f64,
    pub last_shot: Option<u64>,
}

impl Cooldown {
    pub fn new(rate: f64) -> Self {
        Self {
            rate,
            last_shot: None,
        }
    }

    /// Minimum milliseconds between two shots
    pub fn period_ms(&self) -> f64 {
        1000.0 / self.rate
    }

    pub fn can_fire(&self, now: u64) -> bool {
        if self.rate <= 0.0 {
            return false;
        }

        match self.last_shot {
            None => true,
            // elapsed / 1000 >= 1 / rate, multiplied out so 400ms at 2.5/s is exact
            Some(last) => now.saturating_sub(last) as f64 * self.rate >= 1000.0,
        }
    }

    pub fn record_shot(&mut self, now: u64) {
        self.last_shot = Some(now);
    }
}

/// Anything that can fire: the player ship or a formation member
#[derive(Debug, Clone)]
pub struct Shooter {
    pub id: ShooterId,
    pub faction: Faction,
    pub x: f32,
    pub y: f32,
    /// Horizontal velocity in px/s, integrated by the engine
    pub velocity_x: f32,
    pub cooldown: Cooldown,
    pub alive: bool,
}

impl Shooter {
    pub fn new(id: ShooterId, faction: Faction, x: f32, y: f32, firing_rate: f64) -> Self {
        Self {
            id,
            faction,
            x,
            y,
            velocity_x: 0.0,
            cooldown: Cooldown::new(firing_rate),
            alive: true,
        }
    }

    pub fn can_fire(&self, now: u64) -> bool {
        self.alive && self.cooldown.can_fire(now)
    }

    /// Only call right after a projectile actually spawned.
    pub fn record_shot(&mut self, now: u64) {
        self.cooldown.record_shot(now);
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn destroy(&mut self) {
        self.alive = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> Shooter {
        Shooter::new(ShooterId(0), Faction::Player, 400.0, 525.0, 2.5)
    }

    #[test]
    fn test_shooter_new() {
        let shooter = player();
        assert_eq!(shooter.x, 400.0);
        assert_eq!(shooter.y, 525.0);
        assert_eq!(shooter.faction, Faction::Player);
        assert_eq!(shooter.cooldown.last_shot, None);
        assert!(shooter.is_alive());
    }

    #[test]
    fn test_first_shot_eligible_at_time_zero() {
        let shooter = player();
        assert!(shooter.can_fire(0));
    }

    #[test]
    fn test_cooldown_boundary() {
        let mut shooter = player();
        shooter.record_shot(1_000);
        assert!(!shooter.can_fire(1_399));
        assert!(shooter.can_fire(1_400));
    }

    #[test]
    fn test_cooldown_after_shot_at_zero() {
        let mut shooter = player();
        shooter.record_shot(0);
        assert!(!shooter.can_fire(0));
        assert!(!shooter.can_fire(100));
        assert!(shooter.can_fire(400));
    }

    #[test]
    fn test_clock_behind_last_shot_counts_as_no_time() {
        let mut shooter = player();
        shooter.record_shot(5_000);
        assert!(!shooter.can_fire(4_000));
    }

    #[test]
    fn test_non_positive_rate_never_fires() {
        let zero = Cooldown::new(0.0);
        assert!(!zero.can_fire(0));
        assert!(!zero.can_fire(u64::MAX));

        let negative = Cooldown::new(-1.0);
        assert!(!negative.can_fire(10_000));
    }

    #[test]
    fn test_dead_shooter_cannot_fire() {
        let mut shooter = player();
        shooter.destroy();
        assert!(!shooter.can_fire(10_000));
    }

    #[test]
    fn test_period() {
        assert_eq!(Cooldown::new(2.5).period_ms(), 400.0);
        assert_eq!(Cooldown::new(1.0).period_ms(), 1000.0);
    }

    // Property-based tests
    #[cfg(test)]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_cooldown_is_monotonic(
                last in 0u64..1_000_000,
                first_gap in 0u64..5_000,
                extra in 0u64..5_000,
                rate in 0.1f64..20.0
            ) {
                let mut cooldown = Cooldown::new(rate);
                cooldown.record_shot(last);

                // Once eligible, waiting longer never makes it ineligible again
                if cooldown.can_fire(last + first_gap) {
                    prop_assert!(cooldown.can_fire(last + first_gap + extra));
                }
            }

            #[test]
            fn test_cooldown_matches_period(
                last in 0u64..1_000_000,
                gap in 0u64..10_000,
                rate in prop::sample::select(vec![0.5f64, 1.0, 2.0, 2.5, 4.0, 5.0])
            ) {
                let mut cooldown = Cooldown::new(rate);
                cooldown.record_shot(last);
                prop_assert_eq!(cooldown.can_fire(last + gap), gap as f64 >= cooldown.period_ms());
            }
        }
    }
}
