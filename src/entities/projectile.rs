use super::shooter::Faction;

/// Fixed lifetime of every projectile in milliseconds
pub const PROJECTILE_LIFETIME_MS: u64 = 1750;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProjectileId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Sign of the y velocity in screen coordinates (y grows downwards)
    pub fn sign(&self) -> f32 {
        match self {
            Direction::Up => -1.0,
            Direction::Down => 1.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Projectile {
    pub id: ProjectileId,
    pub owner: Faction,
    pub x: f32,
    pub y: f32,
    pub direction: Direction,
    /// Vertical velocity in px/s, integrated by the engine
    pub velocity_y: f32,
    pub spawned_at: u64,
    pub alive: bool,
}

impl Projectile {
    pub fn new(
        id: ProjectileId,
        owner: Faction,
        x: f32,
        y: f32,
        direction: Direction,
        speed: f32,
        spawned_at: u64,
    ) -> Self {
        Self {
            id,
            owner,
            x,
            y,
            direction,
            velocity_y: direction.sign() * speed,
            spawned_at,
            alive: true,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn destroy(&mut self) {
        self.alive = false;
    }

    pub fn is_expired(&self, now: u64, lifetime_ms: u64) -> bool {
        now.saturating_sub(self.spawned_at) >= lifetime_ms
    }

    /// Marks the projectile dead once its lifetime ran out.
    /// Returns true only on the tick that expired it.
    pub fn expire(&mut self, now: u64, lifetime_ms: u64) -> bool {
        if self.alive && self.is_expired(now, lifetime_ms) {
            self.alive = false;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bullet(direction: Direction) -> Projectile {
        Projectile::new(
            ProjectileId(1),
            Faction::Player,
            400.0,
            493.0,
            direction,
            300.0,
            1_000,
        )
    }

    #[test]
    fn test_projectile_new() {
        let projectile = bullet(Direction::Up);
        assert_eq!(projectile.x, 400.0);
        assert_eq!(projectile.y, 493.0);
        assert_eq!(projectile.owner, Faction::Player);
        assert_eq!(projectile.spawned_at, 1_000);
        assert!(projectile.is_alive());
    }

    #[test]
    fn test_velocity_follows_direction() {
        assert_eq!(bullet(Direction::Up).velocity_y, -300.0);
        assert_eq!(bullet(Direction::Down).velocity_y, 300.0);
    }

    #[test]
    fn test_projectile_lifetime() {
        let mut projectile = bullet(Direction::Up);

        assert!(!projectile.expire(2_749, PROJECTILE_LIFETIME_MS));
        assert!(projectile.is_alive());

        assert!(projectile.expire(2_750, PROJECTILE_LIFETIME_MS));
        assert!(!projectile.is_alive());

        // Already dead: nothing left to expire
        assert!(!projectile.expire(5_000, PROJECTILE_LIFETIME_MS));
    }

    #[test]
    fn test_destroyed_projectile_does_not_expire_again() {
        let mut projectile = bullet(Direction::Down);
        projectile.destroy();
        assert!(!projectile.expire(10_000, PROJECTILE_LIFETIME_MS));
    }

    // Property-based tests
    #[cfg(test)]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_expiry_threshold(
                spawned_at in 0u64..1_000_000,
                age in 0u64..5_000
            ) {
                let mut projectile = Projectile::new(
                    ProjectileId(7),
                    Faction::Enemy,
                    0.0,
                    0.0,
                    Direction::Down,
                    300.0,
                    spawned_at,
                );
                let expired = projectile.expire(spawned_at + age, PROJECTILE_LIFETIME_MS);
                prop_assert_eq!(expired, age >= PROJECTILE_LIFETIME_MS);
                prop_assert_eq!(projectile.is_alive(), age < PROJECTILE_LIFETIME_MS);
            }
        }
    }
}
