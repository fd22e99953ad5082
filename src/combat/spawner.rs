use crate::entities::{Direction, Projectile, ProjectileId, Shooter};

/// Creates projectiles for shooters whose cooldown allows it and hands out
/// projectile ids.
#[derive(Debug, Clone)]
pub struct Spawner {
    next_id: u64,
    /// Distance between the shooter and the spawned projectile along its path
    pub muzzle_offset: f32,
    /// Projectile speed in px/s
    pub speed: f32,
}

impl Spawner {
    pub fn new(muzzle_offset: f32, speed: f32) -> Self {
        Self {
            next_id: 0,
            muzzle_offset,
            speed,
        }
    }

    /// Fires `shooter` if its cooldown has elapsed.
    ///
    /// `reverse` fires downwards (enemies) instead of upwards (player). Returns
    /// `None` with no side effect when throttled; on success the shot is
    /// recorded on the shooter's cooldown.
    pub fn fire(&mut self, shooter: &mut Shooter, now: u64, reverse: bool) -> Option<Projectile> {
        if !shooter.can_fire(now) {
            return None;
        }

        let direction = if reverse { Direction::Down } else { Direction::Up };
        let projectile = Projectile::new(
            ProjectileId(self.next_id),
            shooter.faction,
            shooter.x,
            shooter.y + direction.sign() * self.muzzle_offset,
            direction,
            self.speed,
            now,
        );
        self.next_id += 1;
        shooter.record_shot(now);

        tracing::debug!(
            shooter = shooter.id.0,
            projectile = projectile.id.0,
            faction = ?shooter.faction,
            x = projectile.x,
            y = projectile.y,
            now,
            "shot fired"
        );

        Some(projectile)
    }
}
