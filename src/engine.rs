//! Boundary to the physics/render engine.
//!
//! The combat rules never move bodies or test overlaps themselves; they hand
//! the current bodies to an [`Engine`] and act on the contacts it reports.

use crate::combat::Contact;
use crate::entities::{FormationAnchor, Projectile, ProjectileId, Shooter};

/// Everything the engine integrates in one step
pub struct Bodies<'a> {
    pub player: &'a mut Shooter,
    pub anchor: Option<&'a mut FormationAnchor>,
    pub projectiles: &'a mut [Projectile],
}

pub trait Engine {
    /// Advance all bodies by `dt_ms` milliseconds.
    fn integrate(&mut self, bodies: Bodies<'_>, dt_ms: u64);

    /// A projectile entered the world.
    fn spawn_visual(&mut self, projectile: &Projectile);

    /// A projectile left the world, by contact or expiry.
    fn despawn_visual(&mut self, id: ProjectileId);

    /// Overlaps between live projectiles and live targets of one group.
    fn detect_overlaps(&self, projectiles: &[Projectile], targets: &[Shooter]) -> Vec<Contact>;
}
