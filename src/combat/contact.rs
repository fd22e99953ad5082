use crate::entities::{Faction, Projectile, ProjectileId, Shooter, ShooterId};

/// Overlap between a projectile and a shooter, as reported by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Contact {
    pub projectile: ProjectileId,
    pub shooter: ShooterId,
}

impl Contact {
    pub fn new(projectile: ProjectileId, shooter: ShooterId) -> Self {
        Self {
            projectile,
            shooter,
        }
    }
}

/// A contact that destroyed both sides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kill {
    pub projectile: ProjectileId,
    pub shooter: ShooterId,
    pub victim: Faction,
}

/// Applies destroy-both-on-contact to the given overlaps.
///
/// Pairs where either side is already dead, or where the projectile belongs
/// to the shooter's own faction, are skipped. Contacts are resolved in
/// `(projectile, shooter)` order, so the outcome does not depend on the order
/// the engine reported them in: a projectile touching two targets in the same
/// frame takes out the one with the lower id.
pub fn resolve(
    contacts: &[Contact],
    projectiles: &mut [Projectile],
    shooters: &mut [Shooter],
) -> Vec<Kill> {
    let mut ordered = contacts.to_vec();
    ordered.sort_unstable();
    ordered.dedup();

    let mut kills = Vec::new();
    for contact in ordered {
        let Some(projectile) = projectiles.iter_mut().find(|p| p.id == contact.projectile) else {
            continue;
        };
        let Some(shooter) = shooters.iter_mut().find(|s| s.id == contact.shooter) else {
            continue;
        };

        if !projectile.is_alive() || !shooter.is_alive() || projectile.owner == shooter.faction {
            continue;
        }

        projectile.destroy();
        shooter.destroy();

        tracing::info!(
            projectile = contact.projectile.0,
            shooter = contact.shooter.0,
            victim = ?shooter.faction,
            "contact destroyed shooter"
        );

        kills.push(Kill {
            projectile: contact.projectile,
            shooter: contact.shooter,
            victim: shooter.faction,
        });
    }

    kills
}
