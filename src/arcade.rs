use std::collections::HashSet;

use crate::combat::Contact;
use crate::config::GameConfig;
use crate::engine::{Bodies, Engine};
use crate::entities::{Projectile, ProjectileId, Shooter};

/// Minimal arcade physics: Euler integration, a bouncing formation anchor and
/// axis-aligned overlap tests.
#[derive(Debug, Clone)]
pub struct Arcade {
    pub width: f32,
    pub height: f32,
    pub ship_size: f32,
    pub projectile_size: f32,
    /// Projectiles currently shown
    visuals: HashSet<ProjectileId>,
}

impl Arcade {
    pub fn new(width: f32, height: f32, ship_size: f32, projectile_size: f32) -> Self {
        Self {
            width,
            height,
            ship_size,
            projectile_size,
            visuals: HashSet::new(),
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            config.world_width,
            config.world_height,
            config.ship_size,
            config.projectile_size,
        )
    }

    pub fn visual_count(&self) -> usize {
        self.visuals.len()
    }

    pub fn has_visual(&self, id: ProjectileId) -> bool {
        self.visuals.contains(&id)
    }
}

/// Centered boxes overlap when their centers are closer than the half sizes combined
fn boxes_overlap(a: (f32, f32), a_size: f32, b: (f32, f32), b_size: f32) -> bool {
    let reach = (a_size + b_size) / 2.0;
    (a.0 - b.0).abs() < reach && (a.1 - b.1).abs() < reach
}

impl Engine for Arcade {
    fn integrate(&mut self, bodies: Bodies<'_>, dt_ms: u64) {
        let dt = dt_ms as f32 / 1000.0;

        let half_ship = self.ship_size / 2.0;
        let player = bodies.player;
        player.x += player.velocity_x * dt;
        // A world narrower than a ship (or NaN bounds) leaves the player unclamped
        if half_ship <= self.width - half_ship {
            player.x = player.x.clamp(half_ship, self.width - half_ship);
        }

        if let Some(anchor) = bodies.anchor {
            anchor.x += anchor.velocity_x * dt;

            // Reflect off the side walls using the whole formation's extent
            let min_x = anchor.half_width;
            let max_x = self.width - anchor.half_width;
            if anchor.x < min_x {
                anchor.x = min_x + (min_x - anchor.x);
                anchor.velocity_x = anchor.velocity_x.abs();
            } else if anchor.x > max_x {
                anchor.x = max_x - (anchor.x - max_x);
                anchor.velocity_x = -anchor.velocity_x.abs();
            }
            if min_x <= max_x {
                anchor.x = anchor.x.clamp(min_x, max_x);
            }
        }

        for projectile in bodies.projectiles.iter_mut() {
            projectile.y += projectile.velocity_y * dt;
        }
    }

    fn spawn_visual(&mut self, projectile: &Projectile) {
        self.visuals.insert(projectile.id);
    }

    fn despawn_visual(&mut self, id: ProjectileId) {
        self.visuals.remove(&id);
    }

    fn detect_overlaps(&self, projectiles: &[Projectile], targets: &[Shooter]) -> Vec<Contact> {
        let mut contacts = Vec::new();
        for projectile in projectiles.iter().filter(|p| p.is_alive()) {
            for target in targets.iter().filter(|t| t.is_alive()) {
                if boxes_overlap(
                    (projectile.x, projectile.y),
                    self.projectile_size,
                    (target.x, target.y),
                    self.ship_size,
                ) {
                    contacts.push(Contact::new(projectile.id, target.id));
                }
            }
        }
        contacts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Direction, Faction, FormationAnchor, ShooterId};

    fn arcade() -> Arcade {
        Arcade::new(800.0, 600.0, 32.0, 8.0)
    }

    fn shot(id: u64, owner: Faction, x: f32, y: f32, direction: Direction) -> Projectile {
        Projectile::new(ProjectileId(id), owner, x, y, direction, 300.0, 0)
    }

    fn player_at(x: f32) -> Shooter {
        Shooter::new(ShooterId(0), Faction::Player, x, 525.0, 2.5)
    }

    #[test]
    fn test_player_moves_and_clamps() {
        let mut engine = arcade();
        let mut player = player_at(400.0);
        player.velocity_x = 250.0;

        engine.integrate(
            Bodies {
                player: &mut player,
                anchor: None,
                projectiles: &mut [],
            },
            1_000,
        );
        assert_eq!(player.x, 650.0);

        engine.integrate(
            Bodies {
                player: &mut player,
                anchor: None,
                projectiles: &mut [],
            },
            1_000,
        );
        assert_eq!(player.x, 784.0);
    }

    #[test]
    fn test_narrow_world_leaves_player_unclamped() {
        let mut engine = Arcade::new(20.0, 600.0, 32.0, 8.0);
        let mut player = player_at(10.0);
        player.velocity_x = -250.0;
        let mut anchor = FormationAnchor::new(10.0, 100.0, 125.0);
        anchor.half_width = 16.0;

        engine.integrate(
            Bodies {
                player: &mut player,
                anchor: Some(&mut anchor),
                projectiles: &mut [],
            },
            100,
        );
        assert_eq!(player.x, -15.0);
        assert!(anchor.x.is_finite());
    }

    #[test]
    fn test_anchor_bounces_off_right_wall() {
        let mut engine = arcade();
        let mut player = player_at(400.0);
        let mut anchor = FormationAnchor::new(600.0, 100.0, 125.0);
        anchor.half_width = 166.0;

        // 600 + 125 = 725, past the 634 limit by 91
        engine.integrate(
            Bodies {
                player: &mut player,
                anchor: Some(&mut anchor),
                projectiles: &mut [],
            },
            1_000,
        );
        assert_eq!(anchor.x, 543.0);
        assert_eq!(anchor.velocity_x, -125.0);
    }

    #[test]
    fn test_anchor_bounces_off_left_wall() {
        let mut engine = arcade();
        let mut player = player_at(400.0);
        let mut anchor = FormationAnchor::new(20.0, 100.0, -125.0);

        engine.integrate(
            Bodies {
                player: &mut player,
                anchor: Some(&mut anchor),
                projectiles: &mut [],
            },
            200,
        );
        assert_eq!(anchor.x, 5.0);
        assert_eq!(anchor.velocity_x, 125.0);
    }

    #[test]
    fn test_projectiles_move_along_direction() {
        let mut engine = arcade();
        let mut player = player_at(400.0);
        let mut projectiles = vec![
            shot(0, Faction::Player, 400.0, 493.0, Direction::Up),
            shot(1, Faction::Enemy, 100.0, 82.0, Direction::Down),
        ];

        engine.integrate(
            Bodies {
                player: &mut player,
                anchor: None,
                projectiles: &mut projectiles,
            },
            100,
        );
        assert_eq!(projectiles[0].y, 463.0);
        assert_eq!(projectiles[1].y, 112.0);
    }

    #[test]
    fn test_detect_overlaps() {
        let engine = arcade();
        let projectiles = vec![
            shot(0, Faction::Player, 410.0, 100.0, Direction::Up),
            shot(1, Faction::Player, 500.0, 100.0, Direction::Up),
        ];
        let mut targets = vec![
            Shooter::new(ShooterId(1), Faction::Enemy, 400.0, 100.0, 1.0),
            Shooter::new(ShooterId(2), Faction::Enemy, 420.0, 110.0, 1.0),
        ];

        let contacts = engine.detect_overlaps(&projectiles, &targets);
        assert_eq!(
            contacts,
            vec![
                Contact::new(ProjectileId(0), ShooterId(1)),
                Contact::new(ProjectileId(0), ShooterId(2)),
            ]
        );

        // Dead targets are not reported
        targets[0].destroy();
        let contacts = engine.detect_overlaps(&projectiles, &targets);
        assert_eq!(contacts, vec![Contact::new(ProjectileId(0), ShooterId(2))]);
    }

    #[test]
    fn test_visual_lifecycle() {
        let mut engine = arcade();
        let projectile = shot(4, Faction::Player, 0.0, 0.0, Direction::Up);

        engine.spawn_visual(&projectile);
        assert!(engine.has_visual(ProjectileId(4)));
        engine.despawn_visual(ProjectileId(4));
        assert_eq!(engine.visual_count(), 0);
    }

    // Property-based tests
    #[cfg(test)]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_anchor_stays_within_bounds(
                start in 200.0f32..600.0,
                speed in 10.0f32..400.0,
                steps in prop::collection::vec(1u64..100, 1..300)
            ) {
                let mut engine = arcade();
                let mut player = player_at(400.0);
                let mut anchor = FormationAnchor::new(start, 100.0, speed);
                anchor.half_width = 166.0;

                for dt in steps {
                    engine.integrate(
                        Bodies {
                            player: &mut player,
                            anchor: Some(&mut anchor),
                            projectiles: &mut [],
                        },
                        dt,
                    );
                    prop_assert!(anchor.x >= 166.0 && anchor.x <= 634.0);
                }
            }
        }
    }
}
