use rand::Rng;

use crate::combat::{Kill, Spawner, pick_shooter, resolve};
use crate::config::GameConfig;
use crate::engine::{Bodies, Engine};
use crate::entities::{
    Faction, Formation, FormationAnchor, GameState, Projectile, Shooter, ShooterId,
};

/// Held controls for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

impl Controls {
    /// Left and right held together cancel out
    pub fn horizontal_velocity(&self, speed: f32) -> f32 {
        let mut velocity = 0.0;
        if self.left {
            velocity -= speed;
        }
        if self.right {
            velocity += speed;
        }
        velocity
    }
}

/// One match: the player, the enemy formation and every projectile in flight
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    state: GameState,
    pub player: Shooter,
    pub formation: Formation,
    pub projectiles: Vec<Projectile>,
    spawner: Spawner,
    score: u32,
    last_tick: Option<u64>,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        let (player_x, player_y) = config.player_start;
        let player = Shooter::new(
            ShooterId(0),
            Faction::Player,
            player_x,
            player_y,
            config.player_firing_rate,
        );

        let (anchor_x, anchor_y) = config.formation_anchor;
        let anchor = FormationAnchor::new(anchor_x, anchor_y, config.formation_speed);
        let formation = Formation::anchored(
            anchor,
            &config.formation_offsets(),
            1,
            config.ship_size,
            config.enemy_firing_rate,
            config.volley_rate,
        );

        Self::with_formation(config, player, formation)
    }

    /// Match with a caller-built player and formation
    pub fn with_formation(config: GameConfig, player: Shooter, formation: Formation) -> Self {
        let spawner = Spawner::new(config.muzzle_offset, config.projectile_speed);
        Self {
            config,
            state: GameState::Playing,
            player,
            formation,
            projectiles: Vec::new(),
            spawner,
            score: 0,
            last_tick: None,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn pause(&mut self) {
        if self.state == GameState::Playing {
            self.state = GameState::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.state == GameState::Paused {
            self.state = GameState::Playing;
            // Don't integrate the time spent paused
            self.last_tick = None;
        }
    }

    pub fn restart(&mut self) {
        *self = Self::new(self.config.clone());
        tracing::info!("match restarted");
    }

    /// Runs one frame at time `now` and returns the resulting state.
    pub fn tick<E, R>(
        &mut self,
        now: u64,
        controls: &Controls,
        engine: &mut E,
        rng: &mut R,
    ) -> GameState
    where
        E: Engine + ?Sized,
        R: Rng + ?Sized,
    {
        if self.state != GameState::Playing {
            return self.state;
        }

        let dt = self.last_tick.map_or(0, |last| now.saturating_sub(last));
        self.last_tick = Some(now);

        self.player.velocity_x = controls.horizontal_velocity(self.config.player_speed);

        if controls.fire
            && let Some(projectile) = self.spawner.fire(&mut self.player, now, false)
        {
            engine.spawn_visual(&projectile);
            self.projectiles.push(projectile);
        }

        self.fire_volley(now, engine, rng);

        engine.integrate(
            Bodies {
                player: &mut self.player,
                anchor: self.formation.anchor.as_mut(),
                projectiles: &mut self.projectiles,
            },
            dt,
        );
        self.formation.update_positions();

        let lifetime = self.config.projectile_lifetime_ms;
        for projectile in &mut self.projectiles {
            if projectile.expire(now, lifetime) {
                tracing::debug!(projectile = projectile.id.0, now, "projectile expired");
            }
        }

        let mut contacts =
            engine.detect_overlaps(&self.projectiles, std::slice::from_ref(&self.player));
        contacts.extend(engine.detect_overlaps(&self.projectiles, &self.formation.members));

        let mut kills =
            resolve(&contacts, &mut self.projectiles, std::slice::from_mut(&mut self.player));
        kills.extend(resolve(&contacts, &mut self.projectiles, &mut self.formation.members));
        self.score_kills(&kills);

        self.projectiles.retain(|projectile| {
            if !projectile.is_alive() {
                engine.despawn_visual(projectile.id);
            }
            projectile.is_alive()
        });

        self.update_state();
        self.state
    }

    /// One random member shoots down, at most once per volley period
    fn fire_volley<E, R>(&mut self, now: u64, engine: &mut E, rng: &mut R)
    where
        E: Engine + ?Sized,
        R: Rng + ?Sized,
    {
        if !self.formation.volley.can_fire(now) {
            return;
        }

        let Some(id) = pick_shooter(&self.formation.members, rng).map(|s| s.id) else {
            return;
        };
        let Some(member) = self.formation.members.iter_mut().find(|m| m.id == id) else {
            return;
        };

        if let Some(projectile) = self.spawner.fire(member, now, true) {
            self.formation.volley.record_shot(now);
            engine.spawn_visual(&projectile);
            self.projectiles.push(projectile);
        }
    }

    fn score_kills(&mut self, kills: &[Kill]) {
        let enemies = kills.iter().filter(|k| k.victim == Faction::Enemy).count() as u32;
        let points = enemies.saturating_mul(self.config.points_per_enemy);
        self.score = self.score.saturating_add(points);
    }

    fn update_state(&mut self) {
        let next = if !self.player.is_alive() {
            GameState::GameOver
        } else if self.formation.is_cleared() {
            GameState::Cleared
        } else {
            GameState::Playing
        };

        if next != self.state {
            tracing::info!(
                from = ?self.state,
                to = ?next,
                score = self.score,
                "game state changed"
            );
            self.state = next;
        }
    }
}
