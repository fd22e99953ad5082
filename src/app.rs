use color_eyre::Result;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::time::{Duration, Instant};

use invaders::input::{InputAction, InputManager};
use invaders::renderer::{GameRenderer, RenderView};
use invaders::{Arcade, Clock, Game, GameConfig, SystemClock};

/// Terminal front-end: owns the match and its collaborators and drives the frame loop.
pub struct App {
    running: bool,
    game: Game,
    engine: Arcade,
    clock: SystemClock,
    input_manager: InputManager,
    renderer: GameRenderer,
    last_frame_time: Instant,
    fps: u32,
}

impl App {
    pub fn new(config: GameConfig, reports_releases: bool) -> Self {
        Self {
            running: true,
            engine: Arcade::from_config(&config),
            game: Game::new(config),
            clock: SystemClock::new(),
            input_manager: InputManager::new(reports_releases),
            renderer: GameRenderer::new(),
            last_frame_time: Instant::now(),
            fps: 0,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
        let mut rng = rand::rng();

        while self.running {
            let now = Instant::now();
            let frame_time = now.duration_since(self.last_frame_time);
            self.last_frame_time = now;
            if frame_time.as_micros() > 0 {
                self.fps = (1_000_000 / frame_time.as_micros()) as u32;
            }

            terminal.draw(|frame| {
                let config = self.game.config();
                let view = RenderView {
                    game_state: self.game.state(),
                    player: &self.game.player,
                    enemies: &self.game.formation.members,
                    projectiles: &self.game.projectiles,
                    score: self.game.score(),
                    world_width: config.world_width,
                    world_height: config.world_height,
                    ship_size: config.ship_size,
                    fps: self.fps,
                };
                self.renderer.render(frame, &view);
            })?;

            self.input_manager.poll_events(self.game.state())?;
            self.process_actions();

            let controls = self.input_manager.controls();
            self.game
                .tick(self.clock.now_ms(), &controls, &mut self.engine, &mut rng);

            // ~60 FPS without spinning the CPU
            std::thread::sleep(Duration::from_millis(16));
        }
        Ok(())
    }

    fn process_actions(&mut self) {
        for action in self.input_manager.actions().to_vec() {
            match action {
                InputAction::Quit => self.running = false,
                InputAction::Pause => self.game.pause(),
                InputAction::Resume => self.game.resume(),
                InputAction::Restart => {
                    self.game.restart();
                    self.engine = Arcade::from_config(self.game.config());
                }
            }
        }
    }
}
