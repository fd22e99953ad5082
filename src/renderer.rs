use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Block, Borders, Clear, Paragraph,
        canvas::{Canvas, Points, Rectangle},
    },
};

use crate::entities::{Faction, GameState, Projectile, Shooter};

/// Game state needed for one frame of drawing
pub struct RenderView<'a> {
    pub game_state: GameState,
    pub player: &'a Shooter,
    pub enemies: &'a [Shooter],
    pub projectiles: &'a [Projectile],
    pub score: u32,
    pub world_width: f32,
    pub world_height: f32,
    pub ship_size: f32,
    pub fps: u32,
}

/// Draws the world on a canvas in world coordinates
#[derive(Default)]
pub struct GameRenderer;

impl GameRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, view: &RenderView) {
        let [status_area, world_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(frame.area());

        self.render_status(frame, view, status_area);
        self.render_world(frame, view, world_area);

        match view.game_state {
            GameState::Playing => {}
            GameState::Paused => self.render_banner(
                frame,
                world_area,
                Color::Yellow,
                vec![
                    Line::from("PAUSED").bold().yellow(),
                    Line::from(""),
                    Line::from("Press P to resume").white(),
                ],
            ),
            GameState::GameOver => self.render_banner(
                frame,
                world_area,
                Color::Red,
                vec![
                    Line::from("GAME OVER").bold().red(),
                    Line::from(format!("Final Score: {}", view.score)).yellow(),
                    Line::from("Press R to restart, Q to quit").white(),
                ],
            ),
            GameState::Cleared => self.render_banner(
                frame,
                world_area,
                Color::Green,
                vec![
                    Line::from("WAVE CLEARED").bold().green(),
                    Line::from(format!("Final Score: {}", view.score)).yellow(),
                    Line::from("Press R to play again, Q to quit").white(),
                ],
            ),
        }
    }

    fn render_status(&self, frame: &mut Frame, view: &RenderView, area: Rect) {
        let alive = view.enemies.iter().filter(|e| e.is_alive()).count();
        let status = Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                view.score.to_string(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Enemies: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                alive.to_string(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  FPS: {}", view.fps),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                "  [Arrows: Move] [Space: Fire] [P: Pause] [Q: Quit]",
                Style::default().fg(Color::DarkGray),
            ),
        ]);

        frame.render_widget(Paragraph::new(status), area);
    }

    fn render_world(&self, frame: &mut Frame, view: &RenderView, area: Rect) {
        let height = view.world_height as f64;
        let size = view.ship_size as f64;
        // World y grows downwards, canvas y grows upwards
        let ship = |shooter: &Shooter, color: Color| Rectangle {
            x: shooter.x as f64 - size / 2.0,
            y: height - shooter.y as f64 - size / 2.0,
            width: size,
            height: size,
            color,
        };

        let player_shots: Vec<(f64, f64)> = view
            .projectiles
            .iter()
            .filter(|p| p.owner == Faction::Player)
            .map(|p| (p.x as f64, height - p.y as f64))
            .collect();
        let enemy_shots: Vec<(f64, f64)> = view
            .projectiles
            .iter()
            .filter(|p| p.owner == Faction::Enemy)
            .map(|p| (p.x as f64, height - p.y as f64))
            .collect();

        let canvas = Canvas::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .marker(Marker::Braille)
            .x_bounds([0.0, view.world_width as f64])
            .y_bounds([0.0, height])
            .paint(|ctx| {
                if view.player.is_alive() {
                    ctx.draw(&ship(view.player, Color::Green));
                }
                for enemy in view.enemies.iter().filter(|e| e.is_alive()) {
                    ctx.draw(&ship(enemy, Color::Yellow));
                }
                ctx.draw(&Points {
                    coords: &player_shots,
                    color: Color::Red,
                });
                ctx.draw(&Points {
                    coords: &enemy_shots,
                    color: Color::Magenta,
                });
            });

        frame.render_widget(canvas, area);
    }

    fn render_banner(&self, frame: &mut Frame, area: Rect, color: Color, lines: Vec<Line>) {
        let width = area.width.min(40);
        let height = area.height.min(5);
        let banner_area = Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        };

        frame.render_widget(Clear, banner_area);
        frame.render_widget(
            Paragraph::new(lines)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(color)),
                )
                .alignment(Alignment::Center),
            banner_area,
        );
    }
}
