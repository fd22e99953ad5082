mod app;

use color_eyre::eyre::WrapErr;
use crossterm::{
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::fs::File;
use std::io::stdout;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use app::App;
use invaders::GameConfig;

const DEFAULT_CONFIG_PATH: &str = "invaders.toml";
const LOG_PATH: &str = "debug.log";

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config = GameConfig::load(&config_path)?;

    init_logging(&config.log_level)?;
    tracing::info!(config = %config_path, "starting");

    let supports_keyboard_enhancement = matches!(
        crossterm::terminal::supports_keyboard_enhancement(),
        Ok(true)
    );
    tracing::info!(supports_keyboard_enhancement, "terminal probed");

    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Release events are only reported with enhancement flags pushed
    if supports_keyboard_enhancement {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = App::new(config, supports_keyboard_enhancement).run(&mut terminal);

    if supports_keyboard_enhancement {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        tracing::error!(error = %err, "game loop failed");
    }
    result
}

/// Logs go to a file since the terminal is in raw mode
fn init_logging(level: &str) -> color_eyre::Result<()> {
    let file = File::create(LOG_PATH).wrap_err_with(|| format!("creating {LOG_PATH}"))?;
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
