//! Entry point and game loop.

use std::fs::File;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crossterm::event::KeyCode;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use mazepulse::config::GameConfig;
use mazepulse::device::melody;
use mazepulse::device::{Clock, Indicator, SystemClock};
use mazepulse::domain::maze::Level;
use mazepulse::error::GameError;
use mazepulse::sim::command::{self, Command};
use mazepulse::sim::feedback;
use mazepulse::sim::outcome::Outcome;
use mazepulse::sim::session::{GameSession, Settings, ViewMode};
use mazepulse::sim::view;
use mazepulse::ui::gamepad::GamepadState;
use mazepulse::ui::input::{InputState, InputSubscription};
use mazepulse::ui::intro::Intro;
use mazepulse::ui::renderer::TerminalBoard;
use mazepulse::ui::sound::SoundEngine;

const FRAME_SLEEP: Duration = Duration::from_millis(5);

fn main() {
    let (config, config_warning) = GameConfig::load();
    init_tracing(&config);
    if let Some((path, e)) = config_warning {
        warn!(path = %path.display(), error = %e, "config.toml unusable, using default settings");
        eprintln!("Warning: {}: {e}; using default settings.", path.display());
    }

    let level = match load_level(&config) {
        Ok(level) => level,
        Err(e) => {
            eprintln!("Could not load maze: {e}");
            return;
        }
    };

    let mut board = match TerminalBoard::new(SoundEngine::new()) {
        Ok(board) => board,
        Err(e) => {
            eprintln!("Terminal init failed: {e}");
            return;
        }
    };

    let result = run(&mut board, &level, &config);

    // Restores the terminal.
    drop(board);

    if let Err(e) = result {
        eprintln!("Game error: {e}");
    }

    println!();
    println!("Thanks for playing Maze Pulse!");
}

/// Log to a file; the terminal belongs to the board.
fn init_tracing(config: &GameConfig) {
    let file = match File::create(&config.log_file) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Warning: logging disabled, cannot open {}: {e}", config.log_file.display());
            return;
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
}

fn load_level(config: &GameConfig) -> Result<Level, GameError> {
    match &config.maze_file {
        Some(path) => {
            info!(path = %path.display(), "loading maze file");
            let text = std::fs::read_to_string(path)?;
            Ok(Level::parse(&text)?)
        }
        None => Ok(Level::builtin()?),
    }
}

enum SessionEnd {
    Quit,
    Restart,
}

fn run(board: &mut TerminalBoard, level: &Level, config: &GameConfig) -> Result<(), GameError> {
    let clock = SystemClock::new();
    let mut gp = GamepadState::new();
    gp.load_button_config(&config.gamepad);

    board.set_title(&level.name);
    if config.intro {
        board.set_status("");
        Intro::spawn(config.timing.intro_frame_ms).play(board);
        melody::play(board, melody::INTRO);
    }

    loop {
        // Input is registered per game and released when it ends.
        let subscription = InputSubscription::register()?;
        let mut kb = InputState::new(&subscription);
        kb.discard_pending();
        gp.discard_pending();

        let mut session =
            GameSession::with_seed(level.clone(), Settings::from(config), config.seed, clock.now_ms());
        match play_session(board, &mut session, &clock, &mut kb, &mut gp, config)? {
            SessionEnd::Quit => return Ok(()),
            SessionEnd::Restart => info!("restarting"),
        }
    }
}

fn play_session(
    board: &mut TerminalBoard,
    session: &mut GameSession,
    clock: &SystemClock,
    kb: &mut InputState,
    gp: &mut GamepadState,
    config: &GameConfig,
) -> Result<SessionEnd, GameError> {
    let tick_rate = Duration::from_millis(config.timing.tick_rate_ms);
    let mut last_tick: Option<Instant> = None;

    view::present(session, board);

    loop {
        kb.drain_events();
        gp.update();

        if kb.ctrl_c_pressed() || kb.any_pressed(KEYS_QUIT) || gp.quit_pressed() {
            return Ok(SessionEnd::Quit);
        }

        if session.is_over() {
            if kb.any_pressed(KEYS_RESTART) || gp.restart_pressed() {
                return Ok(SessionEnd::Restart);
            }
        } else if let Some(cmd) = detect_command(kb, gp) {
            let events = command::apply(session, cmd);
            view::present(session, board);
            feedback::actuate(board, session, &events, &config.timing);
            kb.discard_pending();
            gp.discard_pending();
        }

        if !session.is_over() && last_tick.map_or(true, |t| t.elapsed() >= tick_rate) {
            let (rgb, end) = session.tick(clock.now_ms());
            board.set_colour(rgb, 0);
            if let Some(event) = end {
                info!(?event, "game ended on a tick");
                feedback::actuate(board, session, &[event], &config.timing);
            }
            last_tick = Some(Instant::now());
        }

        board.set_status(&status_line(session));
        board.render()?;
        std::thread::sleep(FRAME_SLEEP);
    }
}

fn status_line(session: &GameSession) -> String {
    match session.outcome {
        Outcome::Victory => "You found the way out!  [Enter] Again".to_string(),
        Outcome::Death => "A trap! The maze wins.  [Enter] Again".to_string(),
        Outcome::Ongoing => match session.player.view {
            ViewMode::Floor => "Floor view".to_string(),
            ViewMode::Map => "Map view  [Tab] Back".to_string(),
        },
    }
}

// ── Key Constants ──

const KEYS_LEFT: &[KeyCode] = &[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')];
const KEYS_RIGHT: &[KeyCode] = &[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')];
const KEYS_STEP: &[KeyCode] = &[KeyCode::Up, KeyCode::Char(' '), KeyCode::Char('w'), KeyCode::Char('W')];
const KEYS_MAP: &[KeyCode] = &[KeyCode::Tab, KeyCode::Char('m'), KeyCode::Char('M')];
const KEYS_QUIT: &[KeyCode] = &[KeyCode::Esc, KeyCode::Char('q'), KeyCode::Char('Q')];
const KEYS_RESTART: &[KeyCode] = &[KeyCode::Enter];

/// At most one command per frame; keyboard first.
fn detect_command(kb: &InputState, gp: &GamepadState) -> Option<Command> {
    if kb.any_pressed(KEYS_LEFT) {
        Some(Command::RotateLeft)
    } else if kb.any_pressed(KEYS_RIGHT) {
        Some(Command::RotateRight)
    } else if kb.any_pressed(KEYS_STEP) {
        Some(Command::StepForward)
    } else if kb.any_pressed(KEYS_MAP) {
        Some(Command::ToggleMap)
    } else {
        gp.command()
    }
}
