mod display;

use std::collections::HashMap;
use std::error::Error;
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, DisableFocusChange, EnableFocusChange, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use tracing::{info, warn};

use dino_runner::audio::TerminalBell;
use dino_runner::cli::CliArgs;
use dino_runner::config::{default_config_dir, GameConfig};
use dino_runner::drawer::Canvas;
use dino_runner::engine::Engine;
use dino_runner::input::InputEvent;
use dino_runner::logging::init_logging;
use dino_runner::score_store::{FileScoreStore, ScoreStore};

use display::Viewport;

// ── Key-release emulation ─────────────────────────────────────────────────────

/// Terminals without keyboard enhancement never report releases: a key is
/// treated as released once no press/repeat arrived for this long.  Long
/// enough to bridge the OS key-repeat delay.
const HOLD_WINDOW: Duration = Duration::from_millis(450);

/// Tracks when each key was last seen and synthesises key-up events for
/// keys that went quiet.
#[derive(Default)]
struct HeldKeys {
    last_seen: HashMap<KeyCode, Instant>,
}

impl HeldKeys {
    fn touch(&mut self, code: KeyCode, now: Instant) {
        self.last_seen.insert(code, now);
    }

    fn release(&mut self, code: &KeyCode) {
        self.last_seen.remove(code);
    }

    fn expire(&mut self, now: Instant, events: &mut Vec<InputEvent>) {
        self.last_seen.retain(|code, seen| {
            let alive = now.duration_since(*seen) <= HOLD_WINDOW;
            if !alive {
                events.push(InputEvent::KeyUp(KeyEvent::new(*code, KeyModifiers::NONE)));
            }
            alive
        });
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Fixed-period loop: drain input, step the engine by the nominal tick,
/// draw, sleep out the rest of the period.
fn game_loop<W: Write>(
    out: &mut W,
    engine: &mut Engine,
    rx: &mpsc::Receiver<Event>,
    keyboard_enhanced: bool,
) -> std::io::Result<()> {
    let tick = Duration::from_millis(engine.config().tick_ms);
    let mut canvas = Canvas::new(engine.config().game_size);
    let mut viewport = Viewport::current()?;
    let mut held = HeldKeys::default();

    loop {
        let frame_start = Instant::now();

        // queued input is applied before the tick runs
        let mut events = Vec::new();
        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press => {
                        held.touch(key.code, frame_start);
                        events.push(InputEvent::KeyDown(key));
                    }
                    KeyEventKind::Repeat => held.touch(key.code, frame_start),
                    KeyEventKind::Release => {
                        held.release(&key.code);
                        events.push(InputEvent::KeyUp(key));
                    }
                },
                Event::Resize(width, height) => {
                    viewport = Viewport { width, height };
                    events.push(InputEvent::Resize { width, height });
                }
                Event::FocusGained => events.push(InputEvent::Focus(true)),
                Event::FocusLost => events.push(InputEvent::Focus(false)),
                _ => {}
            }
        }
        if !keyboard_enhanced {
            held.expire(frame_start, &mut events);
        }

        engine.step(tick.as_secs_f64(), events);
        if engine.should_quit() {
            return Ok(());
        }

        engine.draw(&mut canvas);
        display::render(out, &canvas, viewport)?;

        let elapsed = frame_start.elapsed();
        if elapsed < tick {
            std::thread::sleep(tick - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<(), Box<dyn Error>> {
    let args = CliArgs::parse();

    let config_dir = args.config.clone().unwrap_or_else(default_config_dir);
    let mut config = GameConfig::load_or_create(&config_dir)?;
    config.apply_cli_overrides(&args);

    let data_dir = FileScoreStore::default_dir();
    init_logging(&data_dir, &config.log_level);

    let mut store = FileScoreStore::in_dir(&data_dir);
    let high_score = store.load_or_zero();

    // Invalid configuration is fatal before the terminal is touched.
    let mut engine =
        Engine::new(config, high_score)?.with_audio(Box::new(TerminalBell::new(stdout())));
    info!(high_score, "starting");

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    let focus_reporting = out.execute(EnableFocusChange).is_ok();

    // Release events when the terminal can report them, HOLD_WINDOW otherwise.
    let keyboard_enhanced = matches!(terminal::supports_keyboard_enhancement(), Ok(true))
        && out
            .execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))
            .is_ok();

    // Blocking reads live on their own thread; the loop only polls the channel.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break;
                }
            }
            Err(_) => break,
        }
    });

    let result = game_loop(&mut out, &mut engine, &rx, keyboard_enhanced);

    if let Err(err) = engine.save_high_score(&mut store) {
        warn!(%err, "could not save high score");
    }

    // Restore the terminal even when the loop failed.
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    if focus_reporting {
        let _ = out.execute(DisableFocusChange);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    info!(high_score = engine.high_score(), "exiting");
    result.map_err(Into::into)
}
