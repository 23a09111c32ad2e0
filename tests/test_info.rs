use dino_runner::config::InfoConfig;
use dino_runner::drawer::Canvas;
use dino_runner::entities::{GameSize, GameStatus, SoundKind};
use dino_runner::info::InfoHandler;

fn make_info(high_score: u32) -> InfoHandler {
    InfoHandler::new(&InfoConfig::default(), GameSize::default(), high_score)
}

fn playing() -> InfoHandler {
    let mut info = make_info(0);
    info.start();
    info
}

fn screen(info: &InfoHandler) -> String {
    let mut canvas = Canvas::new(GameSize::default());
    info.draw_canvas(&mut canvas);
    canvas.rows().join("\n")
}

// ── State machine ─────────────────────────────────────────────────────────────

#[test]
fn starts_in_not_start() {
    let info = make_info(0);
    assert_eq!(info.status(), GameStatus::NotStart);
    assert!(info.check_is_state(GameStatus::NotStart));
    assert_eq!(info.score(), 0);
}

#[test]
fn full_cycle() {
    let mut info = make_info(0);
    assert!(info.start());
    assert!(!info.start());
    assert_eq!(info.status(), GameStatus::Playing);

    assert!(!info.restart());
    assert!(info.game_over());
    assert!(!info.game_over());
    assert_eq!(info.status(), GameStatus::GameOver);

    assert!(info.restart());
    assert_eq!(info.status(), GameStatus::Playing);
}

#[test]
fn game_over_requires_playing() {
    let mut info = make_info(0);
    assert!(!info.game_over());
    assert_eq!(info.status(), GameStatus::NotStart);
}

// ── Score ─────────────────────────────────────────────────────────────────────

#[test]
fn score_ignored_until_playing() {
    let mut info = make_info(0);
    assert_eq!(info.update(1.0, 500.0), None);
    assert_eq!(info.score(), 0);
}

#[test]
fn score_is_distance_since_run_start() {
    let mut info = playing();
    info.update(0.1, 10.0);
    assert_eq!(info.score(), 0);
    info.update(0.2, 31.0);
    assert_eq!(info.score(), 10); // floor(21 / 2)
}

#[test]
fn score_freezes_on_game_over() {
    let mut info = playing();
    info.update(0.0, 0.0);
    info.update(1.0, 40.0);
    info.game_over();
    assert_eq!(info.update(2.0, 400.0), None);
    assert_eq!(info.score(), 20);
}

#[test]
fn restart_clears_score() {
    let mut info = playing();
    info.update(0.0, 0.0);
    info.update(1.0, 40.0);
    info.game_over();
    info.restart();
    assert_eq!(info.score(), 0);
    // the new run measures from wherever the camera now is
    info.update(0.0, 1000.0);
    assert_eq!(info.score(), 0);
}

#[test]
fn milestone_fires_once_when_crossed() {
    let mut info = playing();
    info.update(0.0, 0.0);
    assert_eq!(info.update(1.0, 199.0), None);
    assert_eq!(info.score(), 99);
    assert_eq!(info.update(2.0, 200.0), Some(SoundKind::Milestone));
    assert_eq!(info.update(3.0, 202.0), None);
}

#[test]
fn milestone_blinks_the_score() {
    let mut info = playing();
    info.update(0.0, 0.0);
    info.update(2.0, 200.0);
    assert!(!info.is_score_visible());
    info.update(2.16, 200.0);
    assert!(info.is_score_visible());
    info.update(5.0, 200.0);
    assert!(info.is_score_visible());
}

// ── High score ────────────────────────────────────────────────────────────────

#[test]
fn high_score_keeps_the_max() {
    let mut info = make_info(50);
    info.start();
    info.update(0.0, 0.0);
    info.update(1.0, 20.0);
    info.game_over();
    assert_eq!(info.high_score(), 50);

    info.restart();
    info.update(0.0, 0.0);
    info.update(1.0, 240.0);
    assert_eq!(info.high_score(), 120); // live score counts
    info.game_over();
    assert_eq!(info.high_score(), 120);
}

// ── HUD ───────────────────────────────────────────────────────────────────────

#[test]
fn hud_shows_scores() {
    let info = make_info(50);
    let rows = screen(&info);
    assert!(rows.lines().next().unwrap().contains("HI 00050  00000"));
}

#[test]
fn overlays_follow_status() {
    let mut info = make_info(0);
    assert!(screen(&info).contains("Press Enter to start"));
    info.start();
    assert!(!screen(&info).contains("Press Enter"));
    info.game_over();
    assert!(screen(&info).contains("G A M E   O V E R"));
}
