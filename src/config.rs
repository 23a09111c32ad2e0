//! Game configuration: per-kind spawn tables, physics constants and
//! presentation settings, persisted as `config.ron`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::entities::{GameSize, Vec2};
use crate::error::ConfigError;
use crate::sprites::SpriteId;

const CONFIG_FILE: &str = "config.ron";

/// Top-level game configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    /// Logical game area in cells.
    pub game_size: GameSize,
    /// Nominal tick period in milliseconds.
    pub tick_ms: u64,
    /// Cells beyond the right edge of the viewport that must already be populated.
    pub lookahead: f64,
    /// Fixed RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Draw collider boxes.
    pub debug: bool,
    /// Log level override (e.g. "debug", "info", "warn").
    pub log_level: String,
    /// Length of one full day + night, in seconds.
    pub day_time_period: f64,
    pub camera: MotionConfig,
    pub player: PlayerConfig,
    pub cactus: SpawnConfig,
    pub bird: SpawnConfig,
    pub cloud: SpawnConfig,
    pub star: SpawnConfig,
    pub land: SpawnConfig,
    pub moon: MoonConfig,
    pub info: InfoConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MotionConfig {
    pub pos: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlayerConfig {
    /// `x` is the offset from the camera, `y` the standing (ground) row.
    pub pos: Vec2,
    pub jump_speed: f64,
    pub fall_acceleration: f64,
    pub hard_drop_acceleration: f64,
    pub attack_seconds: f64,
    pub run_frame_seconds: f64,
    pub duck_frame_seconds: f64,
}

/// How an entity kind looks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ShapeConfig {
    /// One sprite picked at random per spawn.
    Static { variants: Vec<SpriteId> },
    /// A frame sequence cycled with time.
    Animated { frames: Vec<SpriteId>, frame_seconds: f64 },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const fn fixed(v: f64) -> Self {
        Self { min: v, max: v }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum YPlacement {
    Fixed(f64),
    Choice(Vec<f64>),
    Range(Range),
}

/// Spawn table for one entity kind.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpawnConfig {
    pub shape: ShapeConfig,
    pub min_gap: f64,
    pub max_gap: f64,
    /// World x of the first spawn.
    pub start_x: f64,
    pub y: YPlacement,
    /// Horizontal velocity drawn uniformly per spawn.
    pub speed: Range,
    pub acceleration: Vec2,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MoonConfig {
    pub frames: Vec<SpriteId>,
    pub frame_seconds: f64,
    /// Leftward drift across the screen, cells per second.
    pub drift_speed: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InfoConfig {
    /// Camera distance worth one point.
    pub units_per_point: f64,
    /// Points between milestone chimes.
    pub milestone: u32,
    /// Half-period of the score blink.
    pub blink_seconds: f64,
    /// How long the score blinks after a milestone.
    pub blink_duration: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            game_size: GameSize::default(),
            tick_ms: 20,
            lookahead: 20.0,
            seed: None,
            debug: false,
            log_level: "info".to_string(),
            day_time_period: 60.0,
            camera: MotionConfig::default(),
            player: PlayerConfig::default(),
            cactus: SpawnConfig::cactus(),
            bird: SpawnConfig::bird(),
            cloud: SpawnConfig::cloud(),
            star: SpawnConfig::star(),
            land: SpawnConfig::land(),
            moon: MoonConfig::default(),
            info: InfoConfig::default(),
        }
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            velocity: Vec2::new(24.0, 0.0),
            acceleration: Vec2::new(0.2, 0.0),
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            pos: Vec2::new(6.0, 17.0),
            jump_speed: 24.0,
            fall_acceleration: 72.0,
            hard_drop_acceleration: 220.0,
            attack_seconds: 0.4,
            run_frame_seconds: 0.1,
            duck_frame_seconds: 0.15,
        }
    }
}

impl SpawnConfig {
    pub fn cactus() -> Self {
        Self {
            shape: ShapeConfig::Static {
                variants: vec![SpriteId::CactusSmall, SpriteId::CactusLarge, SpriteId::CactusGroup],
            },
            min_gap: 26.0,
            max_gap: 60.0,
            start_x: 90.0,
            y: YPlacement::Fixed(16.0),
            speed: Range::fixed(0.0),
            acceleration: Vec2::ZERO,
        }
    }

    pub fn bird() -> Self {
        Self {
            shape: ShapeConfig::Animated {
                frames: vec![SpriteId::BirdUp, SpriteId::BirdDown],
                frame_seconds: 0.2,
            },
            min_gap: 160.0,
            max_gap: 320.0,
            start_x: 320.0,
            // high (harmless), head height (duck), low (jump)
            y: YPlacement::Choice(vec![10.0, 16.0, 18.0]),
            speed: Range { min: -8.0, max: -4.0 },
            acceleration: Vec2::ZERO,
        }
    }

    pub fn cloud() -> Self {
        Self {
            shape: ShapeConfig::Static { variants: vec![SpriteId::Cloud] },
            min_gap: 18.0,
            max_gap: 48.0,
            start_x: 12.0,
            y: YPlacement::Range(Range { min: 1.0, max: 7.0 }),
            speed: Range { min: 10.0, max: 16.0 },
            acceleration: Vec2::ZERO,
        }
    }

    pub fn star() -> Self {
        Self {
            shape: ShapeConfig::Animated {
                frames: vec![SpriteId::StarBright, SpriteId::StarDim],
                frame_seconds: 0.5,
            },
            min_gap: 20.0,
            max_gap: 40.0,
            start_x: 0.0,
            y: YPlacement::Range(Range { min: 1.0, max: 10.0 }),
            speed: Range { min: 20.0, max: 22.0 },
            acceleration: Vec2::ZERO,
        }
    }

    /// Ground segments.  The gap fields are ignored: land always tiles by
    /// the segment width.
    pub fn land() -> Self {
        Self {
            shape: ShapeConfig::Static { variants: vec![SpriteId::Land] },
            min_gap: 20.0,
            max_gap: 20.0,
            start_x: 0.0,
            y: YPlacement::Fixed(20.0),
            speed: Range::fixed(0.0),
            acceleration: Vec2::ZERO,
        }
    }

    fn validate(&self, name: &str) -> Result<(), ConfigError> {
        if !(self.min_gap.is_finite() && self.min_gap > 0.0) {
            return Err(ConfigError::invalid(
                format!("{}.min_gap", name),
                format!("must be positive, got {}", self.min_gap),
            ));
        }
        if !self.max_gap.is_finite() || self.min_gap > self.max_gap {
            return Err(ConfigError::invalid(
                format!("{}.max_gap", name),
                format!("min_gap {} > max_gap {}", self.min_gap, self.max_gap),
            ));
        }
        match &self.shape {
            ShapeConfig::Static { variants } if variants.is_empty() => {
                return Err(ConfigError::invalid(format!("{}.shape", name), "no sprite variants"));
            }
            ShapeConfig::Animated { frames, .. } if frames.is_empty() => {
                return Err(ConfigError::invalid(format!("{}.shape", name), "no animation frames"));
            }
            ShapeConfig::Animated { frame_seconds, .. } if !(*frame_seconds > 0.0) => {
                return Err(ConfigError::invalid(
                    format!("{}.shape", name),
                    "frame_seconds must be positive",
                ));
            }
            _ => {}
        }
        match &self.y {
            YPlacement::Choice(ys) if ys.is_empty() => {
                return Err(ConfigError::invalid(format!("{}.y", name), "empty choice list"));
            }
            YPlacement::Range(r) if r.min > r.max => {
                return Err(ConfigError::invalid(format!("{}.y", name), "inverted range"));
            }
            _ => {}
        }
        if self.speed.min > self.speed.max {
            return Err(ConfigError::invalid(format!("{}.speed", name), "inverted range"));
        }
        Ok(())
    }
}

impl Default for MoonConfig {
    fn default() -> Self {
        Self {
            frames: vec![SpriteId::MoonCrescent, SpriteId::MoonFull],
            frame_seconds: 8.0,
            drift_speed: 1.5,
            y: 3.0,
        }
    }
}

impl Default for InfoConfig {
    fn default() -> Self {
        Self {
            units_per_point: 2.0,
            milestone: 100,
            blink_seconds: 0.15,
            blink_duration: 1.2,
        }
    }
}

// --- Validation ---

impl GameConfig {
    /// Reject values that would make spawning or physics undefined.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.game_size.width > 0.0 && self.game_size.height > 0.0) {
            return Err(ConfigError::invalid("game_size", "must be non-zero"));
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::invalid("tick_ms", "must be non-zero"));
        }
        if !(self.lookahead >= 0.0) {
            return Err(ConfigError::invalid("lookahead", "must not be negative"));
        }
        if !(self.day_time_period > 0.0) {
            return Err(ConfigError::invalid("day_time_period", "must be positive"));
        }
        if !(self.player.attack_seconds > 0.0) {
            return Err(ConfigError::invalid("player.attack_seconds", "must be positive"));
        }
        if !(self.player.run_frame_seconds > 0.0 && self.player.duck_frame_seconds > 0.0) {
            return Err(ConfigError::invalid("player", "frame seconds must be positive"));
        }
        if !(self.info.units_per_point > 0.0) {
            return Err(ConfigError::invalid("info.units_per_point", "must be positive"));
        }
        if self.info.milestone == 0 {
            return Err(ConfigError::invalid("info.milestone", "must be non-zero"));
        }
        if self.moon.frames.is_empty() || !(self.moon.frame_seconds > 0.0) {
            return Err(ConfigError::invalid("moon", "needs frames and a positive frame_seconds"));
        }
        self.cactus.validate("cactus")?;
        self.bird.validate("bird")?;
        self.cloud.validate("cloud")?;
        self.star.validate("star")?;
        self.land.validate("land")?;
        Ok(())
    }
}

// --- Load / Save ---

/// Platform config directory for the game (`~/.config/dino_runner` on Linux).
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("dino_runner")
}

impl GameConfig {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::Read)?;
            let config: GameConfig = ron::from_str(&contents).map_err(ConfigError::Parse)?;
            info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = GameConfig::default();
            config.save(config_dir)?;
            info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::Write)?;

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(4)
            .separate_tuple_members(true)
            .enumerate_arrays(false);
        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Serialize)?;

        std::fs::write(config_dir.join(CONFIG_FILE), serialized).map_err(ConfigError::Write)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        GameConfig::default().validate().unwrap();
    }

    #[test]
    fn config_roundtrip() {
        let config = GameConfig::default();
        let ron_str = ron::to_string(&config).unwrap();
        let back: GameConfig = ron::from_str(&ron_str).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn missing_section_uses_default() {
        let config: GameConfig = ron::from_str("(tick_ms: 33)").unwrap();
        assert_eq!(config.tick_ms, 33);
        assert_eq!(config.info, InfoConfig::default());
        assert_eq!(config.cactus, SpawnConfig::cactus());
    }

    #[test]
    fn inverted_gap_is_rejected() {
        let mut config = GameConfig::default();
        config.cactus.min_gap = 80.0;
        config.cactus.max_gap = 10.0;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref field, .. } if field == "cactus.max_gap"));
    }

    #[test]
    fn empty_frames_are_rejected() {
        let mut config = GameConfig::default();
        config.bird.shape = ShapeConfig::Animated { frames: vec![], frame_seconds: 0.2 };
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_bird_heights_are_rejected() {
        let mut config = GameConfig::default();
        config.bird.y = YPlacement::Choice(vec![]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_tick_is_rejected() {
        let config = GameConfig { tick_ms: 0, ..GameConfig::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_or_create_writes_default_then_reads_it_back() {
        let dir = tempfile::tempdir().unwrap();
        let created = GameConfig::load_or_create(dir.path()).unwrap();
        assert!(dir.path().join(CONFIG_FILE).exists());
        let loaded = GameConfig::load_or_create(dir.path()).unwrap();
        assert_eq!(created, loaded);
    }

    #[test]
    fn corrupt_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "{{not valid}}").unwrap();
        let err = GameConfig::load_or_create(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
