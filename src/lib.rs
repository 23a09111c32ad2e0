//! Deterministic simulation engine for a side-scrolling runner.
//!
//! The terminal front end lives in the binary; everything here is pure
//! simulation plus narrow collaborator traits (`Drawer`, `AudioPlayer`,
//! `ScoreStore`).

pub mod audio;
pub mod cli;
pub mod clock;
pub mod collision;
pub mod config;
pub mod drawer;
pub mod engine;
pub mod entities;
pub mod error;
pub mod factory;
pub mod info;
pub mod input;
pub mod logging;
pub mod movement;
pub mod obj;
pub mod player;
pub mod score_store;
pub mod shape;
pub mod sky;
pub mod spawner;
pub mod sprites;
