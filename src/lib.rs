//! # Connect Four AI
//!
//! Computer opponents for two turn-based board games: a minimax engine with
//! alpha-beta pruning for Connect Four, and a chain-strategy player for the
//! boxes-claiming game.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, state machine
//! - [`ai`] — Heuristic evaluation, alpha-beta search, difficulty tiers
//! - [`boxes`] — Boxes board, game state and chain-capture opponent
//! - [`arena`] — Headless AI-vs-AI games and match statistics
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod arena;
pub mod boxes;
pub mod config;
pub mod error;
pub mod game;
