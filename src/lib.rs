//! Aura Points - support ticket leaderboard dashboard
//!
//! Agents log in with their identifier, follow their rank progress, get a
//! celebratory video when they hit a milestone, and browse past months'
//! rankings. Scores and ranks come from an external HTTP API; this crate is
//! the client.
//!
//! ## Layout
//!
//! - [`api`]: typed client for the three endpoints
//! - [`store`]: persisted client state (session, theme, watched milestones)
//! - [`controller`]: session lifecycle, poll loop, milestone-video gate
//! - [`view`]: pure view models rendered by the GUI and the CLI
//! - [`gui`]: native egui dashboard

pub mod api;
pub mod config;
pub mod controller;
pub mod domain;
pub mod gui;
pub mod player;
pub mod store;
pub mod view;

pub use domain::*;
