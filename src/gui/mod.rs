//! Native dashboard for Aura Points
//!
//! A thin egui layer over [`crate::controller::Controller`]: every frame it
//! applies pending fetch results, then draws the view models the controller
//! exposes. No panel talks to the API directly.

mod app;
mod app_eframe;
mod app_theme;
mod board;
mod header;
mod history;
mod login;
mod profile;
mod runner;
mod theme;
mod video;

pub use app::AuraApp;
pub use runner::run_gui;
