//! Main GUI application using egui
//!
//! Layout:
//! - Login overlay when no session exists
//! - Header with tabs, theme toggle and logout
//! - One of the profile / ranking / history panels
//! - Milestone video overlay on top of everything

use std::sync::Arc;

use eframe::egui;

use super::header::HeaderAction;
use crate::controller::Controller;

/// Main application state
pub struct AuraApp {
    /// Session & view state; the single owner of everything shown
    pub(crate) controller: Controller,
    /// Login text field
    pub(crate) login_input: String,
    /// Focus the login field on the next frame
    pub(crate) focus_login: bool,
}

impl AuraApp {
    pub fn new(mut controller: Controller, ctx: &egui::Context) -> Self {
        let repaint_ctx = ctx.clone();
        controller.set_waker(Arc::new(move || repaint_ctx.request_repaint()));

        let authenticated = controller.bootstrap();

        Self {
            controller,
            login_input: String::new(),
            focus_login: !authenticated,
        }
    }

    /// Submit the login field (button or Enter)
    pub(crate) fn submit_login(&mut self) {
        if self.controller.login(&self.login_input) {
            self.login_input.clear();
        } else {
            self.focus_login = true;
        }
    }

    pub(crate) fn logout(&mut self) {
        self.controller.logout();
        self.focus_login = true;
    }

    /// Apply a header click. Returns whether the dashboard body should still
    /// be drawn this frame.
    pub(crate) fn handle_header(&mut self, action: Option<HeaderAction>) -> bool {
        match action {
            Some(HeaderAction::SelectTab(tab)) => self.controller.select_tab(tab),
            Some(HeaderAction::ToggleTheme) => {
                self.controller.toggle_theme();
            }
            Some(HeaderAction::Logout) => self.logout(),
            None => {}
        }
        self.controller.is_authenticated()
    }
}
