//! Mazetrace desktop application UI.
//!
//! # Design Notes
//! - One frame loop owns all mutable state: it polls flows, advances the
//!   replay, applies queued actions and paints.
//! - Gateway calls run on the worker thread; flows await their responses
//!   and a modal spinner blocks input meanwhile.
//! - The replay schedules its own repaints, so an idle window costs nothing.

use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use eframe::{
    App, CreationContext, Frame, Storage,
    egui::{CentralPanel, Context},
};
use mazetrace_gateway::SolverGateway;

use crate::{
    action::{self, ActionRequestQueue, FlowAction},
    config::Config,
    persistence,
    state::{AppState, UiState},
    ui, view_model_builder,
    worker::{WorkError, Worker},
};

#[derive(Debug)]
pub struct MazetraceApp {
    app_state: AppState,
    ui_state: UiState,
}

impl MazetraceApp {
    pub fn new(
        cc: &CreationContext<'_>,
        config: &Config,
        gateway: Arc<dyn SolverGateway>,
    ) -> Result<Self, WorkError> {
        let mut settings = cc
            .storage
            .and_then(persistence::load_settings)
            .unwrap_or_default();
        config.apply_to(&mut settings);

        let worker = Worker::spawn(gateway)?;
        let mut app = Self {
            app_state: AppState::new(settings),
            ui_state: UiState::new(worker),
        };

        // Fetch the first maze right away.
        action::handler::handle(
            &mut app.app_state,
            &mut app.ui_state,
            FlowAction::GenerateMaze.into(),
        );
        Ok(app)
    }

    fn apply_persistence(&mut self, frame: &mut Frame) {
        if self.app_state.is_dirty()
            && let Some(storage) = frame.storage_mut()
        {
            self.save(storage);
            self.app_state.clear_dirty();
        }
    }

    fn schedule_repaint(&self, ctx: &Context, now: Instant) {
        if !self.ui_state.executor.is_idle() {
            ctx.request_repaint();
        } else if let Some(delay) = self.app_state.session.time_until_next_tick(now) {
            ctx.request_repaint_after(delay);
        }
    }
}

impl App for MazetraceApp {
    fn save(&mut self, storage: &mut dyn Storage) {
        persistence::save_settings(storage, &self.app_state.settings);
    }

    fn auto_save_interval(&self) -> Duration {
        Duration::from_secs(30)
    }

    fn update(&mut self, ctx: &Context, frame: &mut Frame) {
        let mut action_queue = ActionRequestQueue::default();

        self.ui_state.executor.poll(&mut action_queue);
        action::handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut action_queue);

        let now = Instant::now();
        self.app_state.session.poll_replay(now);

        if !self.ui_state.spinner_state.is_active() && !ctx.wants_keyboard_input() {
            ctx.input(|i| {
                ui::input::handle_input(i, &mut action_queue);
                action::handler::handle_all(
                    &mut self.app_state,
                    &mut self.ui_state,
                    &mut action_queue,
                );
            });
        }

        let main_screen_vm =
            view_model_builder::build_main_screen_vm(&self.app_state, &self.ui_state);

        CentralPanel::default().show(ctx, |ui| {
            ui::main_screen::show(ui, &main_screen_vm, &mut action_queue);
        });

        if let Some(spinner) = self.ui_state.spinner_state.active_kind() {
            ui::spinner::show(ctx, spinner);
        }

        action::handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut action_queue);

        self.schedule_repaint(ctx, now);
        self.apply_persistence(frame);
    }
}
