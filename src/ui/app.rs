use std::sync::Arc;

use tokio::sync::watch;

use crate::breath::Phase;
use crate::mvi::Reducer;
use crate::presets::{Preset, PresetCatalog};
use crate::session::{BreathingModel, SessionController};
use crate::sound::SoundBoard;
use crate::ui::settings::{
    step_duration, SettingsEffect, SettingsIntent, SettingsPanelState, SettingsReducer,
};

pub struct App {
    controller: SessionController,
    board: Arc<SoundBoard>,
    catalog: PresetCatalog,
    updates: watch::Receiver<BreathingModel>,
    /// Latest published session model.
    model: BreathingModel,
    /// State of the settings panel (MVI pattern).
    settings: SettingsPanelState,
    /// Latest sound error, shown on the status line.
    status: Option<String>,
    should_quit: bool,
}

impl App {
    pub fn new(controller: SessionController, board: Arc<SoundBoard>, catalog: PresetCatalog) -> Self {
        let updates = controller.subscribe();
        let model = controller.snapshot();
        Self {
            controller,
            board,
            catalog,
            updates,
            model,
            settings: SettingsPanelState::default(),
            status: None,
            should_quit: false,
        }
    }

    pub fn model(&self) -> &BreathingModel {
        &self.model
    }

    pub fn catalog(&self) -> &PresetCatalog {
        &self.catalog
    }

    pub fn settings(&self) -> &SettingsPanelState {
        &self.settings
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn sound_enabled(&self) -> bool {
        self.board.is_enabled()
    }

    pub fn sound_file(&self, phase: Phase) -> Option<String> {
        self.board.file_name(phase)
    }

    /// Preset whose durations match the active ones exactly.
    pub fn active_preset(&self) -> Option<&Preset> {
        self.catalog.matching(&self.model.durations)
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn on_tick(&mut self) {
        if self.updates.has_changed().unwrap_or(false) {
            let model = self.updates.borrow_and_update().clone();
            self.set_model(model);
        }
        if let Some(error) = self.board.take_errors().pop() {
            self.status = Some(error.to_string());
        }
    }

    pub fn toggle_session(&mut self) {
        let model = self.controller.start_pause();
        self.set_model(model);
    }

    pub fn reset_session(&mut self) {
        let model = self.controller.reset();
        self.set_model(model);
    }

    pub fn open_settings(&mut self) {
        self.dispatch_settings(SettingsIntent::Open {
            preset_count: self.catalog.len(),
            running: self.model.session.running,
        });
    }

    pub fn dispatch_settings(&mut self, intent: SettingsIntent) {
        let mut effects = Vec::new();
        self.settings = SettingsReducer::reduce(std::mem::take(&mut self.settings), intent, &mut effects);
        for effect in effects {
            self.perform(effect);
        }
    }

    fn set_model(&mut self, model: BreathingModel) {
        let running_changed = model.session.running != self.model.session.running;
        self.model = model;
        if running_changed && self.settings.is_visible() {
            self.dispatch_settings(SettingsIntent::SessionChanged {
                running: self.model.session.running,
            });
        }
    }

    fn perform(&mut self, effect: SettingsEffect) {
        match effect {
            SettingsEffect::SelectPreset(index) => {
                let Some(durations) = self.catalog.get(index).map(|preset| preset.durations) else {
                    return;
                };
                let id = self.catalog.matching(&durations).map(|preset| preset.id.clone());
                let model = self.controller.select_preset(durations, id);
                self.set_model(model);
            }
            SettingsEffect::AdjustDuration { field, delta } => {
                let value = step_duration(self.model.durations.field(field), delta);
                let model = self.controller.set_duration(field, value);
                self.set_model(model);
            }
            SettingsEffect::AssignSound { phase, path } => {
                self.status = self
                    .board
                    .assign(phase, Some(path.as_path()))
                    .err()
                    .map(|err| err.to_string());
            }
            SettingsEffect::ClearSound(phase) => {
                self.status = self.board.assign(phase, None).err().map(|err| err.to_string());
            }
        }
    }
}
