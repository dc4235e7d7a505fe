use std::path::PathBuf;

use crate::breath::{DurationField, Phase};
use crate::mvi::Reducer;
use crate::ui::settings::intent::SettingsIntent;
use crate::ui::settings::state::{PathEditor, SettingsPanelState, SettingsRow};

/// Edits the panel asks the app to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsEffect {
    /// Apply the preset at this catalog index.
    SelectPreset(usize),
    AdjustDuration { field: DurationField, delta: i64 },
    AssignSound { phase: Phase, path: PathBuf },
    ClearSound(Phase),
}

pub struct SettingsReducer;

impl Reducer for SettingsReducer {
    type Model = SettingsPanelState;
    type Intent = SettingsIntent;
    type Effect = SettingsEffect;

    fn reduce(
        state: Self::Model,
        intent: Self::Intent,
        effects: &mut Vec<SettingsEffect>,
    ) -> Self::Model {
        if let SettingsIntent::Open {
            preset_count,
            running,
        } = intent
        {
            return SettingsPanelState::Visible {
                preset_count,
                focused: 0,
                locked: running,
                editor: None,
            };
        }

        let SettingsPanelState::Visible {
            preset_count,
            mut focused,
            mut locked,
            mut editor,
        } = state
        else {
            return SettingsPanelState::Hidden;
        };
        let row_count = SettingsRow::count(preset_count);

        match intent {
            SettingsIntent::Open { .. } => {}
            SettingsIntent::Close => return SettingsPanelState::Hidden,
            SettingsIntent::Back => {
                if editor.take().is_none() {
                    return SettingsPanelState::Hidden;
                }
            }
            SettingsIntent::SessionChanged { running } => {
                locked = running;
                if running {
                    editor = None;
                }
            }
            SettingsIntent::MoveUp if editor.is_none() => {
                focused = if focused == 0 {
                    row_count.saturating_sub(1)
                } else {
                    focused - 1
                };
            }
            SettingsIntent::MoveDown if editor.is_none() => {
                focused = if focused + 1 >= row_count {
                    0
                } else {
                    focused + 1
                };
            }
            SettingsIntent::MoveUp | SettingsIntent::MoveDown => {}
            SettingsIntent::Activate => {
                if let Some(open) = editor.take() {
                    let path = open.buffer.trim();
                    if !path.is_empty() {
                        effects.push(SettingsEffect::AssignSound {
                            phase: open.phase,
                            path: PathBuf::from(path),
                        });
                    }
                } else if !locked {
                    match SettingsRow::at(focused, preset_count) {
                        Some(SettingsRow::Preset(index)) => {
                            effects.push(SettingsEffect::SelectPreset(index));
                        }
                        Some(SettingsRow::Sound(phase)) => {
                            editor = Some(PathEditor {
                                phase,
                                buffer: String::new(),
                            });
                        }
                        Some(SettingsRow::Duration(_)) | None => {}
                    }
                }
            }
            SettingsIntent::Increase | SettingsIntent::Decrease => {
                let delta = if matches!(intent, SettingsIntent::Increase) { 1 } else { -1 };
                if let (false, None, Some(SettingsRow::Duration(field))) =
                    (locked, &editor, SettingsRow::at(focused, preset_count))
                {
                    effects.push(SettingsEffect::AdjustDuration { field, delta });
                }
            }
            SettingsIntent::Clear => {
                if let (false, None, Some(SettingsRow::Sound(phase))) =
                    (locked, &editor, SettingsRow::at(focused, preset_count))
                {
                    effects.push(SettingsEffect::ClearSound(phase));
                }
            }
            SettingsIntent::InputChar(ch) => {
                if let Some(open) = editor.as_mut() {
                    open.buffer.push(ch);
                }
            }
            SettingsIntent::Backspace => {
                if let Some(open) = editor.as_mut() {
                    open.buffer.pop();
                }
            }
        }

        SettingsPanelState::Visible {
            preset_count,
            focused,
            locked,
            editor,
        }
    }
}
