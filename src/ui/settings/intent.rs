use crate::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsIntent {
    Open { preset_count: usize, running: bool },
    Close,
    /// Esc: cancels an open path editor, otherwise closes the panel.
    Back,
    /// The session started or stopped. Running locks every editing row.
    SessionChanged { running: bool },
    MoveUp,
    MoveDown,
    /// Enter: select a preset, open the path editor, or submit it.
    Activate,
    Increase,
    Decrease,
    /// Delete: clear the focused sound.
    Clear,
    InputChar(char),
    Backspace,
}

impl Intent for SettingsIntent {}
