use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    preset: Option<&'a str>,
    pattern: String,
}

impl<'a> Header<'a> {
    /// `preset` is the name of the preset matching the active durations.
    pub fn new(preset: Option<&'a str>, pattern: String) -> Self {
        Self { preset, pattern }
    }

    pub fn widget(&self) -> Paragraph<'a> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let line = Line::from(vec![
            Span::styled(
                "  Breathwork",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(self.preset.unwrap_or("Custom").to_string(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(self.pattern.clone(), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
