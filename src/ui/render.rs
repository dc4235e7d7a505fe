use crate::ui::app::App;
use crate::ui::circle::BreathingCircle;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{body_regions, centered_rect_by_size, layout_regions};
use crate::ui::settings::SettingsRow;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, DISABLED_TEXT, HEADER_TEXT, POPUP_BORDER, STATUS_ERROR, STATUS_OK,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let model = app.model();

    let header_widget = Header::new(
        app.active_preset().map(|preset| preset.name.as_str()),
        model.durations.to_string(),
    );
    frame.render_widget(header_widget.widget(), header);
    frame.render_widget(Clear, body);
    draw_session(frame, app, body);

    let footer_widget = Footer::new(app.settings().is_visible());
    frame.render_widget(footer_widget.widget(footer), footer);

    if app.settings().is_visible() {
        draw_settings(frame, app, body);
    }
}

fn draw_session(frame: &mut Frame<'_>, app: &App, body: Rect) {
    let model = app.model();
    let session = &model.session;
    let (instruction_area, circle_area, status_area) = body_regions(body);

    let instruction = Paragraph::new(Line::from(Span::styled(
        session.phase.instruction(),
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::NONE));
    frame.render_widget(instruction, instruction_area);

    frame.render_widget(BreathingCircle::new(model), circle_area);

    let mut lines = Vec::new();
    if session.running && !session.phase.is_idle() {
        lines.push(Line::from(Span::styled(
            format!("{}s", session.remaining),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(format!("Cycles: {}", session.cycle_count)));
    } else if session.is_paused() {
        lines.push(Line::from(Span::styled(
            format!("Paused · {}s left", session.remaining),
            Style::default().fg(DISABLED_TEXT),
        )));
    }
    if let Some(status) = app.status() {
        lines.push(Line::from(Span::styled(
            status.to_string(),
            Style::default().fg(STATUS_ERROR),
        )));
    }
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        status_area,
    );
}

fn draw_settings(frame: &mut Frame<'_>, app: &App, body: Rect) {
    let settings = app.settings();
    let catalog = app.catalog();
    let durations = &app.model().durations;
    let active = app.active_preset().map(|preset| preset.id.as_str());
    let focused = settings.focused_row();
    let locked = settings.is_locked();

    let mut lines = Vec::new();
    let section = |title: &'static str| {
        Line::from(Span::styled(
            title,
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
    };

    let rows = SettingsRow::all(catalog.len());
    for (index, row) in rows.iter().enumerate() {
        let first_of_section = index == 0
            || std::mem::discriminant(row) != std::mem::discriminant(&rows[index - 1]);
        if first_of_section {
            if index > 0 {
                lines.push(Line::from(""));
            }
            lines.push(section(match row {
                SettingsRow::Preset(_) => "Presets",
                SettingsRow::Duration(_) => "Durations",
                SettingsRow::Sound(_) if app.sound_enabled() => "Sounds",
                SettingsRow::Sound(_) => "Sounds (muted)",
            }));
        }

        let (text, marker) = match row {
            SettingsRow::Preset(i) => match catalog.get(*i) {
                Some(preset) => (
                    format!("{:<24} {}", preset.name, preset.durations),
                    active == Some(preset.id.as_str()),
                ),
                None => continue,
            },
            SettingsRow::Duration(field) => (
                format!("{:<24} ‹ {:>3}s ›", field.phase().label(), durations.field(*field)),
                false,
            ),
            SettingsRow::Sound(phase) => (
                format!(
                    "{:<24} {}",
                    phase.label(),
                    app.sound_file(*phase).unwrap_or_else(|| "(none)".to_string())
                ),
                false,
            ),
        };

        let mut style = Style::default().fg(if locked { DISABLED_TEXT } else { HEADER_TEXT });
        if focused == Some(*row) {
            style = style.bg(ACTIVE_HIGHLIGHT);
        }
        let bullet = if marker {
            Span::styled(" ● ", Style::default().fg(STATUS_OK))
        } else {
            Span::raw("   ")
        };
        lines.push(Line::from(vec![bullet, Span::styled(text, style)]).style(style));
    }

    if let Some(editor) = settings.editor() {
        lines.push(Line::from(""));
        lines.push(Line::from(format!(
            "{} sound path: {}_",
            editor.phase.label(),
            editor.buffer
        )));
        lines.push(Line::from("Enter: Assign  Esc: Cancel"));
    } else if locked {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Pause the session to change settings.",
            Style::default().fg(DISABLED_TEXT),
        )));
    }

    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let popup_width = content_width.saturating_add(4).max(48);
    let popup_height = lines.len().saturating_add(2) as u16;
    let area = centered_rect_by_size(body, popup_width, popup_height);

    frame.render_widget(Clear, area);
    let popup = Block::default()
        .title(Span::styled(" Settings ", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(popup), area);
}
