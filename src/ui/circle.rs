//! Breathing circle: grows through inhale, shrinks through exhale.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Circle};
use ratatui::widgets::Widget;

use crate::breath::Phase;
use crate::session::BreathingModel;
use crate::ui::theme::{CIRCLE_ACTIVE, CIRCLE_IDLE};

pub const MIN_SCALE: f64 = 0.6;
pub const MAX_SCALE: f64 = 1.0;

/// Relative circle size for the model, in `MIN_SCALE..=MAX_SCALE`.
///
/// Paused sessions keep the size of the phase they stopped in. A zero-length
/// inhale counts as fully inhaled and a zero-length exhale as fully exhaled.
pub fn circle_scale(model: &BreathingModel) -> f64 {
    let session = &model.session;
    let progress = |elapsed: u32, total: u32| {
        if total == 0 {
            1.0
        } else {
            f64::from(elapsed.min(total)) / f64::from(total)
        }
    };

    let scale = match session.phase {
        Phase::Idle | Phase::HoldOut => MIN_SCALE,
        Phase::HoldIn => MAX_SCALE,
        Phase::Inhale => {
            let total = model.durations.inhale;
            let elapsed = total.saturating_sub(session.remaining);
            MIN_SCALE + (MAX_SCALE - MIN_SCALE) * progress(elapsed, total)
        }
        Phase::Exhale => {
            let total = model.durations.exhale;
            let left = if total == 0 {
                0.0
            } else {
                1.0 - progress(total.saturating_sub(session.remaining), total)
            };
            MIN_SCALE + (MAX_SCALE - MIN_SCALE) * left
        }
    };
    scale.clamp(MIN_SCALE, MAX_SCALE)
}

pub struct BreathingCircle {
    scale: f64,
    active: bool,
}

impl BreathingCircle {
    pub fn new(model: &BreathingModel) -> Self {
        Self {
            scale: circle_scale(model),
            active: !model.session.phase.is_idle(),
        }
    }
}

impl Widget for BreathingCircle {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        // Cells are about twice as tall as wide: measure both axes in cell
        // widths so the circle stays round.
        let half_width = f64::from(area.width) / 2.0;
        let half_height = f64::from(area.height);
        let radius = half_width.min(half_height) * 0.9 * self.scale;
        let color = if self.active { CIRCLE_ACTIVE } else { CIRCLE_IDLE };

        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([-half_width, half_width])
            .y_bounds([-half_height, half_height])
            .paint(|ctx| {
                ctx.draw(&Circle {
                    x: 0.0,
                    y: 0.0,
                    radius,
                    color,
                });
            })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breath::PhaseDurations;
    use crate::session::SessionState;

    fn model(phase: Phase, remaining: u32, running: bool) -> BreathingModel {
        BreathingModel {
            durations: PhaseDurations::new(4, 4, 8, 2),
            session: SessionState {
                phase,
                remaining,
                running,
                cycle_count: 0,
            },
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "{actual} != {expected}");
    }

    #[test]
    fn idle_is_minimal() {
        assert_close(circle_scale(&model(Phase::Idle, 4, false)), MIN_SCALE);
    }

    #[test]
    fn inhale_grows_to_full() {
        assert_close(circle_scale(&model(Phase::Inhale, 4, true)), 0.6);
        assert_close(circle_scale(&model(Phase::Inhale, 2, true)), 0.8);
        assert_close(circle_scale(&model(Phase::Inhale, 0, true)), 1.0);
    }

    #[test]
    fn holds_are_full_then_minimal() {
        assert_close(circle_scale(&model(Phase::HoldIn, 3, true)), MAX_SCALE);
        assert_close(circle_scale(&model(Phase::HoldOut, 1, true)), MIN_SCALE);
    }

    #[test]
    fn exhale_shrinks() {
        assert_close(circle_scale(&model(Phase::Exhale, 8, true)), 1.0);
        assert_close(circle_scale(&model(Phase::Exhale, 4, true)), 0.8);
        assert_close(circle_scale(&model(Phase::Exhale, 0, true)), 0.6);
    }

    #[test]
    fn paused_keeps_phase_size() {
        assert_close(circle_scale(&model(Phase::Inhale, 2, false)), 0.8);
    }

    #[test]
    fn zero_length_phases_stay_in_range() {
        let mut m = model(Phase::Inhale, 0, true);
        m.durations = PhaseDurations::new(0, 0, 0, 0);
        assert_close(circle_scale(&m), MAX_SCALE);
        m.session.phase = Phase::Exhale;
        assert_close(circle_scale(&m), MIN_SCALE);
    }
}
