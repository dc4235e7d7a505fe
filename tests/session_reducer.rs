mod common;

use breathwork::breath::{Cue, DurationField, Phase};
use breathwork::session::{BreathingModel, SessionIntent, SessionState};
use common::{durations, reduce, reduce_all};

fn ticks(n: usize) -> impl Iterator<Item = SessionIntent> {
    std::iter::repeat(SessionIntent::Tick).take(n)
}

// -- Start / resume -----------------------------------------------------------

#[test]
fn start_from_idle_enters_first_nonzero_phase() {
    let model = BreathingModel::new(durations(0, 0, 5, 0));
    let (model, cues) = reduce(model, SessionIntent::Start);

    assert_eq!(model.session.phase, Phase::Exhale);
    assert_eq!(model.session.remaining, 5);
    assert!(model.session.running);
    assert_eq!(model.session.cycle_count, 0);
    assert_eq!(
        cues,
        vec![
            Cue::ExerciseStart,
            Cue::PhaseSkipped(Phase::Inhale),
            Cue::PhaseSkipped(Phase::HoldIn),
            Cue::PhaseStart(Phase::Exhale),
        ]
    );
}

#[test]
fn start_while_running_is_a_noop() {
    let (model, _) = reduce(BreathingModel::new(durations(4, 4, 4, 4)), SessionIntent::Start);
    let (again, cues) = reduce(model.clone(), SessionIntent::Start);
    assert_eq!(again, model);
    assert!(cues.is_empty());
}

#[test]
fn pause_while_stopped_is_a_noop() {
    let model = BreathingModel::new(durations(4, 4, 4, 4));
    let (after, cues) = reduce(model.clone(), SessionIntent::Pause);
    assert_eq!(after, model);
    assert!(cues.is_empty());
}

#[test]
fn start_pause_toggles() {
    let model = BreathingModel::new(durations(4, 4, 4, 4));
    let (model, _) = reduce(model, SessionIntent::StartPause);
    assert!(model.session.running);
    let (model, cues) = reduce(model, SessionIntent::StartPause);
    assert!(!model.session.running);
    assert_eq!(cues, vec![Cue::ExercisePause]);
}

// -- Countdown ----------------------------------------------------------------

#[test]
fn box_with_skipped_holds_walkthrough() {
    let model = BreathingModel::new(durations(4, 0, 6, 0));
    let (model, cues) = reduce(model, SessionIntent::Start);
    assert_eq!((model.session.phase, model.session.remaining), (Phase::Inhale, 4));
    assert_eq!(cues, vec![Cue::ExerciseStart, Cue::PhaseStart(Phase::Inhale)]);

    let (model, cues) = reduce_all(model, ticks(4));
    assert_eq!(model.session.remaining, 0);
    assert!(model.session.is_transitioning());
    assert!(cues.is_empty());

    let (model, cues) = reduce(model, SessionIntent::Advance);
    assert_eq!((model.session.phase, model.session.remaining), (Phase::Exhale, 6));
    assert_eq!(
        cues,
        vec![Cue::PhaseSkipped(Phase::HoldIn), Cue::PhaseStart(Phase::Exhale)]
    );
    assert_eq!(model.session.cycle_count, 0);

    let (model, _) = reduce_all(model, ticks(6));
    let (model, cues) = reduce(model, SessionIntent::Advance);
    assert_eq!((model.session.phase, model.session.remaining), (Phase::Inhale, 4));
    assert_eq!(
        cues,
        vec![Cue::PhaseSkipped(Phase::HoldOut), Cue::PhaseStart(Phase::Inhale)]
    );
    assert_eq!(model.session.cycle_count, 1);
}

#[test]
fn tick_does_nothing_when_stopped_or_at_zero() {
    let model = BreathingModel::new(durations(4, 4, 4, 4));
    let (after, _) = reduce(model.clone(), SessionIntent::Tick);
    assert_eq!(after, model);

    let (running, _) = reduce(model, SessionIntent::Start);
    let (zero, _) = reduce_all(running, ticks(10));
    assert_eq!(zero.session.remaining, 0);
    assert_eq!(zero.session.phase, Phase::Inhale);
}

#[test]
fn advance_only_applies_while_transitioning() {
    let (model, _) = reduce(BreathingModel::new(durations(4, 4, 4, 4)), SessionIntent::Start);
    let (after, cues) = reduce(model.clone(), SessionIntent::Advance);
    assert_eq!(after, model);
    assert!(cues.is_empty());
}

#[test]
fn cycle_counts_once_per_rotation() {
    let model = BreathingModel::new(durations(1, 1, 1, 1));
    let (mut model, _) = reduce(model, SessionIntent::Start);
    for _ in 0..12 {
        let (next, _) = reduce_all(model, [SessionIntent::Tick, SessionIntent::Advance]);
        model = next;
    }
    assert_eq!(model.session.cycle_count, 3);
    assert_eq!(model.session.phase, Phase::Inhale);
}

#[test]
fn nonzero_duration_reaches_positive_remaining() {
    for mask in 1u32..16 {
        let d = durations(mask & 1, (mask >> 1) & 1, (mask >> 2) & 1, (mask >> 3) & 1);
        let (model, _) = reduce(BreathingModel::new(d), SessionIntent::Start);
        assert!(model.session.remaining > 0, "mask {mask:04b}");

        let (drained, _) = reduce(model, SessionIntent::Tick);
        let (next, _) = reduce(drained, SessionIntent::Advance);
        assert!(next.session.remaining > 0, "mask {mask:04b}");
    }
}

#[test]
fn all_zero_durations_cycle_without_stalling() {
    let model = BreathingModel::new(durations(0, 0, 0, 0));
    let (model, cues) = reduce(model, SessionIntent::Start);
    assert_eq!((model.session.phase, model.session.remaining), (Phase::Inhale, 0));
    assert_eq!(model.session.cycle_count, 0);
    assert_eq!(
        cues,
        vec![
            Cue::ExerciseStart,
            Cue::PhaseSkipped(Phase::Inhale),
            Cue::PhaseSkipped(Phase::HoldIn),
            Cue::PhaseSkipped(Phase::Exhale),
            Cue::PhaseSkipped(Phase::HoldOut),
            Cue::PhaseStart(Phase::Inhale),
        ]
    );

    let (model, cues) = reduce(model, SessionIntent::Advance);
    assert_eq!((model.session.phase, model.session.remaining), (Phase::Inhale, 0));
    assert_eq!(model.session.cycle_count, 1);
    assert!(cues.iter().all(|cue| matches!(cue, Cue::PhaseSkipped(_))));
    assert!(model.session.is_transitioning());
}

// -- Pause / reset ------------------------------------------------------------

#[test]
fn pause_after_one_tick_keeps_position() {
    let model = BreathingModel::new(durations(4, 7, 8, 0));
    let (model, _) = reduce_all(model, [SessionIntent::Start, SessionIntent::Tick]);
    let (paused, cues) = reduce(model, SessionIntent::Pause);

    assert_eq!(paused.session.phase, Phase::Inhale);
    assert_eq!(paused.session.remaining, 3);
    assert!(paused.session.is_paused());
    assert_eq!(cues, vec![Cue::ExercisePause]);

    let (resumed, cues) = reduce(paused, SessionIntent::Start);
    assert_eq!(resumed.session.phase, Phase::Inhale);
    assert_eq!(resumed.session.remaining, 3);
    assert!(resumed.session.running);
    assert_eq!(cues, vec![Cue::ExerciseResume]);
}

#[test]
fn resume_on_phase_boundary_resolves_immediately() {
    let model = BreathingModel::new(durations(1, 2, 3, 4));
    let (model, _) = reduce_all(
        model,
        [SessionIntent::Start, SessionIntent::Tick, SessionIntent::Pause],
    );
    assert_eq!(model.session.remaining, 0);

    let (resumed, cues) = reduce(model, SessionIntent::Start);
    assert_eq!((resumed.session.phase, resumed.session.remaining), (Phase::HoldIn, 2));
    assert_eq!(cues, vec![Cue::ExerciseResume, Cue::PhaseStart(Phase::HoldIn)]);
}

#[test]
fn reset_from_any_state_returns_to_idle() {
    let d = durations(4, 7, 8, 0);
    let starts = [
        BreathingModel::new(d),
        reduce(BreathingModel::new(d), SessionIntent::Start).0,
        reduce_all(
            BreathingModel::new(d),
            [SessionIntent::Start, SessionIntent::Tick, SessionIntent::Pause],
        )
        .0,
    ];
    for model in starts {
        let (reset, cues) = reduce(model, SessionIntent::Reset);
        assert_eq!(
            reset.session,
            SessionState {
                phase: Phase::Idle,
                remaining: 4,
                running: false,
                cycle_count: 0,
            }
        );
        assert_eq!(cues, vec![Cue::ExerciseReset]);
    }
}

// -- Durations and presets ----------------------------------------------------

#[test]
fn set_duration_clamps_and_syncs_idle_inhale() {
    let model = BreathingModel::new(durations(4, 4, 6, 2));
    let (model, cues) = reduce(
        model,
        SessionIntent::SetDuration {
            field: DurationField::Inhale,
            value: 9,
        },
    );
    assert_eq!(model.durations.inhale, 9);
    assert_eq!(model.session.remaining, 9);
    assert!(cues.is_empty());

    let (model, _) = reduce(
        model,
        SessionIntent::SetDuration {
            field: DurationField::HoldOut,
            value: -3,
        },
    );
    assert_eq!(model.durations.hold_out, 0);
    assert_eq!(model.session.remaining, 9);
}

#[test]
fn edits_are_ignored_while_running() {
    let (running, _) = reduce(BreathingModel::new(durations(4, 4, 6, 2)), SessionIntent::Start);
    let (after, cues) = reduce_all(
        running.clone(),
        [
            SessionIntent::SetDuration {
                field: DurationField::Exhale,
                value: 10,
            },
            SessionIntent::SelectPreset {
                durations: durations(4, 7, 8, 0),
                preset: Some("anti-stress".to_string()),
            },
        ],
    );
    assert_eq!(after, running);
    assert!(cues.is_empty());
}

#[test]
fn select_preset_while_paused_keeps_position() {
    let model = BreathingModel::new(durations(4, 4, 6, 2));
    let (paused, _) = reduce_all(
        model,
        [SessionIntent::Start, SessionIntent::Tick, SessionIntent::Pause],
    );
    let (after, cues) = reduce(
        paused,
        SessionIntent::SelectPreset {
            durations: durations(5, 5, 5, 5),
            preset: Some("deep-calm".to_string()),
        },
    );
    assert_eq!(after.durations, durations(5, 5, 5, 5));
    assert_eq!((after.session.phase, after.session.remaining), (Phase::Inhale, 3));
    assert_eq!(
        cues,
        vec![Cue::PresetSelected {
            preset: Some("deep-calm".to_string())
        }]
    );
}

#[test]
fn select_preset_while_idle_syncs_remaining() {
    let (model, _) = reduce(
        BreathingModel::new(durations(4, 4, 6, 2)),
        SessionIntent::SelectPreset {
            durations: durations(3, 0, 3, 0),
            preset: None,
        },
    );
    assert_eq!(model.session.phase, Phase::Idle);
    assert_eq!(model.session.remaining, 3);
}
