use crate::breath::{resolve_next, select_initial, Cue, Phase, PhaseDurations, Resolution};
use crate::mvi::Reducer;
use crate::session::intent::SessionIntent;
use crate::session::state::{BreathingModel, SessionState};

pub struct SessionReducer;

impl Reducer for SessionReducer {
    type Model = BreathingModel;
    type Intent = SessionIntent;
    type Effect = Cue;

    fn reduce(model: Self::Model, intent: Self::Intent, cues: &mut Vec<Cue>) -> Self::Model {
        let BreathingModel {
            mut durations,
            mut session,
        } = model;

        match intent {
            SessionIntent::Start => start(&mut session, &durations, cues),
            SessionIntent::Pause => pause(&mut session, cues),
            SessionIntent::StartPause => {
                if session.running {
                    pause(&mut session, cues);
                } else {
                    start(&mut session, &durations, cues);
                }
            }
            SessionIntent::Reset => {
                session = SessionState::idle(&durations);
                cues.push(Cue::ExerciseReset);
            }
            SessionIntent::Tick => {
                if session.running && session.remaining > 0 {
                    session.remaining -= 1;
                }
            }
            SessionIntent::Advance => {
                if session.is_transitioning() {
                    let resolution = resolve_next(session.phase, &durations, cues);
                    apply(&mut session, resolution);
                }
            }
            SessionIntent::SetDuration { field, value } => {
                if !session.running {
                    durations.set(field, value);
                    if session.phase.is_idle() && field.phase() == Phase::Inhale {
                        session.remaining = durations.inhale;
                    }
                }
            }
            SessionIntent::SelectPreset {
                durations: selected,
                preset,
            } => {
                if !session.running {
                    durations = selected;
                    if session.phase.is_idle() {
                        session.remaining = durations.inhale;
                    }
                    cues.push(Cue::PresetSelected { preset });
                }
            }
        }

        BreathingModel { durations, session }
    }
}

fn start(session: &mut SessionState, durations: &PhaseDurations, cues: &mut Vec<Cue>) {
    if session.running {
        return;
    }
    session.running = true;

    if session.phase.is_idle() {
        session.cycle_count = 0;
        cues.push(Cue::ExerciseStart);
        let resolution = select_initial(durations, cues);
        apply(session, resolution);
        return;
    }

    cues.push(Cue::ExerciseResume);
    // Paused exactly on a phase boundary: resolve now instead of waiting.
    if session.remaining == 0 {
        let resolution = resolve_next(session.phase, durations, cues);
        apply(session, resolution);
    }
}

fn pause(session: &mut SessionState, cues: &mut Vec<Cue>) {
    if !session.running {
        return;
    }
    session.running = false;
    cues.push(Cue::ExercisePause);
}

fn apply(session: &mut SessionState, resolution: Resolution) {
    session.phase = resolution.phase;
    session.remaining = resolution.remaining;
    if resolution.cycle_completed {
        session.cycle_count += 1;
    }
}
