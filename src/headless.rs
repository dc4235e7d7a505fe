//! Line-oriented runner for terminals without a UI.

use std::io::{self, Write};

use tokio::time::Instant;

use crate::breath::Phase;
use crate::session::{BreathingModel, SessionController};

/// How a headless run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub cycles: u64,
    pub interrupted: bool,
}

fn phase_line(model: &BreathingModel) -> String {
    let session = &model.session;
    format!(
        "[cycle {}] {} {}s",
        session.cycle_count + 1,
        session.phase.instruction(),
        session.remaining
    )
}

/// Run a session until `max_cycles` cycles complete or Ctrl+C, printing one
/// line per phase change.
///
/// The session is paused on the way out.
pub async fn run<W: Write>(
    controller: &SessionController,
    max_cycles: Option<u64>,
    out: &mut W,
) -> io::Result<Summary> {
    let mut updates = controller.subscribe();
    let started = Instant::now();
    let mut last: Option<(Phase, u64)> = None;
    let mut interrupted = false;

    let mut model = controller.start();
    updates.mark_unchanged();

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        let session = model.session;
        if max_cycles.is_some_and(|max| session.cycle_count >= max) {
            break;
        }
        if !session.running {
            break;
        }
        if last != Some((session.phase, session.cycle_count)) {
            last = Some((session.phase, session.cycle_count));
            writeln!(out, "{}", phase_line(&model))?;
            out.flush()?;
        }

        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                model = updates.borrow_and_update().clone();
            }
            _ = &mut ctrl_c => {
                interrupted = true;
                break;
            }
        }
    }

    let model = controller.pause();
    let cycles = model.session.cycle_count;
    writeln!(
        out,
        "Stopped after {} cycle{} in {}s.",
        cycles,
        if cycles == 1 { "" } else { "s" },
        started.elapsed().as_secs()
    )?;
    out.flush()?;
    tracing::info!(cycles, interrupted, "headless session finished");

    Ok(Summary {
        cycles,
        interrupted,
    })
}
