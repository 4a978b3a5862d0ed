//! Display loop background task

use std::time::Duration;

use tokio::{sync::watch, time::MissedTickBehavior};
use tracing::{debug, info};

use crate::{
    clock::Clock,
    controller::PomodoroController,
    state::TimerSnapshot,
    surface::DisplaySurface,
};

/// Poll the controller forever, publishing a snapshot after every countdown tick
///
/// Late timer wakeups are skipped rather than bunched; the controller's own
/// cadences decide what actually fires.
pub async fn display_loop_task<S, C>(
    mut controller: PomodoroController<S, C>,
    poll_period: Duration,
    snapshot_tx: watch::Sender<TimerSnapshot>,
) where
    S: DisplaySurface,
    C: Clock,
{
    info!("Starting display loop, polling every {:?}", poll_period);

    let mut interval = tokio::time::interval(poll_period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    snapshot_tx.send_replace(controller.snapshot());

    loop {
        interval.tick().await;

        let report = controller.poll();
        if !report.ticked {
            continue;
        }

        let snapshot = controller.snapshot();
        debug!("Tick: {} {} left", snapshot.label, snapshot.display);
        snapshot_tx.send_replace(snapshot);
    }
}
