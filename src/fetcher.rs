//! Fetch worker: runs requests on the tokio runtime and reports completions
//! back to the UI thread.

use std::sync::mpsc as std_mpsc;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::api::{FetchQuery, FinancialClient, Method};
use crate::ui::app::UiCommand;
use crate::ui::events::AppEvent;

/// Bound on commands queued between the UI and the worker.
pub const COMMAND_CAPACITY: usize = 32;

/// Spawn the worker on `runtime`. It stops once every command sender is gone.
///
/// Each fetch runs in its own task, so a slow response never blocks a newer
/// request; ordering is settled on the UI side by sequence number.
pub fn spawn_fetch_worker(
    runtime: &Handle,
    client: FinancialClient,
    mut commands: mpsc::Receiver<UiCommand>,
    events: std_mpsc::Sender<AppEvent>,
) -> JoinHandle<()> {
    let task_runtime = runtime.clone();
    runtime.spawn(async move {
        while let Some(command) = commands.recv().await {
            match command {
                UiCommand::Fetch { seq, query } => {
                    let client = client.clone();
                    let events = events.clone();
                    task_runtime.spawn(run_fetch(client, seq, query, events));
                }
            }
        }
        tracing::debug!("fetch worker stopped");
    })
}

async fn run_fetch(
    client: FinancialClient,
    seq: u64,
    query: FetchQuery,
    events: std_mpsc::Sender<AppEvent>,
) {
    let result = client.fetch(Method::GET, &query).await;
    if events.send(AppEvent::FetchCompleted { seq, result }).is_err() {
        tracing::trace!(seq, "fetch result dropped (UI gone)");
    }
}
