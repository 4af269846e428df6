//! Runs search requests off the UI thread.
//!
//! Commands arrive over a tokio channel; each request runs as its own task
//! so a slow search never delays a newer one. Outcomes go back to the UI
//! loop tagged with their sequence number, and the session drops any that
//! are stale.

use std::sync::mpsc;
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc as tokio_mpsc;
use tokio::task::JoinHandle;

use crate::search::SearchService;
use crate::ui::app::{UiCommand, UiCommandSender};
use crate::ui::events::AppEvent;

const COMMAND_CHANNEL_SIZE: usize = 32;

pub struct SearchWorker {
    sender: UiCommandSender,
    task: JoinHandle<()>,
}

impl SearchWorker {
    pub fn spawn(
        runtime: &Handle,
        service: Arc<dyn SearchService>,
        events: mpsc::Sender<AppEvent>,
    ) -> Self {
        let (sender, mut receiver) = tokio_mpsc::channel::<UiCommand>(COMMAND_CHANNEL_SIZE);

        let task = runtime.spawn(async move {
            while let Some(command) = receiver.recv().await {
                match command {
                    UiCommand::Search { seq, query } => {
                        let service = Arc::clone(&service);
                        let events = events.clone();
                        tokio::spawn(async move {
                            let outcome = service.search(&query).await;
                            if events.send(AppEvent::SearchResolved { seq, outcome }).is_err() {
                                tracing::trace!(seq, "search outcome dropped (UI gone)");
                            }
                        });
                    }
                }
            }
        });

        Self { sender, task }
    }

    pub fn sender(&self) -> UiCommandSender {
        self.sender.clone()
    }

    /// Stop accepting commands. In-flight requests are abandoned.
    pub fn shutdown(self) {
        self.task.abort();
    }
}
