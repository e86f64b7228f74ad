//! Background worker for startup validation.
//!
//! The scan touches the filesystem once per entry, so it runs off the main
//! flow; results are applied back by whoever called [`spawn`].

use launchgrid_core::types::Container;
use launchgrid_core::validator::{self, RemovedEntry};
use std::sync::mpsc;
use std::thread;
use tracing::warn;

pub struct ValidationOutcome {
    pub containers: Vec<Container>,
    pub removed: Vec<RemovedEntry>,
}

pub struct PendingValidation {
    rx: mpsc::Receiver<ValidationOutcome>,
    // Unvalidated snapshot, returned if the worker dies
    fallback: Vec<Container>,
}

/// Starts validating the containers on a worker thread.
pub fn spawn(containers: Vec<Container>) -> PendingValidation {
    let fallback = containers.clone();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let mut containers = containers;
        let removed = validator::validate(&mut containers);
        let _ = tx.send(ValidationOutcome { containers, removed });
    });

    PendingValidation { rx, fallback }
}

impl PendingValidation {
    /// Blocks until the scan finishes.
    pub fn wait(self) -> ValidationOutcome {
        match self.rx.recv() {
            Ok(outcome) => outcome,
            Err(_) => {
                warn!("validation worker died, keeping entries unvalidated");
                ValidationOutcome {
                    containers: self.fallback,
                    removed: Vec::new(),
                }
            }
        }
    }
}
