use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use super::evaluator::Classification;
use super::reading::Reading;

/// Poll loop lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchedulerState {
    /// Waiting for the first tick
    Idle,
    /// A cycle is reading and evaluating
    Polling,
    /// Last cycle published; waiting for the next tick
    Published,
    Stopped,
}

/// Latest comfort verdict as seen by presentation code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublishedState {
    /// Completed poll cycles; 0 until the first one finishes
    pub cycle: u64,
    pub produced_at: Option<DateTime<Utc>>,
    pub classification: Option<Classification>,
    /// Values behind the verdict, absent during outages
    pub reading: Option<Reading>,
}

impl PublishedState {
    /// Initial "no data yet" state
    pub fn pending() -> Self {
        Self {
            cycle: 0,
            produced_at: None,
            classification: None,
            reading: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.classification.is_none()
    }
}

impl Default for PublishedState {
    fn default() -> Self {
        Self::pending()
    }
}

/// Cloneable, non-blocking view of the published state.
#[derive(Debug, Clone)]
pub struct StatusHandle {
    status_rx: watch::Receiver<Arc<PublishedState>>,
    state_rx: watch::Receiver<SchedulerState>,
}

impl StatusHandle {
    pub(crate) fn new(
        status_rx: watch::Receiver<Arc<PublishedState>>,
        state_rx: watch::Receiver<SchedulerState>,
    ) -> Self {
        Self {
            status_rx,
            state_rx,
        }
    }

    /// Most recent result; the snapshot is swapped whole, never partially.
    pub fn latest(&self) -> Arc<PublishedState> {
        self.status_rx.borrow().clone()
    }

    pub fn scheduler_state(&self) -> SchedulerState {
        *self.state_rx.borrow()
    }

    /// Wait for the next published cycle. Returns `None` once the scheduler is gone.
    pub async fn changed(&mut self) -> Option<Arc<PublishedState>> {
        self.status_rx.changed().await.ok()?;
        Some(self.status_rx.borrow_and_update().clone())
    }
}
