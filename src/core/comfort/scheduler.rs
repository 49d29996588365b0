//! Polling scheduler.
//!
//! Runs read -> evaluate -> publish on a fixed cadence on its own Tokio
//! runtime. At most one cycle is in flight; a slow cycle delays the next tick
//! instead of overlapping with it.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

use crate::core::config::MonitorConfig;
use crate::error::{MonitorError, Result};

use super::evaluator::evaluate;
use super::reader::SensorReader;
use super::state::{PublishedState, SchedulerState, StatusHandle};
use super::thresholds::Thresholds;

/// Extra time granted to an in-flight cycle on shutdown
const SHUTDOWN_GRACE: Duration = Duration::from_secs(1);

/// Owns the poll loop and the runtime it runs on.
pub struct PollingScheduler {
    handle: StatusHandle,
    shutdown_tx: broadcast::Sender<()>,
    loop_handle: Option<JoinHandle<()>>,
    cycle_budget: Duration,
    runtime: tokio::runtime::Runtime,
}

impl PollingScheduler {
    /// Validate the configuration, build the reader and start polling.
    pub fn start(config: &MonitorConfig) -> Result<Self> {
        config.validate()?;
        let reader = SensorReader::from_config(config)?;

        log::info!(
            "Starting comfort monitor: reader = {}, interval = {}s",
            reader.describe(),
            config.poll_interval_secs
        );

        Self::with_reader(reader, config.thresholds.clone(), config.poll_interval())
    }

    /// Start polling with an already constructed reader.
    pub fn with_reader(
        reader: SensorReader,
        thresholds: Thresholds,
        period: Duration,
    ) -> Result<Self> {
        if period.is_zero() {
            return Err(MonitorError::config("poll interval must be greater than zero"));
        }

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .thread_name("comfort-poller")
            .build()?;

        let (status_tx, status_rx) = watch::channel(Arc::new(PublishedState::pending()));
        let (state_tx, state_rx) = watch::channel(SchedulerState::Idle);
        let (shutdown_tx, shutdown_rx) = broadcast::channel::<()>(1);

        let loop_handle = runtime.spawn(run_poll_loop(
            reader,
            thresholds,
            period,
            status_tx,
            state_tx,
            shutdown_rx,
        ));

        Ok(Self {
            handle: StatusHandle::new(status_rx, state_rx),
            shutdown_tx,
            loop_handle: Some(loop_handle),
            cycle_budget: period,
            runtime,
        })
    }

    /// Reader for presentation code
    pub fn handle(&self) -> StatusHandle {
        self.handle.clone()
    }

    pub fn latest(&self) -> Arc<PublishedState> {
        self.handle.latest()
    }

    pub fn state(&self) -> SchedulerState {
        self.handle.scheduler_state()
    }

    /// Block the calling (non-async) thread until the next cycle is published.
    pub fn wait_for_update(&mut self) -> Option<Arc<PublishedState>> {
        self.runtime.block_on(self.handle.changed())
    }

    /// Stop polling; the last published state stays readable.
    pub fn shutdown(mut self) -> Arc<PublishedState> {
        log::info!("Stopping comfort monitor");
        let _ = self.shutdown_tx.send(());

        if let Some(loop_handle) = self.loop_handle.take() {
            let budget = self.cycle_budget + SHUTDOWN_GRACE;
            let finished = self
                .runtime
                .block_on(async { tokio::time::timeout(budget, loop_handle).await });
            if finished.is_err() {
                log::warn!("Poll loop did not stop within {:?}; abandoning it", budget);
            }
        }

        self.handle.latest()
    }
}

/// Run one poll cycle and build the state it publishes.
pub async fn poll_once(reader: &mut SensorReader, thresholds: &Thresholds) -> PublishedState {
    run_cycle(reader, thresholds, 1).await
}

async fn run_cycle(reader: &mut SensorReader, thresholds: &Thresholds, cycle: u64) -> PublishedState {
    let outcome = reader.read().await;
    let classification = evaluate(&outcome, thresholds);

    PublishedState {
        cycle,
        produced_at: Some(chrono::Utc::now()),
        reading: outcome.reading().copied(),
        classification: Some(classification),
    }
}

/// Poll loop body; returns after a shutdown signal.
pub async fn run_poll_loop(
    mut reader: SensorReader,
    thresholds: Thresholds,
    period: Duration,
    status_tx: watch::Sender<Arc<PublishedState>>,
    state_tx: watch::Sender<SchedulerState>,
    mut shutdown: broadcast::Receiver<()>,
) {
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut cycle: u64 = 0;

    loop {
        tokio::select! {
            biased;

            _ = shutdown.recv() => {
                break;
            }
            _ = ticker.tick() => {
                state_tx.send_replace(SchedulerState::Polling);
                cycle += 1;
                log::debug!("Poll cycle {} started", cycle);

                let published = run_cycle(&mut reader, &thresholds, cycle).await;
                if let Some(classification) = &published.classification {
                    log::debug!(
                        "Poll cycle {} finished: {:?} ({})",
                        cycle,
                        classification.severity,
                        classification.status_text
                    );
                }

                // Readers see either the previous snapshot or this one, never a mix
                status_tx.send_replace(Arc::new(published));
                // Held until the next tick starts another cycle
                state_tx.send_replace(SchedulerState::Published);
            }
        }
    }

    state_tx.send_replace(SchedulerState::Stopped);
    log::info!("Poll loop stopped after {} cycles", cycle);
}
