//! Scoped position polling.
//!
//! [`PollSubscription::start`] spawns a task that calls a
//! [`PositionFetcher`] on a fixed interval and forwards each outcome on a
//! channel.  The subscription handle owns the task: stopping or dropping it
//! aborts the task, so the timer cannot outlive the mode that started it,
//! whichever way that mode is left.
//!
//! There is no backoff.  A failed fetch is logged, reported as
//! [`PollEvent::Failed`], and the next tick fires on schedule.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use ra_core::GeoPoint;

use crate::{PositionFetcher, PositionFix, SourceError, SourceResult};

/// Poll cadence.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PollConfig {
    pub interval: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self { interval: Duration::from_millis(1000) }
    }
}

/// Outcome of one poll tick.
#[derive(Debug, Clone, PartialEq)]
pub enum PollEvent {
    Fix(GeoPoint),
    NoFix,
    Failed(String),
}

/// Handle to a running poll task.  Dropping it cancels the task.
#[derive(Debug)]
pub struct PollSubscription {
    task: Option<JoinHandle<()>>,
}

impl PollSubscription {
    /// Spawn the poll task on the current tokio runtime.
    ///
    /// The first fetch happens immediately, then every `config.interval`.
    /// The task also ends on its own once every receiver of `events` is gone.
    ///
    /// # Errors
    ///
    /// [`SourceError::ZeroInterval`] for a zero interval.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn start<F: PositionFetcher>(
        mut fetcher: F,
        config:      PollConfig,
        events:      UnboundedSender<PollEvent>,
    ) -> SourceResult<Self> {
        if config.interval.is_zero() {
            return Err(SourceError::ZeroInterval);
        }

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(config.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;

                let event = match fetcher.fetch().await.and_then(|r| r.to_fix()) {
                    Ok(PositionFix::Fix(p)) => PollEvent::Fix(p),
                    Ok(PositionFix::NoFix) => {
                        log::debug!("GPS reports no fix");
                        PollEvent::NoFix
                    }
                    Err(e) => {
                        log::warn!("position poll failed: {e}");
                        PollEvent::Failed(e.to_string())
                    }
                };

                if events.send(event).is_err() {
                    log::debug!("poll receiver closed; stopping poll task");
                    break;
                }
            }
        });

        log::info!("position polling started every {} ms", config.interval.as_millis());
        Ok(Self { task: Some(task) })
    }

    /// `true` while the poll task is still running.
    pub fn is_active(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Cancel polling.  Equivalent to dropping the handle.
    pub fn stop(self) {
        drop(self);
    }
}

impl Drop for PollSubscription {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            log::info!("position polling stopped");
        }
    }
}
