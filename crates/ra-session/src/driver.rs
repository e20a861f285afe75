//! `Driver` — couples a [`Session`] to a poll subscription.
//!
//! Entering GPS mode starts polling; leaving it drops the subscription,
//! which cancels the task, and discards anything it had already queued so a
//! stale fix can never land after a manual position.

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use ra_source::{PollConfig, PollEvent, PollSubscription, PositionFetcher};

use crate::{AnnouncementSink, Session, SessionResult, SourceMode};

pub struct Driver<F: PositionFetcher + Clone> {
    session:      Session,
    fetcher:      F,
    poll:         PollConfig,
    subscription: Option<PollSubscription>,
    tx:           UnboundedSender<PollEvent>,
    rx:           UnboundedReceiver<PollEvent>,
}

impl<F: PositionFetcher + Clone> Driver<F> {
    /// Wrap `session`.  No polling happens until [`set_mode`][Self::set_mode]
    /// selects GPS, even if the session already reports GPS mode.
    pub fn new(session: Session, fetcher: F, poll: PollConfig) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { session, fetcher, poll, subscription: None, tx, rx }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn into_session(self) -> Session {
        self.session
    }

    /// `true` while a poll subscription is held and its task is running.
    pub fn is_polling(&self) -> bool {
        self.subscription.as_ref().is_some_and(PollSubscription::is_active)
    }

    /// Switch source mode, acquiring or releasing the poll subscription.
    ///
    /// Each entry into GPS mode polls a fresh clone of the fetcher.
    ///
    /// # Errors
    ///
    /// Propagates [`PollSubscription::start`] errors; the mode is left
    /// unchanged.
    ///
    /// # Panics
    ///
    /// Entering GPS mode outside a tokio runtime panics.
    pub fn set_mode(&mut self, mode: SourceMode) -> SessionResult<()> {
        match mode {
            SourceMode::Gps => {
                if self.subscription.is_none() {
                    let sub = PollSubscription::start(self.fetcher.clone(), self.poll, self.tx.clone())?;
                    self.subscription = Some(sub);
                }
            }
            SourceMode::Demo => {
                if let Some(sub) = self.subscription.take() {
                    sub.stop();
                }
                let mut stale = 0usize;
                while self.rx.try_recv().is_ok() {
                    stale += 1;
                }
                if stale > 0 {
                    log::debug!("discarded {stale} queued poll event(s)");
                }
            }
        }
        self.session.set_mode(mode);
        Ok(())
    }

    /// Wait for the next poll outcome and apply it to the session.
    ///
    /// Returns `None` immediately when not polling.
    pub async fn next_poll<S: AnnouncementSink>(&mut self, sink: &mut S) -> Option<PollEvent> {
        self.subscription.as_ref()?;
        let event = self.rx.recv().await?;
        self.session.apply_poll_event(&event, sink);
        Some(event)
    }
}
