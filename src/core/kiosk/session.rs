//! Event-queue driver for one kiosk session.
//!
//! All transitions run on a single action queue: user gestures and the
//! completion events of asynchronous work (speech finished, lookup settled)
//! arrive as [`Action`]s and are processed one at a time, so handlers never
//! interleave. Commands returned by the reducer are executed on spawned
//! tasks that feed their completion back into the same queue.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::reducer::{Action, Command, LookupOutcome, reduce};
use super::state::InteractionState;
use crate::core::lookup::{LookupError, LookupResult, LookupService};
use crate::core::speech::SpeechClient;

/// Port to the reservation lookup service.
#[async_trait]
pub trait ReservationLookup: Send + Sync {
    async fn lookup(&self, name: &str) -> Result<LookupResult, LookupError>;
}

#[async_trait]
impl ReservationLookup for LookupService {
    async fn lookup(&self, name: &str) -> Result<LookupResult, LookupError> {
        LookupService::lookup(self, name).await
    }
}

/// One kiosk interaction lifetime, from start gesture to shutdown.
pub struct KioskSession {
    state: InteractionState,
    lookup: Arc<dyn ReservationLookup>,
    speech: Arc<SpeechClient>,
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Action>,
}

impl KioskSession {
    pub fn new(lookup: Arc<dyn ReservationLookup>, speech: Arc<SpeechClient>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            state: InteractionState::new(),
            lookup,
            speech,
            tx,
            rx,
        }
    }

    /// Sender for injecting user actions into the queue.
    pub fn handle(&self) -> mpsc::UnboundedSender<Action> {
        self.tx.clone()
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    /// Apply one action and execute the resulting commands.
    pub fn dispatch(&mut self, action: Action) {
        tracing::debug!("Kiosk action: {:?}", action);
        for command in reduce(&mut self.state, action) {
            self.execute(command);
        }
    }

    /// Receive and dispatch the next queued action. Returns false when all
    /// senders are gone and the queue is drained.
    pub async fn process_next(&mut self) -> bool {
        match self.rx.recv().await {
            Some(action) => {
                self.dispatch(action);
                true
            }
            None => false,
        }
    }

    /// Drive the session until the queue closes.
    pub async fn run(mut self) {
        while self.process_next().await {}
    }

    // In-flight work is never aborted on a screen change; the token carried
    // by the completion action lets the reducer discard stale results.
    fn execute(&self, command: Command) {
        match command {
            Command::Speak { text, token } => {
                let speech = self.speech.clone();
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    speech.speak(&text).await;
                    let _ = tx.send(Action::SpeechFinished { token });
                });
            }
            Command::BeginLookup { name, token } => {
                let lookup = self.lookup.clone();
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    let outcome = match lookup.lookup(&name).await {
                        Ok(LookupResult::Found(record)) => LookupOutcome::Found(record),
                        Ok(LookupResult::NotFound) => LookupOutcome::NotFound,
                        Err(e) => {
                            tracing::error!("Reservation lookup failed: {}", e);
                            LookupOutcome::Failed
                        }
                    };
                    let _ = tx.send(Action::LookupSettled { token, outcome });
                });
            }
        }
    }
}
