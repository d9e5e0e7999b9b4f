//! TicketFlowController processor.
//!
//! The TicketFlowController is responsible for:
//! - Receiving `TicketCommand` from the page
//! - Holding the single active selection and its form input
//! - Validating the email before anything goes over the wire
//! - Requesting the redirect target and navigating to it after a short delay
//! - Emitting `TicketNotice` for everything the visitor should see
//!
//! Requests run on spawned tasks and report back tagged with the selection
//! generation that issued them, so closing or switching the form never waits
//! on the network and late answers cannot act on a newer selection.

use async_trait::async_trait;
use louder_sdk::client::ClientError;
use louder_sdk::objects::{TicketRedirectRequest, TicketRedirectResponse};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tracing::{debug, error, info, warn};

use super::channels::{TICKET_CHANNEL_BUFFER, TicketCommandReceiver, TicketNoticeSender};
use super::types::{TicketCommand, TicketForm, TicketNotice, TicketState};
use crate::backend::TicketRedirector;
use crate::email::is_valid_email;

/// Pause between closing the form and leaving for the provider.
pub const REDIRECT_DELAY: Duration = Duration::from_millis(300);

/// Moves the visitor to another page.
#[async_trait]
pub trait Navigator: Send + Sync {
    async fn navigate(&self, target: &str);
}

/// Results of work the controller spawned.
#[derive(Debug)]
enum Outcome {
    Response {
        generation: u64,
        result: Result<TicketRedirectResponse, ClientError>,
    },
    RedirectDue {
        generation: u64,
    },
}

/// TicketFlowController drives one visitor's ticket requests.
pub struct TicketFlowController<R: ?Sized, N> {
    redirector: Arc<R>,
    navigator: N,
    command_rx: TicketCommandReceiver,
    notice_tx: TicketNoticeSender,
    shutdown_rx: watch::Receiver<bool>,
    state: TicketState,
    state_tx: watch::Sender<TicketState>,
    generation: u64,
    outcome_tx: mpsc::Sender<Outcome>,
    outcome_rx: mpsc::Receiver<Outcome>,
    redirect_delay: Duration,
}

impl<R, N> TicketFlowController<R, N>
where
    R: TicketRedirector + ?Sized + 'static,
    N: Navigator,
{
    /// Create a new TicketFlowController.
    ///
    /// # Arguments
    ///
    /// * `redirector` - Backend that turns an email into a redirect target
    /// * `navigator` - Performs the final navigation
    /// * `command_rx` - Receiver for TicketCommand
    /// * `notice_tx` - Sender for TicketNotice
    /// * `shutdown_rx` - Receiver for shutdown signal
    pub fn new(
        redirector: Arc<R>,
        navigator: N,
        command_rx: TicketCommandReceiver,
        notice_tx: TicketNoticeSender,
        shutdown_rx: watch::Receiver<bool>,
    ) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::channel(TICKET_CHANNEL_BUFFER);
        let (state_tx, _) = watch::channel(TicketState::Idle);
        Self {
            redirector,
            navigator,
            command_rx,
            notice_tx,
            shutdown_rx,
            state: TicketState::Idle,
            state_tx,
            generation: 0,
            outcome_tx,
            outcome_rx,
            redirect_delay: REDIRECT_DELAY,
        }
    }

    pub fn with_redirect_delay(mut self, delay: Duration) -> Self {
        self.redirect_delay = delay;
        self
    }

    /// Watch the flow's state.
    pub fn subscribe_state(&self) -> watch::Receiver<TicketState> {
        self.state_tx.subscribe()
    }

    /// Run the TicketFlowController.
    ///
    /// Returns on shutdown, or once the command channel is closed and no
    /// request or navigation is pending.
    pub async fn run(mut self) {
        info!("TicketFlowController started");

        let mut commands_open = true;
        loop {
            if !commands_open && !self.state.is_busy() {
                info!("Ticket command channel closed");
                break;
            }

            tokio::select! {
                biased;

                changed = self.shutdown_rx.changed() => {
                    if changed.is_err() || *self.shutdown_rx.borrow() {
                        info!("TicketFlowController received shutdown signal");
                        break;
                    }
                }

                Some(outcome) = self.outcome_rx.recv() => {
                    self.handle_outcome(outcome).await;
                }

                command = self.command_rx.recv(), if commands_open => {
                    match command {
                        Some(command) => self.handle_command(command).await,
                        None => commands_open = false,
                    }
                }
            }
        }

        info!("TicketFlowController shutdown complete");
    }

    async fn handle_command(&mut self, command: TicketCommand) {
        debug!(command = ?command, "Received TicketCommand");

        match command {
            TicketCommand::Activate(event_id) => {
                self.generation += 1;
                info!(event_id = %event_id, "Ticket form opened");
                self.set_state(TicketState::AwaitingInput {
                    selection: event_id.clone(),
                    form: TicketForm::default(),
                });
                self.notify(TicketNotice::FormOpened { event_id }).await;
            }
            TicketCommand::SetEmail(email) => self.edit_form(|form| form.email = email),
            TicketCommand::SetOptIn(opt_in) => self.edit_form(|form| form.opt_in = opt_in),
            TicketCommand::Submit => self.submit().await,
            TicketCommand::Cancel => match &self.state {
                TicketState::AwaitingInput { selection, .. }
                | TicketState::Submitting { selection, .. } => {
                    info!(event_id = %selection, "Ticket form closed");
                    self.generation += 1;
                    self.set_state(TicketState::Idle);
                    self.notify(TicketNotice::FormClosed).await;
                }
                TicketState::Idle | TicketState::Redirecting { .. } => {
                    debug!("Cancel ignored, no open form");
                }
            },
        }
    }

    fn edit_form(&mut self, edit: impl FnOnce(&mut TicketForm)) {
        let mut state = self.state.clone();
        let TicketState::AwaitingInput { form, .. } = &mut state else {
            debug!(state = ?self.state, "Form input ignored, no open form");
            return;
        };
        edit(form);
        self.set_state(state);
    }

    async fn submit(&mut self) {
        let TicketState::AwaitingInput { selection, form } = self.state.clone() else {
            debug!(state = ?self.state, "Submit ignored, no open form");
            return;
        };

        let email = form.email.trim();
        if !is_valid_email(email) {
            info!(event_id = %selection, "Rejected invalid email address");
            self.notify(TicketNotice::InvalidEmail).await;
            return;
        }

        let request = TicketRedirectRequest {
            email: email.to_string(),
            event_id: selection.clone(),
            opt_in: form.opt_in,
        };
        self.set_state(TicketState::Submitting { selection, form });

        let generation = self.generation;
        let redirector = Arc::clone(&self.redirector);
        let outcome_tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let result = redirector.request_redirect(&request).await;
            let _ = outcome_tx
                .send(Outcome::Response { generation, result })
                .await;
        });
    }

    async fn handle_outcome(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Response { generation, result } => {
                if generation != self.generation {
                    debug!(
                        generation,
                        current = self.generation,
                        "Dropping ticket response for a replaced selection"
                    );
                    return;
                }
                let TicketState::Submitting { selection, form } = self.state.clone() else {
                    warn!(state = ?self.state, "Ticket response without pending request");
                    return;
                };

                match result {
                    Ok(response) => {
                        info!(
                            event_id = %selection,
                            redirect_url = %response.redirect_url,
                            "Ticket redirect obtained"
                        );
                        self.set_state(TicketState::Redirecting {
                            selection,
                            redirect_url: response.redirect_url,
                        });
                        self.notify(TicketNotice::FormClosed).await;
                        self.schedule_redirect(generation);
                    }
                    Err(e) => {
                        error!(event_id = %selection, error = %e, "Ticket redirect request failed");
                        let reason = e.api_message().unwrap_or_else(|| e.to_string());
                        self.set_state(TicketState::AwaitingInput { selection, form });
                        self.notify(TicketNotice::SubmissionFailed { reason }).await;
                    }
                }
            }
            Outcome::RedirectDue { generation } => {
                if generation != self.generation {
                    debug!(generation, "Dropping navigation for a replaced selection");
                    return;
                }
                let TicketState::Redirecting {
                    selection,
                    redirect_url,
                } = self.state.clone()
                else {
                    return;
                };

                self.navigator.navigate(&redirect_url).await;
                self.set_state(TicketState::Idle);
                self.notify(TicketNotice::Navigated {
                    event_id: selection,
                    redirect_url,
                })
                .await;
            }
        }
    }

    fn schedule_redirect(&self, generation: u64) {
        let delay = self.redirect_delay;
        let outcome_tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = outcome_tx.send(Outcome::RedirectDue { generation }).await;
        });
    }

    fn set_state(&mut self, state: TicketState) {
        self.state = state.clone();
        self.state_tx.send_replace(state);
    }

    async fn notify(&self, notice: TicketNotice) {
        if self.notice_tx.send(notice).await.is_err() {
            debug!("Ticket notice receiver dropped");
        }
    }
}
