//! Drives one ticket flow from the command line.

use async_trait::async_trait;
use louder_core::backend::TicketRedirector;
use louder_core::ticket::{
    Navigator, TicketCommand, TicketFlowController, TicketNotice, ticket_command_channel,
    ticket_notice_channel,
};
use louder_sdk::objects::EventId;
use std::sync::Arc;
use tokio::sync::watch;

/// Navigation for a terminal: print the target.
pub struct StdoutNavigator;

#[async_trait]
impl Navigator for StdoutNavigator {
    async fn navigate(&self, target: &str) {
        println!("Redirecting to {target}");
    }
}

/// Activate `event_id`, fill in the form and submit it.
///
/// Returns the redirect target once navigation happened.
pub async fn run_ticket_flow<R>(
    redirector: Arc<R>,
    event_id: EventId,
    email: String,
    opt_in: bool,
    shutdown_rx: watch::Receiver<bool>,
) -> anyhow::Result<String>
where
    R: TicketRedirector + ?Sized + 'static,
{
    let (command_tx, command_rx) = ticket_command_channel();
    let (notice_tx, mut notice_rx) = ticket_notice_channel();

    let controller = TicketFlowController::new(
        redirector,
        StdoutNavigator,
        command_rx,
        notice_tx,
        shutdown_rx,
    );
    let handle = tokio::spawn(controller.run());

    for command in [
        TicketCommand::Activate(event_id.clone()),
        TicketCommand::SetEmail(email),
        TicketCommand::SetOptIn(opt_in),
        TicketCommand::Submit,
    ] {
        command_tx.send(command).await?;
    }
    // The controller finishes once the submission settles.
    drop(command_tx);

    let mut redirect = None;
    while let Some(notice) = notice_rx.recv().await {
        if let Some(alert) = notice.alert() {
            println!("{alert}");
        }
        match notice {
            TicketNotice::SubmissionFailed { reason } => {
                tracing::warn!(event_id = %event_id, reason = %reason, "Ticket request rejected");
            }
            TicketNotice::Navigated { redirect_url, .. } => redirect = Some(redirect_url),
            other => tracing::debug!(notice = ?other, "Ticket notice"),
        }
    }
    handle.await?;

    redirect.ok_or_else(|| anyhow::anyhow!("ticket request for event {event_id} did not complete"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use louder_sdk::client::ClientError;
    use louder_sdk::objects::{TicketRedirectRequest, TicketRedirectResponse};

    struct FixedRedirector(Option<String>);

    #[async_trait]
    impl TicketRedirector for FixedRedirector {
        async fn request_redirect(
            &self,
            _request: &TicketRedirectRequest,
        ) -> Result<TicketRedirectResponse, ClientError> {
            match &self.0 {
                Some(url) => Ok(TicketRedirectResponse {
                    redirect_url: url.clone(),
                }),
                None => Err(ClientError::Api {
                    status: louder_sdk::client::StatusCode::BAD_GATEWAY,
                    body: String::new(),
                }),
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_flow_returns_redirect_target() {
        let (_shutdown_tx, shutdown_rx) = watch::channel(false);
        let target = run_ticket_flow(
            Arc::new(FixedRedirector(Some("https://provider/x".into()))),
            EventId::from("42"),
            "user@example.com".into(),
            true,
            shutdown_rx,
        )
        .await
        .unwrap();
        assert_eq!(target, "https://provider/x");
    }

    #[tokio::test]
    async fn test_flow_fails_on_invalid_email() {
        let (_shutdown_tx, shutdown_rx) = watch::channel(false);
        let result = run_ticket_flow(
            Arc::new(FixedRedirector(Some("https://provider/x".into()))),
            EventId::from("42"),
            "not-an-email".into(),
            false,
            shutdown_rx,
        )
        .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_flow_fails_on_backend_error() {
        let (_shutdown_tx, shutdown_rx) = watch::channel(false);
        let result = run_ticket_flow(
            Arc::new(FixedRedirector(None)),
            EventId::from("42"),
            "user@example.com".into(),
            false,
            shutdown_rx,
        )
        .await;
        assert!(result.is_err());
    }
}
