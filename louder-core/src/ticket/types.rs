//! Commands, notices and states of the ticket flow.

use louder_sdk::objects::EventId;

pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";
pub const SUBMISSION_FAILED_MESSAGE: &str =
    "There was an error processing your request. Please try again.";

/// Input sent to the controller by the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TicketCommand {
    /// A card's ticket control was clicked.
    Activate(EventId),
    /// The email field changed.
    SetEmail(String),
    /// The newsletter checkbox changed.
    SetOptIn(bool),
    /// The form's submit button was clicked.
    Submit,
    /// The form was closed or the visitor clicked outside it.
    Cancel,
}

/// Output of the controller, for the page to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TicketNotice {
    /// The email form is shown for this event.
    FormOpened { event_id: EventId },
    /// The email form is hidden.
    FormClosed,
    /// Submit was rejected before any request was made.
    InvalidEmail,
    /// The redirect request failed; the form stays open.
    SubmissionFailed { reason: String },
    /// The visitor was sent to the ticket provider.
    Navigated { event_id: EventId, redirect_url: String },
}

impl TicketNotice {
    /// Alert text shown to the visitor, for notices that need one.
    pub fn alert(&self) -> Option<&'static str> {
        match self {
            TicketNotice::InvalidEmail => Some(INVALID_EMAIL_MESSAGE),
            TicketNotice::SubmissionFailed { .. } => Some(SUBMISSION_FAILED_MESSAGE),
            _ => None,
        }
    }
}

/// Contents of the email form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketForm {
    pub email: String,
    pub opt_in: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TicketState {
    #[default]
    Idle,
    AwaitingInput {
        selection: EventId,
        form: TicketForm,
    },
    Submitting {
        selection: EventId,
        form: TicketForm,
    },
    Redirecting {
        selection: EventId,
        redirect_url: String,
    },
}

impl TicketState {
    pub fn selection(&self) -> Option<&EventId> {
        match self {
            TicketState::Idle => None,
            TicketState::AwaitingInput { selection, .. }
            | TicketState::Submitting { selection, .. }
            | TicketState::Redirecting { selection, .. } => Some(selection),
        }
    }

    /// A request or a navigation is still pending.
    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            TicketState::Submitting { .. } | TicketState::Redirecting { .. }
        )
    }
}
