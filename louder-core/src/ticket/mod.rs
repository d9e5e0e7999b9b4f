//! Ticket flow: from a card's "Get Tickets" control to the provider page.
//!
//! # Flow
//!
//! 1. `Activate(event_id)` opens the email form for that event
//!    (`Idle -> AwaitingInput`), discarding earlier form input.
//! 2. `Submit` validates the email. An invalid address keeps the form open;
//!    a valid one sends the redirect request (`AwaitingInput -> Submitting`).
//! 3. On success the form closes (`Submitting -> Redirecting`) and, after
//!    [`REDIRECT_DELAY`], the controller navigates to the returned URL and
//!    goes back to `Idle`. On failure the form stays open.
//!
//! Every activation or cancel starts a new selection generation. Responses
//! and pending navigations from an older generation are dropped.

pub mod channels;
pub mod controller;
pub mod types;

pub use channels::{
    TicketCommandReceiver, TicketCommandSender, TicketNoticeReceiver, TicketNoticeSender,
    ticket_command_channel, ticket_notice_channel,
};
pub use controller::{Navigator, REDIRECT_DELAY, TicketFlowController};
pub use types::{
    INVALID_EMAIL_MESSAGE, SUBMISSION_FAILED_MESSAGE, TicketCommand, TicketForm, TicketNotice,
    TicketState,
};
