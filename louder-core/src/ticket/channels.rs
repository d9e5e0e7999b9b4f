//! Channel factories for the ticket flow.

use super::types::{TicketCommand, TicketNotice};
use tokio::sync::mpsc;

/// Buffer size of the ticket channels.
///
/// Commands come from a single visitor, so bursts stay tiny.
pub const TICKET_CHANNEL_BUFFER: usize = 32;

/// Sender handle for TicketCommand.
pub type TicketCommandSender = mpsc::Sender<TicketCommand>;
/// Receiver handle for TicketCommand.
pub type TicketCommandReceiver = mpsc::Receiver<TicketCommand>;

/// Sender handle for TicketNotice.
pub type TicketNoticeSender = mpsc::Sender<TicketNotice>;
/// Receiver handle for TicketNotice.
pub type TicketNoticeReceiver = mpsc::Receiver<TicketNotice>;

/// Create a new TicketCommand channel.
pub fn ticket_command_channel() -> (TicketCommandSender, TicketCommandReceiver) {
    mpsc::channel(TICKET_CHANNEL_BUFFER)
}

/// Create a new TicketNotice channel.
pub fn ticket_notice_channel() -> (TicketNoticeSender, TicketNoticeReceiver) {
    mpsc::channel(TICKET_CHANNEL_BUFFER)
}
