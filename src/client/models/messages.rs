use crate::client::models::form_state::Ticket;
use crate::common::error::SubmitError;

#[derive(Debug, Clone)]
pub enum Message {
    None,
    AddressChanged(String),
    Submit,
    CrewFetched { ticket: Ticket, outcome: Result<serde_json::Value, SubmitError> },
}
