// Stato del form indirizzo -> crew
use crate::common::error::SubmitError;
use crate::common::models::pretty;
use log::warn;
use serde_json::Value;

pub const SUBMIT_LABEL: &str = "Fetch Crew";
pub const LOADING_LABEL: &str = "Loading...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Identifies one submission; completions carry it back so they can be matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub address: String,
    pub loading: bool,
    pub error: Option<String>,
    pub response: Option<String>,
    latest: u64,
}

impl FormState {
    pub fn set_address(&mut self, address: String) {
        self.address = address;
    }

    /// Starts a submission: clears the previous outcome and marks the form as loading.
    pub fn begin_submission(&mut self) -> Ticket {
        self.latest += 1;
        self.loading = true;
        self.error = None;
        self.response = None;
        Ticket(self.latest)
    }

    /// Applies the outcome of a finished submission in one step.
    ///
    /// Returns `false` if `ticket` belongs to a submission that has since been
    /// superseded; such outcomes leave the state untouched.
    pub fn complete(&mut self, ticket: Ticket, outcome: Result<Value, SubmitError>) -> bool {
        if ticket.0 != self.latest {
            warn!("Discarding stale crew response (ticket {}, latest {})", ticket.0, self.latest);
            return false;
        }
        match outcome {
            Ok(data) => {
                self.response = Some(pretty(&data));
                self.error = None;
            }
            Err(e) => {
                self.error = Some(e.to_string());
                self.response = None;
            }
        }
        self.loading = false;
        true
    }

    /// Ticket of the submission currently in flight, if any.
    pub fn pending(&self) -> Option<Ticket> {
        self.loading.then_some(Ticket(self.latest))
    }

    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if self.error.is_some() {
            Phase::Error
        } else if self.response.is_some() {
            Phase::Success
        } else {
            Phase::Idle
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.loading
    }

    pub fn submit_label(&self) -> &'static str {
        if self.loading { LOADING_LABEL } else { SUBMIT_LABEL }
    }
}
