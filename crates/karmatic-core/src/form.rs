//! Contact form status and field state.
//!
//! `Idle -> Submitting -> {Success | Error} -> Idle`. Success and error
//! banners revert to idle on their own after [`STATUS_REVERT_DELAY`]; every
//! transition bumps a generation counter so a revert scheduled for an older
//! banner can never clear a newer one.

use std::time::Duration;

/// How long a success or error banner stays visible.
pub const STATUS_REVERT_DELAY: Duration = Duration::from_secs(5);

pub const SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent successfully.";
pub const FAILURE_MESSAGE: &str =
    "Sorry, there was an error sending your message. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Success(String),
    Error(String),
}

impl FormStatus {
    /// Banner text for the current status, if one is shown.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success(message) | Self::Error(message) => Some(message),
            Self::Idle | Self::Submitting => None,
        }
    }

    pub const fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }
}

/// Handle for a scheduled auto-revert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "the ticket must be passed to FormState::revert once the delay elapses"]
pub struct RevertTicket(u64);

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    status: FormStatus,
    generation: u64,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn status(&self) -> &FormStatus {
        &self.status
    }

    /// Enter `Submitting`. Returns `false` if a submission is already in flight.
    pub fn begin_submit(&mut self) -> bool {
        if self.status.is_submitting() {
            return false;
        }
        self.transition(FormStatus::Submitting);
        true
    }

    pub fn succeed(&mut self, message: impl Into<String>) -> RevertTicket {
        self.transition(FormStatus::Success(message.into()));
        RevertTicket(self.generation)
    }

    pub fn fail(&mut self, message: impl Into<String>) -> RevertTicket {
        self.transition(FormStatus::Error(message.into()));
        RevertTicket(self.generation)
    }

    /// Return to idle if nothing happened since `ticket` was issued.
    pub fn revert(&mut self, ticket: RevertTicket) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        self.transition(FormStatus::Idle);
        true
    }

    /// Close the banner early. Has no effect while submitting.
    pub fn dismiss(&mut self) -> bool {
        match self.status {
            FormStatus::Success(_) | FormStatus::Error(_) => {
                self.transition(FormStatus::Idle);
                true
            }
            FormStatus::Idle | FormStatus::Submitting => false,
        }
    }

    fn transition(&mut self, status: FormStatus) {
        self.generation += 1;
        self.status = status;
    }
}

/// Text fields of the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormFields {
    pub first_name: String,
    pub phone_number: String,
    pub message: String,
}

impl FormFields {
    #[cfg(test)]
    pub fn new(
        first_name: impl Into<String>,
        phone_number: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            phone_number: phone_number.into(),
            message: message.into(),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.first_name.is_empty() && self.phone_number.is_empty() && self.message.is_empty()
    }
}
