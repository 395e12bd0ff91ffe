//! Generation-flow state for the create-model page.
//!
//! DESIGN
//! ======
//! A single poll run is identified by an epoch. Starting or cancelling a run
//! bumps the epoch, so a status response that arrives for an older run is
//! dropped instead of overwriting newer state. At most one run is live.

#[cfg(test)]
#[path = "generation_test.rs"]
mod generation_test;

use crate::net::types::{BBModelResponse, ModelStatus};

/// Stepper position on the create-model page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GenerationStep {
    #[default]
    EnterDetails,
    GenerateModel,
    ReviewDownload,
}

impl GenerationStep {
    pub const ALL: [Self; 3] = [Self::EnterDetails, Self::GenerateModel, Self::ReviewDownload];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::EnterDetails => "Enter Details",
            Self::GenerateModel => "Generate Model",
            Self::ReviewDownload => "Review & Download",
        }
    }

    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::EnterDetails => 0,
            Self::GenerateModel => 1,
            Self::ReviewDownload => 2,
        }
    }

    /// Whether the stepper has moved past `self` while at `current`.
    #[must_use]
    pub fn is_done_at(self, current: Self) -> bool {
        current.index() > self.index()
    }
}

/// What the poller should do after feeding a result into the state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PollOutcome {
    /// Keep polling.
    Continue,
    /// The run reached a terminal status or failed; stop.
    Finished,
    /// The result belongs to a cancelled or superseded run; stop and ignore it.
    Stale,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerationState {
    pub step: GenerationStep,
    pub response: Option<BBModelResponse>,
    pub error: Option<String>,
    polling: bool,
    epoch: u64,
}

impl GenerationState {
    /// Record the job descriptor returned by submission and start a new poll
    /// run, superseding any previous one. Returns the run's epoch.
    pub fn start(&mut self, response: BBModelResponse) -> u64 {
        self.epoch += 1;
        self.step = GenerationStep::GenerateModel;
        self.error = None;
        self.polling = true;
        let epoch = self.epoch;
        // A job can already be terminal at submission time.
        self.apply_status(epoch, response);
        epoch
    }

    /// Invalidate the live run, if any.
    pub fn cancel(&mut self) {
        self.epoch += 1;
        self.polling = false;
    }

    #[must_use]
    pub fn is_polling(&self) -> bool {
        self.polling
    }

    /// Whether `epoch` names the live run.
    #[must_use]
    pub fn is_current(&self, epoch: u64) -> bool {
        self.polling && self.epoch == epoch
    }

    /// Replace the job envelope with a fresh status response.
    pub fn apply_status(&mut self, epoch: u64, response: BBModelResponse) -> PollOutcome {
        if !self.is_current(epoch) {
            return PollOutcome::Stale;
        }
        match response.status {
            ModelStatus::Completed => self.step = GenerationStep::ReviewDownload,
            ModelStatus::Failed => self.error = Some(failure_message(response.message.as_deref())),
            _ => {}
        }
        let finished = response.status.is_terminal();
        self.response = Some(response);
        if finished {
            self.polling = false;
            PollOutcome::Finished
        } else {
            PollOutcome::Continue
        }
    }

    /// A status request failed: stop the run and show the error.
    pub fn fail(&mut self, epoch: u64, message: String) -> PollOutcome {
        if !self.is_current(epoch) {
            return PollOutcome::Stale;
        }
        self.polling = false;
        self.error = Some(message);
        PollOutcome::Finished
    }

    /// Back to an empty form.
    pub fn reset(&mut self) {
        let epoch = self.epoch + 1;
        *self = Self { epoch, ..Self::default() };
    }
}

fn failure_message(message: Option<&str>) -> String {
    format!("Model generation failed: {}", message.unwrap_or("unknown error"))
}
