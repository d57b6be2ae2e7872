//! Simulated contact-form submission.
//!
//! There is no backend: a submission waits for the configured delay and then
//! resolves locally. `Idle → Sending → Idle`, with a second submit rejected
//! while one is in flight. Outcomes come from a seeded [`SmallRng`] so the
//! host can inject the failure rate (and tests a fixed seed).

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::form::ContactForm;

pub const SEND_LABEL: &str = "Send Message";
pub const SENDING_LABEL: &str = "Sending...";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Sending,
}

impl SubmitPhase {
    /// Submit button text for this phase.
    #[must_use]
    pub fn button_label(self) -> &'static str {
        match self {
            SubmitPhase::Idle => SEND_LABEL,
            SubmitPhase::Sending => SENDING_LABEL,
        }
    }

    #[must_use]
    pub fn button_disabled(self) -> bool {
        self == SubmitPhase::Sending
    }
}

#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    #[error("a message is already being sent")]
    InFlight,
    #[error("no message is being sent")]
    NotSending,
    #[error("Something went wrong. Please try again.")]
    Simulated,
}

pub struct SubmitSimulator {
    phase: SubmitPhase,
    payload: Option<ContactForm>,
    rng: SmallRng,
    failure_rate: f64,
    delay_ms: u32,
}

impl SubmitSimulator {
    /// `failure_rate` is clamped to `[0, 1]`.
    #[must_use]
    pub fn new(seed: u64, failure_rate: f64, delay_ms: u32) -> Self {
        let failure_rate = if failure_rate.is_nan() { 0.0 } else { failure_rate.clamp(0.0, 1.0) };
        Self { phase: SubmitPhase::Idle, payload: None, rng: SmallRng::seed_from_u64(seed), failure_rate, delay_ms }
    }

    #[must_use]
    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    #[must_use]
    pub fn is_sending(&self) -> bool {
        self.phase == SubmitPhase::Sending
    }

    /// Start sending a validated form. Returns the delay before
    /// [`SubmitSimulator::resolve`] should be called.
    pub fn begin(&mut self, form: ContactForm) -> Result<u32, SubmitError> {
        if self.is_sending() {
            return Err(SubmitError::InFlight);
        }
        self.phase = SubmitPhase::Sending;
        self.payload = Some(form);
        tracing::debug!(delay_ms = self.delay_ms, "submission started");
        Ok(self.delay_ms)
    }

    /// Settle the in-flight submission. Either way the phase returns to idle
    /// and the payload is released; a failed payload is not retried.
    pub fn resolve(&mut self) -> Result<ContactForm, SubmitError> {
        let payload = self.payload.take().ok_or(SubmitError::NotSending)?;
        self.phase = SubmitPhase::Idle;
        if self.rng.random::<f64>() < self.failure_rate {
            tracing::warn!("simulated submission failed");
            return Err(SubmitError::Simulated);
        }
        tracing::debug!("simulated submission succeeded");
        Ok(payload)
    }

    /// Drop the in-flight submission without an outcome (page teardown).
    pub fn abort(&mut self) -> bool {
        self.phase = SubmitPhase::Idle;
        self.payload.take().is_some()
    }
}
