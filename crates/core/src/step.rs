//! Provisioning step reporting
//!
//! A [`Step`] is a scoped unit of provisioning work with exactly one terminal
//! outcome: success or error. Steps are opened, worked, and closed in order;
//! a step dropped without a recorded outcome is reported as incomplete so
//! early-return paths can never leak an unreported step.

use tracing::{debug, error, info};

/// Terminal outcome of a provisioning step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Step completed, with an optional user-facing message
    Success(Option<String>),
    /// Step failed with a diagnostic message
    Error(String),
}

impl Outcome {
    /// Whether this outcome is a success
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }
}

/// A scoped unit of provisioning work
///
/// The first recorded outcome wins; later calls are ignored. The outcome is
/// flushed into the [`ProvisionReport`] when the step is closed or dropped.
pub struct Step<'r> {
    name: String,
    outcome: Option<Outcome>,
    report: &'r mut ProvisionReport,
}

impl<'r> Step<'r> {
    /// Open a new step that reports into `report`
    pub fn new(report: &'r mut ProvisionReport, name: impl Into<String>) -> Self {
        let name = name.into();
        debug!("Starting step: {name}");
        Self {
            name,
            outcome: None,
            report,
        }
    }

    /// Record a successful outcome
    pub fn success(&mut self) {
        self.record(Outcome::Success(None));
    }

    /// Record a successful outcome with a user-facing message
    pub fn success_msg(&mut self, message: impl Into<String>) {
        self.record(Outcome::Success(Some(message.into())));
    }

    /// Record an error outcome with diagnostic context
    pub fn error(&mut self, message: impl Into<String>) {
        self.record(Outcome::Error(message.into()));
    }

    fn record(&mut self, outcome: Outcome) {
        if self.outcome.is_some() {
            return; // first outcome wins
        }
        match &outcome {
            Outcome::Success(Some(msg)) => info!("{}: {msg}", self.name),
            Outcome::Success(None) => info!("{} succeeded", self.name),
            Outcome::Error(msg) => error!("{} failed: {msg}", self.name),
        }
        self.outcome = Some(outcome);
    }
}

impl Drop for Step<'_> {
    fn drop(&mut self) {
        let outcome = self.outcome.take().unwrap_or_else(|| {
            error!("{} ended without an outcome", self.name);
            Outcome::Error("step ended without recording an outcome".to_string())
        });
        self.report.push(StepOutcome {
            name: std::mem::take(&mut self.name),
            outcome,
        });
    }
}

/// A finished step as recorded in a [`ProvisionReport`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    /// Step name as given to [`Step::new`]
    pub name: String,
    /// Terminal outcome
    pub outcome: Outcome,
}

/// Accumulated outcomes of a provisioning run
#[derive(Debug, Default)]
pub struct ProvisionReport {
    steps: Vec<StepOutcome>,
}

impl ProvisionReport {
    /// Create an empty report
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, step: StepOutcome) {
        self.steps.push(step);
    }

    /// All finished steps, in execution order
    #[must_use]
    pub fn steps(&self) -> &[StepOutcome] {
        &self.steps
    }

    /// Whether no steps were recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Whether a step whose name contains `name` succeeded
    #[must_use]
    pub fn succeeded(&self, name: &str) -> bool {
        self.steps
            .iter()
            .any(|s| s.name.contains(name) && s.outcome.is_success())
    }

    /// Whether a step whose name contains `name` failed
    #[must_use]
    pub fn failed(&self, name: &str) -> bool {
        self.steps
            .iter()
            .any(|s| s.name.contains(name) && !s.outcome.is_success())
    }

    /// Whether any recorded step failed
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.steps.iter().any(|s| !s.outcome.is_success())
    }
}
