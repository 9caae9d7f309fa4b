//! Generation run orchestration.
//!
//! A run validates its configuration, consults the credential gate for
//! Ultra-tier runs, then issues one remote generation call per requested
//! image, strictly sequentially. Observers receive immutable [`RunState`]
//! snapshots through a watch channel; the orchestrator is the only writer.

use std::sync::Arc;

use tokio::sync::watch;

use prodshot_types::run::{BackgroundSpec, RunConfiguration, RunPhase, RunState};

use crate::client::ClientInner;
use crate::credentials::{CredentialGate, ExternallyManaged};
use crate::error::{messages, Error, Result};
use crate::models::Models;
use crate::request::build_request;

/// Entry point for generation runs.
#[derive(Clone)]
pub struct Runs {
    pub(crate) inner: Arc<ClientInner>,
}

impl Runs {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Create a runner for hosts without a credential-selection capability.
    #[must_use]
    pub fn runner(&self) -> Runner<ExternallyManaged> {
        self.runner_with_gate(ExternallyManaged)
    }

    /// Create a runner wired to a host credential gate.
    pub fn runner_with_gate<G: CredentialGate>(&self, gate: G) -> Runner<G> {
        Runner::new(self.inner.clone(), gate)
    }
}

/// Owns the run lifecycle and its observable state.
pub struct Runner<G = ExternallyManaged> {
    models: Models,
    gate: G,
    state: watch::Sender<RunState>,
}

impl<G: CredentialGate> Runner<G> {
    fn new(inner: Arc<ClientInner>, gate: G) -> Self {
        let (state, _) = watch::channel(RunState::default());
        Self {
            models: Models::new(inner),
            gate,
            state,
        }
    }

    /// Observe state snapshots. A snapshot is published after every
    /// transition; receivers always see a complete state, never a partial
    /// patch.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<RunState> {
        self.state.subscribe()
    }

    /// Current state snapshot.
    #[must_use]
    pub fn state(&self) -> RunState {
        self.state.borrow().clone()
    }

    /// Execute one run to completion or first failure.
    ///
    /// Requests are issued one at a time; request `i + 1` only goes out once
    /// request `i` has succeeded. The first failure aborts the run, discards
    /// any earlier results, and surfaces a single translated user message in
    /// [`RunState::last_error`].
    ///
    /// # Errors
    /// `Error::InvalidInput` for precondition violations (no remote call is
    /// issued), otherwise the error of the failed generation call.
    pub async fn run(&self, config: RunConfiguration) -> Result<Vec<String>> {
        if self.state.borrow().is_running() {
            return Err(Error::InvalidConfig {
                message: "a run is already in progress".into(),
            });
        }

        self.emit(RunState {
            phase: RunPhase::Validating,
            ..RunState::default()
        });

        if let Err(err) = validate(&config) {
            return self.fail(err, 0).await;
        }

        // Consulted exactly once per run, before the first request. The
        // prompt may suspend while the host flow runs but never blocks the
        // run outcome.
        if config.quality.is_ultra() && !self.gate.has_credential().await {
            self.gate.prompt_for_credential().await;
        }

        let total = config.image_count.count();
        tracing::debug!(total, quality = ?config.quality, "starting generation run");
        self.emit(RunState {
            phase: RunPhase::Running,
            ..RunState::default()
        });

        let mut results = Vec::with_capacity(total);
        let mut progress = 0u8;
        for index in 0..total {
            let request = match build_request(
                &config.product_image,
                &config.background,
                config.quality,
                index,
                total,
            ) {
                Ok(request) => request,
                Err(err) => return self.fail(err, progress).await,
            };

            match self.models.generate_image(request).await {
                Ok(image) => {
                    results.push(image.to_string());
                    progress = progress_percent(index + 1, total);
                    tracing::debug!(completed = index + 1, total, progress, "request completed");
                    self.emit(RunState {
                        phase: RunPhase::Running,
                        progress_percent: progress,
                        ..RunState::default()
                    });
                }
                Err(err) => return self.fail(err, progress).await,
            }
        }

        self.emit(RunState {
            phase: RunPhase::Completed,
            progress_percent: 100,
            results: results.clone(),
            last_error: None,
        });
        Ok(results)
    }

    async fn fail(&self, err: Error, progress: u8) -> Result<Vec<String>> {
        if err.is_credential_failure() {
            tracing::warn!(error = %err, "credential failure, prompting for key selection");
            self.gate.prompt_for_credential().await;
        } else {
            tracing::warn!(error = %err, "generation run failed");
        }
        self.emit(RunState {
            phase: RunPhase::Failed,
            progress_percent: progress,
            results: Vec::new(),
            last_error: Some(err.user_message()),
        });
        Err(err)
    }

    fn emit(&self, state: RunState) {
        self.state.send_replace(state);
    }
}

fn validate(config: &RunConfiguration) -> Result<()> {
    if config.product_image.trim().is_empty() {
        return Err(Error::InvalidInput {
            message: messages::MISSING_PRODUCT_IMAGE.into(),
        });
    }
    match &config.background {
        BackgroundSpec::Text(text) if text.trim().is_empty() => Err(Error::InvalidInput {
            message: messages::MISSING_BACKGROUND_TEXT.into(),
        }),
        BackgroundSpec::UploadedImage(image) if image.trim().is_empty() => {
            Err(Error::InvalidInput {
                message: messages::MISSING_BACKGROUND_IMAGE.into(),
            })
        }
        _ => Ok(()),
    }
}

fn progress_percent(completed: usize, total: usize) -> u8 {
    ((completed as f64 / total as f64) * 100.0).round() as u8
}
