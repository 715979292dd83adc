//! # Explanation Controller
//!
//! Drives one submission cycle around an [`ExplanationStrategy`]:
//!
//! ```text
//! begin()  ── sync ──  in-flight flag → collect → disable submit → Loading
//!    │
//! run()    ── async ── strategy.obtain (with timeout)
//!    │
//!    ├── Ok  → Success, render(result)
//!    └── Err → Error,   render(error_fragment)
//!    │
//! drop     ── always ── restore submit label + enabled, release flag
//! ```
//!
//! Everything up to the first `.await` happens in [`ExplanationController::begin`],
//! so a host that calls it from its event handler has the control disabled
//! before it can see another click. The restore lives in a `Drop` impl, which
//! also runs when rendering panics or the in-flight future is dropped.

use log::{debug, info, warn};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use crate::core::collector::{self, ValidationError, ValidationPolicy};
use crate::core::config::ResolvedConfig;
use crate::core::page::Page;
use crate::core::render::{error_fragment, render};
use crate::core::request::{ExplanationRequest, ExplanationResult};
use crate::core::state::UiState;
use crate::explain::{ExplainError, ExplanationStrategy};

/// Submit label while a request is outstanding.
pub const LOADING_LABEL: &str = "Explaining...";

/// Upper bound on a single strategy call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// How a submission ended.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Explanation rendered.
    Succeeded,
    /// Strategy failed; the error fragment was rendered.
    Failed(ExplainError),
    /// Form input invalid; an alert was raised and nothing else happened.
    Rejected(ValidationError),
    /// Another submission is still in flight.
    Busy,
}

pub struct ExplanationController {
    strategy: Arc<dyn ExplanationStrategy>,
    policy: ValidationPolicy,
    timeout: Option<Duration>,
    state: Arc<Mutex<UiState>>,
    in_flight: Arc<AtomicBool>,
}

impl ExplanationController {
    pub fn new(strategy: Arc<dyn ExplanationStrategy>) -> Self {
        Self {
            strategy,
            policy: ValidationPolicy::default(),
            timeout: Some(DEFAULT_TIMEOUT),
            state: Arc::new(Mutex::new(UiState::Idle)),
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn from_config(strategy: Arc<dyn ExplanationStrategy>, config: &ResolvedConfig) -> Self {
        Self::new(strategy)
            .with_policy(config.policy)
            .with_timeout(config.timeout)
    }

    pub fn with_policy(mut self, policy: ValidationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// `None` waits forever.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    pub fn state(&self) -> UiState {
        *lock_state(&self.state)
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Synchronous half of a submission.
    ///
    /// On `Ok` the control is already disabled and the state is `Loading`;
    /// the returned [`Submission`] must be run (or dropped) to finish the
    /// cycle. On `Err` nothing on the page changed except, for a rejected
    /// form, the alert.
    pub fn begin(&self, page: Arc<dyn Page>) -> Result<Submission, SubmitOutcome> {
        let Some(flight) = InFlight::acquire(&self.in_flight) else {
            debug!("Submission ignored: request already in flight");
            return Err(SubmitOutcome::Busy);
        };

        let request = match collector::collect(page.as_ref(), self.policy) {
            Ok(request) => request,
            Err(e) => {
                warn!("Submission rejected: {}", e);
                page.alert(e.user_message());
                return Err(SubmitOutcome::Rejected(e));
            }
        };

        let restore = SubmitRestore::engage(page.clone());
        set_state(&self.state, UiState::Loading);

        info!(
            "Submission started: topic={:?}, difficulty={}, strategy={}",
            request.topic(),
            request.difficulty(),
            self.strategy.name()
        );

        Ok(Submission {
            strategy: self.strategy.clone(),
            timeout: self.timeout,
            state: self.state.clone(),
            page,
            request,
            _restore: restore,
            _flight: flight,
        })
    }

    /// Full submission cycle. Never returns an error: every failure is
    /// either alerted or rendered inline and reported through the outcome.
    pub async fn submit(&self, page: Arc<dyn Page>) -> SubmitOutcome {
        match self.begin(page) {
            Ok(submission) => submission.run().await,
            Err(outcome) => outcome,
        }
    }
}

/// A submission past validation, holding the disabled control.
///
/// Field order matters: the control is restored before the in-flight flag
/// is released.
pub struct Submission {
    strategy: Arc<dyn ExplanationStrategy>,
    timeout: Option<Duration>,
    state: Arc<Mutex<UiState>>,
    page: Arc<dyn Page>,
    request: ExplanationRequest,
    _restore: SubmitRestore,
    _flight: InFlight,
}

impl std::fmt::Debug for Submission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Submission")
            .field("strategy", &self.strategy.name())
            .field("request", &self.request)
            .finish_non_exhaustive()
    }
}

impl Submission {
    pub fn request(&self) -> &ExplanationRequest {
        &self.request
    }

    pub async fn run(self) -> SubmitOutcome {
        match self.obtain().await {
            Ok(result) => {
                info!("Explanation received: {} bytes", result.html.len());
                set_state(&self.state, UiState::Success);
                render(self.page.as_ref(), &result.html);
                SubmitOutcome::Succeeded
            }
            Err(e) => {
                warn!("Explanation failed: {}", e);
                set_state(&self.state, UiState::Error);
                render(self.page.as_ref(), &error_fragment(&e.detail()));
                SubmitOutcome::Failed(e)
            }
        }
    }

    async fn obtain(&self) -> Result<ExplanationResult, ExplainError> {
        let call = self.strategy.obtain(&self.request);
        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .unwrap_or(Err(ExplainError::Timeout(limit))),
            None => call.await,
        }
    }
}

/// Restores the submit control to what it was before the submission.
struct SubmitRestore {
    page: Arc<dyn Page>,
    label: String,
    enabled: bool,
}

impl SubmitRestore {
    fn engage(page: Arc<dyn Page>) -> Self {
        let label = page.submit_label();
        let enabled = page.submit_enabled();
        page.set_submit_label(LOADING_LABEL);
        page.set_submit_enabled(false);
        Self {
            page,
            label,
            enabled,
        }
    }
}

impl Drop for SubmitRestore {
    fn drop(&mut self) {
        self.page.set_submit_label(&self.label);
        self.page.set_submit_enabled(self.enabled);
        debug!("Submit control restored: label={:?}", self.label);
    }
}

/// Single-slot in-flight flag.
struct InFlight(Arc<AtomicBool>);

impl InFlight {
    fn acquire(flag: &Arc<AtomicBool>) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag.clone()))
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

fn lock_state(state: &Mutex<UiState>) -> MutexGuard<'_, UiState> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn set_state(state: &Mutex<UiState>, next: UiState) {
    let mut current = lock_state(state);
    debug!("UiState: {:?} -> {:?}", *current, next);
    *current = next;
}
