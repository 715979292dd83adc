//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use tokio::sync::{Notify, oneshot};

use crate::core::page::{Page, PageModel, ScrollIntoView};
use crate::core::request::{Difficulty, ExplanationRequest, ExplanationResult};
use crate::explain::{ExplainError, ExplanationStrategy};

/// Always returns the same fragment, and counts calls.
pub struct FixedStrategy {
    html: String,
    calls: AtomicUsize,
    last_difficulty: Mutex<Option<Difficulty>>,
}

impl FixedStrategy {
    pub fn new(html: &str) -> Self {
        Self {
            html: html.to_string(),
            calls: AtomicUsize::new(0),
            last_difficulty: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_difficulty(&self) -> Option<Difficulty> {
        *self.last_difficulty.lock().unwrap()
    }
}

#[async_trait]
impl ExplanationStrategy for FixedStrategy {
    fn name(&self) -> &str {
        "fixed"
    }

    async fn obtain(&self, request: &ExplanationRequest) -> Result<ExplanationResult, ExplainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_difficulty.lock().unwrap() = Some(request.difficulty());
        Ok(ExplanationResult::new(self.html.clone()))
    }
}

/// Always fails with a copy of the configured error.
pub struct FailingStrategy {
    make: fn(&str, u16) -> ExplainError,
    message: String,
    status: u16,
}

impl FailingStrategy {
    pub fn service(status: u16, status_text: &str) -> Self {
        Self {
            make: |text, status| ExplainError::Service {
                status,
                status_text: text.to_string(),
            },
            message: status_text.to_string(),
            status,
        }
    }

    pub fn network(message: &str) -> Self {
        Self {
            make: |text, _| ExplainError::Network(text.to_string()),
            message: message.to_string(),
            status: 0,
        }
    }
}

#[async_trait]
impl ExplanationStrategy for FailingStrategy {
    fn name(&self) -> &str {
        "failing"
    }

    async fn obtain(&self, _request: &ExplanationRequest) -> Result<ExplanationResult, ExplainError> {
        Err((self.make)(&self.message, self.status))
    }
}

/// Blocks inside `obtain` until the test releases it.
pub struct GatedStrategy {
    started: Notify,
    sender: Mutex<Option<oneshot::Sender<Result<String, ExplainError>>>>,
    receiver: Mutex<Option<oneshot::Receiver<Result<String, ExplainError>>>>,
}

impl GatedStrategy {
    pub fn new() -> Self {
        let (tx, rx) = oneshot::channel();
        Self {
            started: Notify::new(),
            sender: Mutex::new(Some(tx)),
            receiver: Mutex::new(Some(rx)),
        }
    }

    /// Resolves once `obtain` has been entered.
    pub async fn wait_started(&self) {
        self.started.notified().await;
    }

    /// Lets the pending (or next) `obtain` finish with `result`.
    pub fn release(&self, result: Result<String, ExplainError>) {
        if let Some(tx) = self.sender.lock().unwrap().take() {
            let _ = tx.send(result);
        }
    }
}

#[async_trait]
impl ExplanationStrategy for GatedStrategy {
    fn name(&self) -> &str {
        "gated"
    }

    async fn obtain(&self, _request: &ExplanationRequest) -> Result<ExplanationResult, ExplainError> {
        self.started.notify_one();
        let receiver = self.receiver.lock().unwrap().take();
        match receiver {
            Some(rx) => match rx.await {
                Ok(result) => result.map(ExplanationResult::new),
                Err(_) => Err(ExplainError::Network("gate dropped".to_string())),
            },
            None => std::future::pending().await,
        }
    }
}

/// Page with a filled-in form.
pub fn ready_page(topic: &str, difficulty: Option<&str>) -> Arc<PageModel> {
    let page = Arc::new(PageModel::new("Explain"));
    page.set_topic(topic);
    page.check(difficulty);
    page
}

/// Page whose result region panics when written to.
pub struct PanickingPage {
    inner: PageModel,
}

impl PanickingPage {
    pub fn new(topic: &str) -> Self {
        let inner = PageModel::new("Explain");
        inner.set_topic(topic);
        inner.check(Some("beginner"));
        Self { inner }
    }

    pub fn inner(&self) -> &PageModel {
        &self.inner
    }
}

impl Page for PanickingPage {
    fn topic_text(&self) -> String {
        self.inner.topic_text()
    }

    fn checked_difficulty(&self) -> Option<String> {
        self.inner.checked_difficulty()
    }

    fn submit_label(&self) -> String {
        self.inner.submit_label()
    }

    fn set_submit_label(&self, label: &str) {
        self.inner.set_submit_label(label);
    }

    fn submit_enabled(&self) -> bool {
        self.inner.submit_enabled()
    }

    fn set_submit_enabled(&self, enabled: bool) {
        self.inner.set_submit_enabled(enabled);
    }

    fn set_result_html(&self, _html: &str) {
        panic!("result region detached");
    }

    fn add_result_class(&self, class: &str) {
        self.inner.add_result_class(class);
    }

    fn scroll_result_into_view(&self, options: ScrollIntoView) {
        self.inner.scroll_result_into_view(options);
    }

    fn alert(&self, message: &str) {
        self.inner.alert(message);
    }
}
