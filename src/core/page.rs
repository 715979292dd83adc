//! # Host Surface
//!
//! The controller never reaches into a UI toolkit directly. Everything it
//! needs from the page goes through the [`Page`] trait: a context object built
//! once at startup and shared with every component.
//!
//! ```text
//! Page
//! ├── topic_text / checked_difficulty     // form controls (read only)
//! ├── submit_label / submit_enabled       // submit control (read + write)
//! ├── set_result_html / add_result_class  // result region
//! ├── scroll_result_into_view             // result region
//! └── alert                               // blocking notification
//! ```
//!
//! Methods take `&self` because the surface is shared between the host's
//! event loop and the in-flight submission task.
//!
//! [`PageModel`] is an in-memory implementation. The terminal host renders
//! from it, and tests assert against its [`PageSnapshot`].

use std::collections::{BTreeSet, VecDeque};
use std::sync::{Mutex, MutexGuard};

/// How the scroll is animated. Hosts honouring a reduced-motion setting
/// downgrade `Smooth` to `Instant`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// Which edge of the viewport the element is aligned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBlock {
    /// Whichever edge is closest; no scroll if already in view.
    Nearest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollIntoView {
    pub behavior: ScrollBehavior,
    pub block: ScrollBlock,
}

impl ScrollIntoView {
    /// Smooth scroll to whichever viewport edge is closest.
    pub const SMOOTH_NEAREST: ScrollIntoView = ScrollIntoView {
        behavior: ScrollBehavior::Smooth,
        block: ScrollBlock::Nearest,
    };
}

/// The host surface the core drives.
pub trait Page: Send + Sync {
    /// Current text of the topic field, untrimmed.
    fn topic_text(&self) -> String;

    /// Value of the checked difficulty radio, if any.
    fn checked_difficulty(&self) -> Option<String>;

    fn submit_label(&self) -> String;
    fn set_submit_label(&self, label: &str);
    fn submit_enabled(&self) -> bool;
    fn set_submit_enabled(&self, enabled: bool);

    /// Replaces the result region's content.
    fn set_result_html(&self, html: &str);

    /// Adds a state class to the result region.
    fn add_result_class(&self, class: &str);

    fn scroll_result_into_view(&self, options: ScrollIntoView);

    /// Blocking notification. The host must not accept form input until it
    /// is dismissed.
    fn alert(&self, message: &str);
}

/// Point-in-time copy of everything a [`PageModel`] holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSnapshot {
    pub topic: String,
    pub checked: Option<String>,
    pub submit_label: String,
    pub submit_enabled: bool,
    pub result_html: String,
    pub result_classes: BTreeSet<String>,
    /// Most recent scroll request, if the region was ever scrolled into view.
    pub last_scroll: Option<ScrollIntoView>,
    /// Every alert raised, oldest first.
    pub alerts: Vec<String>,
}

impl PageSnapshot {
    pub fn has_result_class(&self, class: &str) -> bool {
        self.result_classes.contains(class)
    }
}

struct PageInner {
    snapshot: PageSnapshot,
    pending_scroll: Option<ScrollIntoView>,
    pending_alerts: VecDeque<String>,
}

/// In-memory page. Hosts poll the pending scroll/alert queues each frame.
pub struct PageModel {
    inner: Mutex<PageInner>,
}

impl PageModel {
    pub fn new(submit_label: &str) -> Self {
        Self {
            inner: Mutex::new(PageInner {
                snapshot: PageSnapshot {
                    topic: String::new(),
                    checked: None,
                    submit_label: submit_label.to_string(),
                    submit_enabled: true,
                    result_html: String::new(),
                    result_classes: BTreeSet::new(),
                    last_scroll: None,
                    alerts: Vec::new(),
                },
                pending_scroll: None,
                pending_alerts: VecDeque::new(),
            }),
        }
    }

    // A panic elsewhere must not lock the host out of its own page.
    fn lock(&self) -> MutexGuard<'_, PageInner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn snapshot(&self) -> PageSnapshot {
        self.lock().snapshot.clone()
    }

    /// Host-side write of the topic field.
    pub fn set_topic(&self, topic: &str) {
        self.lock().snapshot.topic = topic.to_string();
    }

    /// Host-side radio selection. `None` unchecks the group.
    pub fn check(&self, value: Option<&str>) {
        self.lock().snapshot.checked = value.map(str::to_string);
    }

    /// Takes the scroll request raised since the last call.
    pub fn take_scroll_request(&self) -> Option<ScrollIntoView> {
        self.lock().pending_scroll.take()
    }

    /// Takes the oldest alert the host has not shown yet.
    pub fn next_alert(&self) -> Option<String> {
        self.lock().pending_alerts.pop_front()
    }
}

impl Page for PageModel {
    fn topic_text(&self) -> String {
        self.lock().snapshot.topic.clone()
    }

    fn checked_difficulty(&self) -> Option<String> {
        self.lock().snapshot.checked.clone()
    }

    fn submit_label(&self) -> String {
        self.lock().snapshot.submit_label.clone()
    }

    fn set_submit_label(&self, label: &str) {
        self.lock().snapshot.submit_label = label.to_string();
    }

    fn submit_enabled(&self) -> bool {
        self.lock().snapshot.submit_enabled
    }

    fn set_submit_enabled(&self, enabled: bool) {
        self.lock().snapshot.submit_enabled = enabled;
    }

    fn set_result_html(&self, html: &str) {
        self.lock().snapshot.result_html = html.to_string();
    }

    fn add_result_class(&self, class: &str) {
        self.lock().snapshot.result_classes.insert(class.to_string());
    }

    fn scroll_result_into_view(&self, options: ScrollIntoView) {
        let mut inner = self.lock();
        inner.snapshot.last_scroll = Some(options);
        inner.pending_scroll = Some(options);
    }

    fn alert(&self, message: &str) {
        let mut inner = self.lock();
        inner.snapshot.alerts.push(message.to_string());
        inner.pending_alerts.push_back(message.to_string());
    }
}
