//! # Renderer
//!
//! Writes an HTML fragment into the result region, marks the region visible
//! and brings it into view. The fragment is opaque: it is never parsed,
//! escaped or revalidated here.

use log::debug;

use crate::core::page::{Page, ScrollIntoView};

/// State class that makes the result region visible.
pub const VISIBLE_CLASS: &str = "visible";

pub const ERROR_HEADING: &str = "Something went wrong";
pub const RETRY_MESSAGE: &str = "We couldn't generate an explanation. Please try again.";
pub const UNKNOWN_ERROR: &str = "An unknown error occurred.";

pub fn render(page: &dyn Page, html: &str) {
    debug!("Rendering {} bytes into result region", html.len());
    page.set_result_html(html);
    page.add_result_class(VISIBLE_CLASS);
    page.scroll_result_into_view(ScrollIntoView::SMOOTH_NEAREST);
}

/// Inline error fragment. An empty message is replaced with a generic one.
pub fn error_fragment(message: &str) -> String {
    let detail = if message.trim().is_empty() {
        UNKNOWN_ERROR
    } else {
        message
    };
    format!(
        "<div class=\"error\">\n\
         <h3>{ERROR_HEADING}</h3>\n\
         <p>{RETRY_MESSAGE}</p>\n\
         <p class=\"error-detail\">{detail}</p>\n\
         </div>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::page::PageModel;

    #[test]
    fn test_render_replaces_and_shows() {
        let page = PageModel::new("Explain");
        render(&page, "<p>old</p>");
        render(&page, "<p>new</p>");

        let snap = page.snapshot();
        assert_eq!(snap.result_html, "<p>new</p>");
        assert!(snap.has_result_class(VISIBLE_CLASS));
        assert_eq!(snap.last_scroll, Some(ScrollIntoView::SMOOTH_NEAREST));
    }

    #[test]
    fn test_render_leaves_form_alone() {
        let page = PageModel::new("Explain");
        page.set_topic("Gravity");
        render(&page, "<p>x</p>");

        let snap = page.snapshot();
        assert_eq!(snap.topic, "Gravity");
        assert_eq!(snap.submit_label, "Explain");
        assert!(snap.submit_enabled);
    }

    #[test]
    fn test_error_fragment_contains_message() {
        let html = error_fragment("Server error: 500 Internal Server Error");
        assert!(html.contains(ERROR_HEADING));
        assert!(html.contains(RETRY_MESSAGE));
        assert!(html.contains("Server error: 500"));
    }

    #[test]
    fn test_error_fragment_unknown_message() {
        let html = error_fragment("");
        assert!(html.contains(UNKNOWN_ERROR));
    }
}
