//! Event and rendering DTOs exchanged with the chat-transport layer
//!
//! The transport layer owns command parsing, embed construction, and the
//! network client; these types are the full contract between it and the
//! session core. All are serde-derived so the transport can hand results
//! straight through from its search-API responses.

use serde::{Deserialize, Serialize};

use crate::session::{ResultItem, SessionKey};

/// Inbound: a search completed and its results were rendered
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSearch {
    /// Search text the user submitted
    pub query: String,
    /// Ordered results to page through
    pub results: Vec<ResultItem>,
    /// Channel containing the rendered message
    pub channel_id: String,
    /// Rendered message's ID; doubles as the session key
    pub message_id: String,
}

/// Outbound: session created for a new search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchCreated {
    /// Key for subsequent button presses
    pub session_key: SessionKey,
    /// Index of the first rendered page (always 0)
    pub first_index: usize,
}

/// Inbound: a pagination button was pressed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ButtonPress {
    /// Session key from the rendered message
    pub session_key: SessionKey,
    /// Opaque direction token from the button's custom ID
    pub direction: String,
}

/// Outbound: which result to render next
///
/// The rendering layer formats title, URL, image, and the "page X/Y" footer
/// from these fields; the core never formats display text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageView {
    /// Cursor after the press
    pub index: usize,
    /// Total result count (the "Y" in "page X/Y")
    pub total: usize,
    /// Result to display
    pub item: ResultItem,
}

#[cfg(test)]
mod tests {
    use super::ButtonPress;

    #[test]
    fn button_press_deserializes_from_transport_json() {
        let event: ButtonPress =
            serde_json::from_str(r#"{"session_key":"msg-42","direction":"next"}"#)
                .expect("transport payload must deserialize");
        assert_eq!(event.session_key.as_str(), "msg-42");
        assert_eq!(event.direction, "next");
    }
}
