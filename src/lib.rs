//! chat-pager-rs: Ephemeral session cache for paginated chat search results
//!
//! When a search renders its first result into a chat message, this crate
//! keeps the cursor state needed to page through the remaining results with
//! forward/back buttons, and reclaims that state automatically once the
//! session outlives its TTL. The transport layer (command parsing, embed
//! construction, the chat client itself) stays outside: it feeds in
//! new-search and button-press events and renders whichever page the core
//! selects.
//!
//! # Architecture
//!
//! - [`config`]: Environment-driven expiry settings
//! - [`errors`]: Typed error hierarchy with user-facing message mapping
//! - [`session`]: Session records, keys, and result items
//! - [`pagination`]: Pure wraparound cursor arithmetic and token parsing
//! - [`store`]: Injectable concurrent session storage
//! - [`reaper`]: Periodic sweep evicting expired sessions
//! - [`controller`]: Lifecycle orchestration (create, press, expire, drain)
//! - [`models`]: Event and rendering DTOs exchanged with the transport layer
//!
//! # Example
//!
//! ```no_run
//! use chat_pager_rs::{ButtonPress, NewSearch, PagerConfig, PagerService, ResultItem};
//!
//! # async fn handle() -> chat_pager_rs::PagerResult<()> {
//! let service = PagerService::new(PagerConfig::load()?);
//!
//! let created = service.new_search(NewSearch {
//!     query: "rusty beaches".to_owned(),
//!     results: vec![ResultItem {
//!         title: "Rusty beach".to_owned(),
//!         source_url: "https://example.com/1".to_owned(),
//!         image_url: "https://example.com/1/full.png".to_owned(),
//!         thumbnail_url: "https://example.com/1/thumb.png".to_owned(),
//!     }],
//!     channel_id: "chan-1".to_owned(),
//!     message_id: "msg-1".to_owned(),
//! })?;
//!
//! let view = service.button_press(ButtonPress {
//!     session_key: created.session_key,
//!     direction: "next".to_owned(),
//! })?;
//! // hand `view` to the rendering layer
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod controller;
pub mod errors;
pub mod models;
pub mod pagination;
pub mod reaper;
pub mod session;
pub mod store;

pub use config::PagerConfig;
pub use controller::PagerService;
pub use errors::{PagerError, PagerResult};
pub use models::{ButtonPress, NewSearch, PageView, SearchCreated};
pub use pagination::Direction;
pub use session::{PageSnapshot, ResultItem, SessionKey, SessionRecord};
pub use store::{InMemoryStore, SessionStore};
