// file: src/form/mod.rs
// description: search form state, action handler and render instructions
// reference: internal module structure

pub mod handler;
pub mod notification;
pub mod render;
pub mod state;

pub use handler::{FormOutcome, handle_search};
pub use notification::{Notification, NotificationKind, NotificationLevel};
pub use render::{SegmentStyle, StyledSegment, highlight_paragraph, plain_text, render_results};
pub use state::FormState;
