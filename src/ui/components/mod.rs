//! ShadCN-style reusable UI components.
//!
//! Each component renders to an HTML string. Text arguments are escaped by
//! the component; arguments named `*_html` or `inner` are trusted markup
//! produced by other components.
//!
//! # Components
//!
//! - [`button`], [`link_button`]: Clickable button with variants
//! - [`card`], [`card_header`], [`card_content`]: Card container
//! - [`text_input`]: Text input field
//! - [`badge`]: Status badge/tag
//! - [`notice`]: Validation, miss and failure banner
//! - [`icons`]: Inline SVG icons

mod badge;
mod button;
mod card;
pub mod icons;
mod input;
mod notice;

pub use badge::{BadgeVariant, badge};
pub use button::{ButtonSize, ButtonVariant, button, link_button};
pub use card::{card, card_content, card_header};
pub use input::text_input;
pub use notice::notice;
