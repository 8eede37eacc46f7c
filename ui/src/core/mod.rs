//! Platform-agnostic logic: content model, link and locale resolution, and
//! the header menu state machine. Nothing here renders.

pub mod config;
pub mod content;
pub mod link;
pub mod locale_path;
pub mod locale_switch;
pub mod localized;
pub mod menu;
pub mod platform;
pub mod source;
pub mod timing;
