pub mod api_utils;
pub mod components;
pub mod config;
pub mod form_view;
pub mod gallery;
pub mod icons;
pub mod list_utils;
pub mod modal;
pub mod scroll_lock;
pub mod timers;
pub mod toast;
