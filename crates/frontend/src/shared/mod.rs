pub mod api_utils;
pub mod components;
pub mod download;
pub mod i18n;
pub mod notifications;
