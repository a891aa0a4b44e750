//! Booking Portal - single-page application shell
//!
//! The root of a localized booking site. This library provides:
//! - Message catalogs with per-locale text direction
//! - A static route table with an authentication guard
//! - On-demand view loading with caching and retry
//! - The Dioxus app: contexts, global widgets and views

pub mod app;
pub mod auth;
pub mod config;
pub mod direction;
pub mod i18n;
pub mod loader;
pub mod routing;
