//! Application state shared via Leptos context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` is the single source of truth for the session; `notify` carries
//! transient notices. Everything else is page-local.

pub mod auth;
pub mod notify;
