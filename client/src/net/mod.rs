//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` holds one function per backend endpoint; `types` defines the
//! thin response envelopes around the shared `records` payloads.

pub mod api;
pub mod types;
