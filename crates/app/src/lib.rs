//! # workshop-admin-app
//!
//! Application layer — the admin view and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `WorkshopApi` — list, update, delete workshops on the remote server
//!   - `SessionStore` — read and clear the persisted session
//!   - `DocumentExporter` / `SpreadsheetExporter` — render export tables
//! - Hold the **admin view** state machine: cached collection, search query,
//!   editor, toasts, and the per-workflow request phases
//! - Consume network results through a single `reduce` step keyed by
//!   request tickets, so completions from a previous mount are dropped
//! - Drive the view asynchronously through `AdminController`, which never
//!   holds the view lock across a network call
//!
//! ## Dependency rule
//! Depends on `workshop-admin-domain` only (plus `tokio::sync` and
//! `tokio-util` for locking and cancellation).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod controller;
pub mod ports;
pub mod request;
pub mod session;
pub mod toast;
pub mod view;
