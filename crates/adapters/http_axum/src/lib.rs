//! # workshop-admin-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **workshop admin console** as server-side-rendered HTML
//!   (askama templates) that works with **zero JavaScript**
//! - Map form posts into `AdminController` calls (driving adapter)
//! - Stream PDF / XLSX exports as downloads
//!
//! ## No-JS console approach
//! - Every page is rendered server-side as complete HTML.
//! - Actions (open editor, submit, delete, reload, logout) are `<form>`
//!   elements that POST back and redirect (PRG pattern).
//! - Toasts queued by an action are drained by the next render, so each is
//!   shown exactly once.
//! - The delete confirmation is its own page.
//!
//! ## Dependency rule
//! Depends on `workshop-admin-app` (for the controller and port traits) and
//! `workshop-admin-domain` (for domain types used in request/response
//! mapping). Never leaks axum types into the domain.

pub mod dashboard;
pub mod error;
pub mod nav;
pub mod router;
pub mod state;
