//! # workshop-admin-domain
//!
//! Pure domain model for the workshop admin console.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **Workshops** (server-owned records with an optional material file)
//! - Define **Drafts** (the editable subset of a workshop plus an optional
//!   replacement file) and their validation rules
//! - Define the **Search** query used to narrow the displayed list
//! - Define the **Session** identity value read from persisted storage
//! - Define **Export tables** (the column/row shapes handed to exporters)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod draft;
pub mod export;
pub mod search;
pub mod session;
pub mod workshop;
