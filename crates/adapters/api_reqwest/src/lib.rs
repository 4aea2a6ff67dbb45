//! # workshop-admin-adapter-api-reqwest
//!
//! Remote workshop API adapter using [reqwest](https://docs.rs/reqwest).
//!
//! ## Responsibilities
//! - Implement the `WorkshopApi` port defined in `workshop-admin-app::ports`
//! - `GET /api/workshops` (JSON array), `PUT /api/workshops/{id}` (multipart),
//!   `DELETE /api/workshops/{id}`
//! - Build material download URLs (`/api/workshops/materials/{ref}`)
//! - Classify failures as transport, status, or decode errors
//!
//! ## Dependency rule
//! Depends on `workshop-admin-app` (for the port trait) and
//! `workshop-admin-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod client;
pub mod config;
pub mod error;

pub use client::ReqwestWorkshopApi;
pub use config::ApiConfig;
pub use error::ApiClientError;
