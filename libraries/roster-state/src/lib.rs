//! Roster - List State
//!
//! Platform-agnostic list controller for the Roster users form.
//!
//! This crate provides:
//! - `ListState`: confirmed users in display order plus a status message
//! - `ListController`: initialize / create / delete / dismiss intents
//! - Field-level draft validation before any request is sent
//! - Late-response handling after the controller is disposed
//! - A pluggable `DiagnosticSink` for remote failures
//!
//! # Architecture
//!
//! `roster-state` knows nothing about rendering:
//! - No terminal or widget code
//! - Remote access goes through the `EntityApi` trait from `roster-client`
//! - The rendering layer reads state through `snapshot()` or a `watch`
//!   subscription and never mutates it directly
//!
//! # Example
//!
//! ```rust,no_run
//! use roster_client::{ClientConfig, UsersClient};
//! use roster_core::{Draft, Field};
//! use roster_state::{ControllerOptions, CreateOutcome, ListController};
//! use std::sync::Arc;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let api = Arc::new(UsersClient::new(ClientConfig::default())?);
//! let controller = ListController::new(api, ControllerOptions::default());
//!
//! controller.initialize().await;
//!
//! match controller.submit_create(&Draft::new("", "bad", "carol")).await {
//!     CreateOutcome::Rejected(errors) => {
//!         assert!(errors.get(Field::Name).is_some());
//!     }
//!     other => println!("{other:?}"),
//! }
//!
//! if let Some(status) = controller.snapshot().status() {
//!     println!("{status}");
//!     controller.dismiss_status();
//! }
//! # Ok(())
//! # }
//! ```

mod controller;
mod sink;
mod state;

// Public exports
pub use controller::{ControllerOptions, CreateOutcome, DeleteOutcome, ListController, LoadOutcome};
pub use sink::{DiagnosticSink, TracingSink};
pub use state::{ListState, StatusMessage};
