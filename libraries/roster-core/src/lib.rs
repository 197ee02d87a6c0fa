//! Roster Core
//!
//! Platform-agnostic data model and validation for Roster.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Entity` (a user record), `Draft`, `EntityId`
//! - **Validation**: field-level rules for creation drafts, reported as
//!   `ValidationErrors`
//!
//! # Example
//!
//! ```rust
//! use roster_core::{validate_draft, Draft, Field, Violation};
//!
//! let draft = Draft::new("", "bad", "carol");
//! let errors = validate_draft(&draft).unwrap_err();
//!
//! assert_eq!(errors.get(Field::Name), Some(Violation::Required));
//! assert_eq!(errors.get(Field::Email), Some(Violation::InvalidFormat));
//! assert!(errors.get(Field::Username).is_none());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod types;
pub mod validation;

pub use types::{Draft, Entity, EntityId};
pub use validation::{validate_draft, Field, ValidationErrors, Violation};
