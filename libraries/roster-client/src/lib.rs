//! Roster Client
//!
//! HTTP client library for a REST-like users collection.
//!
//! # Features
//!
//! - **List**: fetch the whole collection as returned by the server
//! - **Create**: mint a UUID v4 id client-side and post the new user
//! - **Delete**: remove a user by id
//!
//! Every transport or non-2xx failure is normalized into
//! [`ClientError::RemoteUnavailable`], tagged with the [`Operation`] that
//! failed and carrying the underlying [`RemoteCause`].
//!
//! # Example
//!
//! ```ignore
//! use roster_client::{ClientConfig, EntityApi, UsersClient};
//! use roster_core::Draft;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = UsersClient::new(ClientConfig::default())?;
//!
//!     let created = client.create(&Draft::new("Bob", "bob@x.com", "bob")).await?;
//!     println!("Created {} ({})", created.name, created.id);
//!
//!     for user in client.list_all().await? {
//!         println!("{} <{}>", user.username, user.email);
//!     }
//!
//!     client.delete(&created.id).await?;
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

// Re-export main types
pub use client::{EntityApi, UsersClient};
pub use error::{ClientError, Operation, RemoteCause, Result};
pub use types::{ClientConfig, DEFAULT_BASE_URL};
