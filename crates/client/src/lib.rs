//! # Hey Bible client
//!
//! Async Rust client for the Hey Bible API: saved verses, user notes, and
//! AI-generated images, all read-only.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use heybible_client::{BibleApi, GetParams, HeyBibleClient, HeyBibleResult};
//!
//! #[tokio::main]
//! async fn main() -> HeyBibleResult<()> {
//!     // Build client
//!     let client = HeyBibleClient::builder()
//!         .api_key("hb-your-api-key")
//!         .build()?;
//!
//!     // First page of saved verses
//!     let verses = client
//!         .verses_get(&GetParams {
//!             limit: Some(10),
//!             ..Default::default()
//!         })
//!         .await?;
//!     println!("{verses:#}");
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod types;

// Re-export main client
pub use client::{BibleApi, HeyBibleClient, HeyBibleClientBuilder};
pub use config::ClientConfig;
pub use error::{HeyBibleError, HeyBibleResult};
pub use types::{GetParams, Resource, LIMIT_MAX, LIMIT_MIN};
