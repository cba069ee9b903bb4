//! Error types for the Muddler library.
//!
//! This crate provides the foundation error types used throughout the Muddler
//! ecosystem.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use muddler_error::{MuddlerResult, GenerationUnavailable};
//!
//! fn fetch_data() -> MuddlerResult<String> {
//!     Err(GenerationUnavailable::new("Connection refused"))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
#[cfg(feature = "database")]
mod database;
mod error;
mod generation;
mod recipe;

pub use config::ConfigError;
#[cfg(feature = "database")]
pub use database::{DatabaseError, DatabaseErrorKind};
pub use error::{MuddlerError, MuddlerErrorKind, MuddlerResult};
pub use generation::GenerationUnavailable;
pub use recipe::{RecipeParseError, RecipeParseErrorKind};
