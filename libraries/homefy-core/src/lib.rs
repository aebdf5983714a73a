//! Homefy Core
//!
//! Platform-agnostic catalog types shared by the Homefy libraries.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `TrackId`, `AudioFormat`
//! - **Catalog parsing**: `Track::from_json`, `tracks_from_json`
//! - **Error Handling**: `CoreError` and `Result`
//!
//! # Example
//!
//! ```rust
//! use homefy_core::Track;
//!
//! let track = Track::builder("b7f3", "My Favorite Song")
//!     .artist("Some Band")
//!     .album("Greatest Hits")
//!     .track_number(4)
//!     .length(212)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(track.formatted_length(), "03:32");
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use types::{format_seconds, tracks_from_json, AudioFormat, Track, TrackBuilder, TrackId};
