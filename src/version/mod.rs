//! Version parsing, normalization and comparison
//!
//! This module turns free-form numeric version strings into a normalized,
//! comparable [`Version`] and provides guards that run code only when a
//! version threshold is met.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ IntoVersion │────▶│    Parse    │────▶│   Version   │
//! │  (coerce)   │     │ (normalize) │     │  (compare)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//!                                                ▼
//!                                         ┌─────────────┐
//!                                         │    Guard    │
//!                                         │(conditional)│
//!                                         └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`component`]: A single unbounded numeric component
//! - [`error`]: The `MalformedVersion` error
//! - [`guard`]: Guard helpers (`if_between`, `if_greater_than`, ...)
//! - [`like`]: The `IntoVersion` coercion trait
//! - [`parse`]: Digit-run extraction and trailing zero stripping
//! - [`types`]: The `Version` value type

pub mod component;
pub mod error;
pub mod guard;
pub mod like;
pub mod parse;
pub mod types;

pub use component::Component;
pub use error::MalformedVersion;
pub use like::IntoVersion;
pub use types::{MIN_DISPLAY_WIDTH, Version};
