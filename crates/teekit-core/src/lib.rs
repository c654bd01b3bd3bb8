//! # Teekit Core
//!
//! Core types, errors, and configuration for the Teekit customization
//! engine. Provides the fundamental building blocks shared by the design
//! surface and the checkout pipeline:
//!
//! - Geometry value types (`Point`, `Size`)
//! - The `PrintSide` type identifying the physical face of a product
//! - The error taxonomy (`DesignError`, `UploadError`, `CaptureError`,
//!   `CheckoutError`) unified into a single `Error`
//! - Canvas and preview constants
//! - `CustomizerConfig` for tuning a customization session

pub mod config;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod types;

pub use config::{CustomizerConfig, TextDefaults};
pub use error::{CaptureError, CheckoutError, DesignError, Error, Result, UploadError};
pub use geometry::{Point, Size};
pub use types::PrintSide;
