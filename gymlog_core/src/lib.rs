#![forbid(unsafe_code)]

//! Core domain model and business logic for the Gymlog workout tracker.
//!
//! This crate provides:
//! - Domain types (body parts, exercise records, user profile)
//! - BMI calculation and classification
//! - Exercise catalog
//! - Validated interactive prompts
//! - Session collection state machine
//! - Daily CSV log persistence

pub mod types;
pub mod error;
pub mod bmi;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod prompt;
pub mod session;
pub mod store;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use bmi::{calculate_bmi, categorize};
pub use catalog::{build_default_catalog, get_default_catalog, ExerciseCatalog};
pub use config::{Config, FileExtension};
pub use prompt::{Console, Style};
pub use session::{collect_profile, collect_records, run_session_loop};
pub use store::DailyLogStore;
