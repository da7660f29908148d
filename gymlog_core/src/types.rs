//! Core domain types for the Gymlog workout tracker.
//!
//! This module defines the fundamental types used throughout the system:
//! - Body parts and BMI categories
//! - The user profile captured at startup
//! - Exercise records produced by a session
//! - The session context threaded through collection and persistence

use chrono::{DateTime, Local};
use std::fmt;

use crate::catalog::ExerciseCatalog;

// ============================================================================
// Body Parts
// ============================================================================

/// A trainable muscle group
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BodyPart {
    Chest,
    Back,
    Arms,
    Shoulders,
    Legs,
}

impl BodyPart {
    /// All body parts in canonical menu order (selection indices are 1-based
    /// positions into this slice).
    pub const ALL: [BodyPart; 5] = [
        BodyPart::Chest,
        BodyPart::Back,
        BodyPart::Arms,
        BodyPart::Shoulders,
        BodyPart::Legs,
    ];

    /// Body part for a 1-based menu index, if in range
    pub fn from_menu_index(index: usize) -> Option<BodyPart> {
        (1..=Self::ALL.len()).contains(&index).then(|| Self::ALL[index - 1])
    }

    pub fn name(&self) -> &'static str {
        match self {
            BodyPart::Chest => "Chest",
            BodyPart::Back => "Back",
            BodyPart::Arms => "Arms",
            BodyPart::Shoulders => "Shoulders",
            BodyPart::Legs => "Legs",
        }
    }
}

impl fmt::Display for BodyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// BMI
// ============================================================================

/// BMI classification band
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obesity",
        };
        f.write_str(label)
    }
}

/// Anthropometric data captured once at startup
///
/// Immutable for the process lifetime; its fields are attached to every
/// persisted row.
#[derive(Clone, Debug, PartialEq)]
pub struct UserProfile {
    pub height_cm: f64,
    pub weight_kg: f64,
    pub bmi: f64,
    pub bmi_category: BmiCategory,
}

impl UserProfile {
    /// Build a profile from validated measurements (caller guarantees both
    /// are positive).
    pub fn from_measurements(height_cm: f64, weight_kg: f64) -> Self {
        let (bmi, bmi_category) = crate::bmi::calculate_bmi(weight_kg, height_cm);
        Self {
            height_cm,
            weight_kg,
            bmi,
            bmi_category,
        }
    }
}

// ============================================================================
// Exercise Records
// ============================================================================

/// One performed exercise with its set parameters
///
/// Owned by the session collector until handed to the record store for
/// serialization.
#[derive(Clone, Debug, PartialEq)]
pub struct ExerciseRecord {
    pub recorded_at: DateTime<Local>,
    pub body_part: BodyPart,
    pub exercise: String,
    pub weight_kg: f64,
    pub reps: u32,
    pub sets: u32,
}

// ============================================================================
// Session Context
// ============================================================================

/// Immutable context for one process run, built once at startup and passed
/// explicitly into the collector and store calls.
#[derive(Clone, Debug)]
pub struct SessionContext {
    pub profile: UserProfile,
    pub catalog: ExerciseCatalog,
}
