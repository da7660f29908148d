//! Interactive session collection.
//!
//! This module drives the prompts that turn a user's answers into
//! [`ExerciseRecord`]s: startup profile capture, the body-part/exercise
//! selection state machine, and the outer loop that persists each completed
//! pass through the record store.
//!
//! Two invalid-selection policies coexist on purpose. A bad token in the
//! body-part multi-select is reported and skipped without aborting the rest
//! of the selection; a bad exercise index silently ends entry for that body
//! part. Empty passes are caught by the outer loop, which reports a generic
//! failure and starts the selection over.

use std::collections::BTreeSet;

use crate::prompt::{self, Console, Style};
use crate::store::DailyLogStore;
use crate::{BodyPart, ExerciseRecord, Result, SessionContext, UserProfile};

/// Collect height and weight via validated prompts and announce the BMI.
///
/// Called once at startup; the returned profile is immutable for the rest of
/// the process.
pub fn collect_profile<C: Console + ?Sized>(console: &mut C) -> Result<UserProfile> {
    let height_cm = prompt::positive_f64(console, "Enter your height in cm: ")?;
    let weight_kg = prompt::positive_f64(console, "Enter your weight in kg: ")?;

    let profile = UserProfile::from_measurements(height_cm, weight_kg);
    console.say(
        Style::Info,
        &format!("Your BMI is: {:.2} ({})", profile.bmi, profile.bmi_category),
    );

    tracing::debug!(bmi = profile.bmi, "Captured user profile");
    Ok(profile)
}

/// Run one collection pass: body-part multi-select, then per-part exercise
/// entry. Returns the accumulated records, possibly empty if every selection
/// was invalid.
pub fn collect_records<C: Console + ?Sized>(
    console: &mut C,
    ctx: &SessionContext,
) -> Result<Vec<ExerciseRecord>> {
    console.say(Style::Heading, "\n--- Select Body Parts You Trained ---");
    for (i, part) in BodyPart::ALL.iter().enumerate() {
        console.say(Style::Menu, &format!("{}. {}", i + 1, part));
    }

    let line = console.read_line(
        "Enter the numbers of the body parts you trained, separated by commas: ",
    )?;
    let selected = parse_body_part_selection(console, &line);

    let mut records = Vec::new();
    for part in selected {
        collect_for_part(console, ctx, part, &mut records)?;
    }

    tracing::info!(count = records.len(), "Collection pass finished");
    Ok(records)
}

/// Parse a comma-separated body-part selection.
///
/// Tokens are deduplicated and the surviving indices processed in ascending
/// numeric order, independent of input order. Each invalid token is reported
/// and skipped; it never aborts the rest of the selection.
fn parse_body_part_selection<C: Console + ?Sized>(console: &mut C, line: &str) -> Vec<BodyPart> {
    let mut indices = BTreeSet::new();
    for token in line.split(',') {
        match prompt::parse_menu_choice(token, BodyPart::ALL.len()) {
            Some(index) => {
                indices.insert(index);
            }
            None => {
                console.say(
                    Style::Error,
                    "Invalid body part selection. Please select a valid number.",
                );
            }
        }
    }

    indices
        .into_iter()
        .filter_map(BodyPart::from_menu_index)
        .collect()
}

/// Exercise-entry loop for one body part.
///
/// An invalid exercise index ends the loop for this part without a message of
/// its own; an empty overall pass is reported by the caller.
fn collect_for_part<C: Console + ?Sized>(
    console: &mut C,
    ctx: &SessionContext,
    part: BodyPart,
    records: &mut Vec<ExerciseRecord>,
) -> Result<()> {
    loop {
        console.say(
            Style::Heading,
            &format!("\n--- Select Exercises for {} ---", part),
        );
        let exercises = ctx.catalog.exercises(part);
        for (i, name) in exercises.iter().enumerate() {
            console.say(Style::Menu, &format!("{}. {}", i + 1, name));
        }

        let choice = console.read_line("Enter the number of the exercise you performed: ")?;
        let exercise = match prompt::parse_menu_choice(&choice, exercises.len()) {
            Some(index) => exercises[index - 1].clone(),
            None => {
                tracing::debug!(%part, input = %choice.trim(), "Invalid exercise index, ending entry for this part");
                return Ok(());
            }
        };

        let weight_kg = prompt::positive_f64(console, "Enter the weight used (in kg): ")?;
        let reps = prompt::positive_u32(console, "Enter the number of reps: ")?;
        let sets = prompt::positive_u32(console, "Enter the number of sets: ")?;

        records.push(ExerciseRecord {
            recorded_at: chrono::Local::now(),
            body_part: part,
            exercise,
            weight_kg,
            reps,
            sets,
        });

        if !prompt::yes_no(console, "Add another exercise for the same body part?")? {
            return Ok(());
        }
    }
}

/// Outer session loop: collect, persist, ask to go again.
///
/// An empty pass reports a generic failure and restarts collection rather
/// than terminating; only an explicit "no" ends the loop.
pub fn run_session_loop<C: Console + ?Sized>(
    console: &mut C,
    ctx: &SessionContext,
    store: &DailyLogStore,
) -> Result<()> {
    loop {
        let records = collect_records(console, ctx)?;
        if records.is_empty() {
            console.say(Style::Error, "Something went wrong, please start over.");
            continue;
        }

        let path = store.append(&records, &ctx.profile)?;
        console.say(
            Style::Success,
            &format!("Data successfully saved to: {}", path.display()),
        );

        if !prompt::yes_no(
            console,
            "Would you like to enter exercises for another set of body parts?",
        )? {
            return Ok(());
        }
    }
}
