//! Daily log persistence.
//!
//! One CSV file per calendar date. The header is written only when the file
//! is created; every subsequent save that day appends rows below it. Each row
//! joins the startup profile fields with one exercise record.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};

use crate::config::FileExtension;
use crate::{ExerciseRecord, Result, UserProfile};

/// Fixed column layout of a daily log file.
///
/// Two columns are both named `Weight (kg)`: the profile body weight and the
/// per-set exercise weight. This mirrors the published format and is not a
/// defect.
pub const HEADERS: [&str; 10] = [
    "Date",
    "Height (cm)",
    "Weight (kg)",
    "BMI",
    "BMI Category",
    "Trained Body Part",
    "Exercise",
    "Weight (kg)",
    "Reps",
    "Sets",
];

/// A row in the daily log
#[derive(Debug, serde::Serialize)]
struct CsvRow {
    date: String,
    height_cm: String,
    weight_kg: String,
    bmi: String,
    bmi_category: String,
    body_part: String,
    exercise: String,
    set_weight_kg: String,
    reps: u32,
    sets: u32,
}

impl CsvRow {
    fn new(record: &ExerciseRecord, profile: &UserProfile) -> Self {
        CsvRow {
            date: record.recorded_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            height_cm: fmt_number(profile.height_cm),
            weight_kg: fmt_number(profile.weight_kg),
            bmi: format!("{:.2}", profile.bmi),
            bmi_category: profile.bmi_category.to_string(),
            body_part: record.body_part.to_string(),
            exercise: record.exercise.clone(),
            set_weight_kg: fmt_number(record.weight_kg),
            reps: record.reps,
            sets: record.sets,
        }
    }
}

/// Render a float without a trailing `.0` for whole values
fn fmt_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Maps a calendar date to its log file and appends rows to it
#[derive(Clone, Debug)]
pub struct DailyLogStore {
    dir: PathBuf,
    extension: FileExtension,
}

impl DailyLogStore {
    pub fn new(dir: impl Into<PathBuf>, extension: FileExtension) -> Self {
        Self {
            dir: dir.into(),
            extension,
        }
    }

    /// Directory holding the daily log files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Log file path for a given date: `<dir>/<YYYY-MM-DD>.<ext>`
    pub fn log_path(&self, date: NaiveDate) -> PathBuf {
        self.dir
            .join(format!("{}.{}", date.format("%Y-%m-%d"), self.extension.as_str()))
    }

    /// Append records to today's log file, creating it (header included) on
    /// the first save of the day. Returns the resolved path for the success
    /// report.
    pub fn append(&self, records: &[ExerciseRecord], profile: &UserProfile) -> Result<PathBuf> {
        let path = self.log_path(Local::now().date_naive());

        // Existence decides whether the header is written, so check before
        // opening creates the file.
        let existed = path.exists();

        std::fs::create_dir_all(&self.dir)?;
        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        if !existed {
            writer.write_record(HEADERS)?;
        }

        for record in records {
            writer.serialize(CsvRow::new(record, profile))?;
        }

        writer.flush()?;
        let file = writer
            .into_inner()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        file.sync_all()?;

        tracing::info!(rows = records.len(), path = %path.display(), "Appended to daily log");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BodyPart;

    fn test_profile() -> UserProfile {
        UserProfile::from_measurements(180.0, 80.0)
    }

    fn test_record(part: BodyPart, exercise: &str, weight: f64) -> ExerciseRecord {
        ExerciseRecord {
            recorded_at: Local::now(),
            body_part: part,
            exercise: exercise.into(),
            weight_kg: weight,
            reps: 10,
            sets: 3,
        }
    }

    #[test]
    fn test_path_follows_date_and_extension() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 28).unwrap();

        let store = DailyLogStore::new("/tmp/gym", FileExtension::Csv);
        assert_eq!(
            store.log_path(date),
            PathBuf::from("/tmp/gym/2026-08-28.csv")
        );

        let store = DailyLogStore::new("/tmp/gym", FileExtension::Xls);
        assert_eq!(
            store.log_path(date),
            PathBuf::from("/tmp/gym/2026-08-28.xls")
        );
    }

    #[test]
    fn test_first_append_writes_header_once() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = DailyLogStore::new(temp_dir.path(), FileExtension::Csv);
        let profile = test_profile();

        let path = store
            .append(&[test_record(BodyPart::Chest, "Bench Press", 60.0)], &profile)
            .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Date,Height (cm),Weight (kg),BMI,BMI Category,Trained Body Part,Exercise,Weight (kg),Reps,Sets"
        );
        assert_eq!(lines.count(), 1);
    }

    #[test]
    fn test_header_is_idempotent_across_appends() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = DailyLogStore::new(temp_dir.path(), FileExtension::Csv);
        let profile = test_profile();

        store
            .append(&[test_record(BodyPart::Chest, "Bench Press", 60.0)], &profile)
            .unwrap();
        let path = store
            .append(
                &[
                    test_record(BodyPart::Back, "Lat Pull Down", 50.0),
                    test_record(BodyPart::Legs, "Leg Press", 120.0),
                ],
                &profile,
            )
            .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let header_count = contents
            .lines()
            .filter(|line| line.starts_with("Date,"))
            .count();
        assert_eq!(header_count, 1);
        assert_eq!(contents.lines().count(), 4); // header + 3 rows
    }

    #[test]
    fn test_row_fidelity_to_profile() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = DailyLogStore::new(temp_dir.path(), FileExtension::Csv);
        let profile = test_profile();

        store
            .append(&[test_record(BodyPart::Chest, "Bench Press", 60.0)], &profile)
            .unwrap();
        let path = store
            .append(&[test_record(BodyPart::Back, "Cable Rows", 45.5)], &profile)
            .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        for line in contents.lines().skip(1) {
            let fields: Vec<_> = line.split(',').collect();
            assert_eq!(fields.len(), 10);
            assert_eq!(&fields[1..5], &["180", "80", "24.69", "Normal weight"]);
        }
    }

    #[test]
    fn test_row_contents() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = DailyLogStore::new(temp_dir.path(), FileExtension::Csv);
        let profile = test_profile();

        let record = test_record(BodyPart::Chest, "Incline Smith Press", 60.0);
        let stamp = record.recorded_at.format("%Y-%m-%d %H:%M:%S").to_string();
        let path = store.append(&[record], &profile).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let row = contents.lines().nth(1).unwrap();
        assert_eq!(
            row,
            format!(
                "{},180,80,24.69,Normal weight,Chest,Incline Smith Press,60,10,3",
                stamp
            )
        );
    }

    #[test]
    fn test_fractional_weights_keep_precision() {
        assert_eq!(fmt_number(62.5), "62.5");
        assert_eq!(fmt_number(180.0), "180");
        assert_eq!(fmt_number(80.0), "80");
    }

    #[test]
    fn test_obese_profile_category_in_rows() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = DailyLogStore::new(temp_dir.path(), FileExtension::Csv);
        let profile = UserProfile::from_measurements(170.0, 120.0);

        let path = store
            .append(&[test_record(BodyPart::Legs, "Hack Squat", 80.0)], &profile)
            .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.lines().nth(1).unwrap().contains("Obesity"));
    }
}
