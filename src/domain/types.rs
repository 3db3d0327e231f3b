//! # Domain Types
//!
//! The construction project form and the constraints on each of its fields.

use clap::ValueEnum;
use serde::Deserialize;
use std::fmt;

pub const MIN_BUDGET: u64 = 10_000;
pub const MIN_DURATION: u32 = 1;
pub const MIN_WORKERS: u32 = 1;
pub const MAX_WORKERS: u32 = 500;
pub const DEFAULT_WORKERS: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    #[default]
    House,
    Apartment,
    Bridge,
    Road,
    Mall,
    Office,
}

impl ProjectType {
    pub const ALL: [ProjectType; 6] = [
        ProjectType::House,
        ProjectType::Apartment,
        ProjectType::Bridge,
        ProjectType::Road,
        ProjectType::Mall,
        ProjectType::Office,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            ProjectType::House => "House",
            ProjectType::Apartment => "Apartment",
            ProjectType::Bridge => "Bridge",
            ProjectType::Road => "Road",
            ProjectType::Mall => "Mall",
            ProjectType::Office => "Office",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim();
        // Allow picking by position in the list as well as by name
        if let Ok(index) = s.parse::<usize>() {
            return index.checked_sub(1).and_then(|i| Self::ALL.get(i).copied());
        }
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Names of the editable form fields, as accepted by `.set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectField {
    Name,
    Type,
    Budget,
    Duration,
    Workers,
    Materials,
    Location,
}

impl ProjectField {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "name" => Some(ProjectField::Name),
            "type" | "project_type" => Some(ProjectField::Type),
            "budget" => Some(ProjectField::Budget),
            "duration" | "days" => Some(ProjectField::Duration),
            "workers" => Some(ProjectField::Workers),
            "materials" => Some(ProjectField::Materials),
            "location" => Some(ProjectField::Location),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ProjectField::Name => "name",
            ProjectField::Type => "type",
            ProjectField::Budget => "budget",
            ProjectField::Duration => "duration",
            ProjectField::Workers => "workers",
            ProjectField::Materials => "materials",
            ProjectField::Location => "location",
        }
    }
}

/// Rejected form input. The previous field value is left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    UnknownField(String),
    UnknownProjectType(String),
    NotANumber { field: &'static str, value: String },
    BudgetTooLow(u64),
    DurationTooShort(u32),
    WorkersOutOfRange(u32),
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::UnknownField(name) => write!(f, "unknown field `{name}`"),
            FieldError::UnknownProjectType(value) => {
                let options: Vec<&str> = ProjectType::ALL.iter().map(|t| t.as_str()).collect();
                write!(
                    f,
                    "unknown project type `{value}` (expected one of: {})",
                    options.join(", ")
                )
            }
            FieldError::NotANumber { field, value } => {
                write!(f, "{field} must be a whole number, got `{value}`")
            }
            FieldError::BudgetTooLow(v) => {
                write!(f, "budget must be at least {MIN_BUDGET}, got {v}")
            }
            FieldError::DurationTooShort(v) => {
                write!(f, "duration must be at least {MIN_DURATION} day, got {v}")
            }
            FieldError::WorkersOutOfRange(v) => write!(
                f,
                "workers must be between {MIN_WORKERS} and {MAX_WORKERS}, got {v}"
            ),
        }
    }
}

impl std::error::Error for FieldError {}

/// The project form. Lives only as long as the session that edits it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDetails {
    pub name: String,
    pub project_type: ProjectType,
    pub budget: u64,
    pub duration: u32,
    pub workers: u32,
    pub materials: String,
    pub location: String,
}

impl Default for ProjectDetails {
    fn default() -> Self {
        Self {
            name: String::new(),
            project_type: ProjectType::default(),
            budget: MIN_BUDGET,
            duration: MIN_DURATION,
            workers: DEFAULT_WORKERS,
            materials: String::new(),
            location: String::new(),
        }
    }
}

impl ProjectDetails {
    /// Parse and apply a single field value.
    pub fn set_field(&mut self, field: ProjectField, value: &str) -> Result<(), FieldError> {
        let value = value.trim();
        match field {
            ProjectField::Name => self.name = value.to_string(),
            ProjectField::Type => {
                self.project_type = ProjectType::from_str(value)
                    .ok_or_else(|| FieldError::UnknownProjectType(value.to_string()))?;
            }
            ProjectField::Budget => {
                let budget = parse_number::<u64>("budget", value)?;
                check_budget(budget)?;
                self.budget = budget;
            }
            ProjectField::Duration => {
                let duration = parse_number::<u32>("duration", value)?;
                check_duration(duration)?;
                self.duration = duration;
            }
            ProjectField::Workers => {
                let workers = parse_number::<u32>("workers", value)?;
                check_workers(workers)?;
                self.workers = workers;
            }
            ProjectField::Materials => self.materials = value.to_string(),
            ProjectField::Location => self.location = value.to_string(),
        }
        Ok(())
    }

    /// Same as `set_field`, resolving the field by name first.
    pub fn set_named(&mut self, name: &str, value: &str) -> Result<ProjectField, FieldError> {
        let field =
            ProjectField::from_str(name).ok_or_else(|| FieldError::UnknownField(name.to_string()))?;
        self.set_field(field, value)?;
        Ok(field)
    }

    /// Checks every numeric constraint. Used for values that did not come through `set_field`.
    pub fn validate(&self) -> Result<(), FieldError> {
        check_budget(self.budget)?;
        check_duration(self.duration)?;
        check_workers(self.workers)
    }
}

fn parse_number<T: std::str::FromStr>(field: &'static str, value: &str) -> Result<T, FieldError> {
    value
        .replace(['_', ','], "")
        .parse::<T>()
        .map_err(|_| FieldError::NotANumber {
            field,
            value: value.to_string(),
        })
}

fn check_budget(budget: u64) -> Result<(), FieldError> {
    if budget < MIN_BUDGET {
        return Err(FieldError::BudgetTooLow(budget));
    }
    Ok(())
}

fn check_duration(duration: u32) -> Result<(), FieldError> {
    if duration < MIN_DURATION {
        return Err(FieldError::DurationTooShort(duration));
    }
    Ok(())
}

fn check_workers(workers: u32) -> Result<(), FieldError> {
    if !(MIN_WORKERS..=MAX_WORKERS).contains(&workers) {
        return Err(FieldError::WorkersOutOfRange(workers));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_type_from_str() {
        assert_eq!(ProjectType::from_str("house"), Some(ProjectType::House));
        assert_eq!(ProjectType::from_str(" Bridge "), Some(ProjectType::Bridge));
        assert_eq!(ProjectType::from_str("OFFICE"), Some(ProjectType::Office));
        assert_eq!(ProjectType::from_str("3"), Some(ProjectType::Bridge));
        assert_eq!(ProjectType::from_str("0"), None);
        assert_eq!(ProjectType::from_str("7"), None);
        assert_eq!(ProjectType::from_str("castle"), None);
    }

    #[test]
    fn test_defaults_match_form_minimums() {
        let details = ProjectDetails::default();
        assert_eq!(details.project_type, ProjectType::House);
        assert_eq!(details.budget, 10_000);
        assert_eq!(details.duration, 1);
        assert_eq!(details.workers, 20);
        assert!(details.validate().is_ok());
    }

    #[test]
    fn test_set_field_rejects_out_of_range() {
        let mut details = ProjectDetails::default();

        assert_eq!(
            details.set_field(ProjectField::Budget, "9999"),
            Err(FieldError::BudgetTooLow(9999))
        );
        assert_eq!(
            details.set_field(ProjectField::Duration, "0"),
            Err(FieldError::DurationTooShort(0))
        );
        assert_eq!(
            details.set_field(ProjectField::Workers, "501"),
            Err(FieldError::WorkersOutOfRange(501))
        );
        assert_eq!(
            details.set_field(ProjectField::Workers, "0"),
            Err(FieldError::WorkersOutOfRange(0))
        );
        assert!(matches!(
            details.set_field(ProjectField::Budget, "lots"),
            Err(FieldError::NotANumber { field: "budget", .. })
        ));

        // Nothing changed
        assert_eq!(details, ProjectDetails::default());
    }

    #[test]
    fn test_set_named_accepts_valid_values() {
        let mut details = ProjectDetails::default();
        details.set_named("budget", "2,500,000").unwrap();
        details.set_named("type", "road").unwrap();
        details.set_named("workers", "500").unwrap();
        details.set_named("location", "  Pune  ").unwrap();

        assert_eq!(details.budget, 2_500_000);
        assert_eq!(details.project_type, ProjectType::Road);
        assert_eq!(details.workers, 500);
        assert_eq!(details.location, "Pune");
    }

    #[test]
    fn test_set_named_unknown_field() {
        let mut details = ProjectDetails::default();
        assert_eq!(
            details.set_named("colour", "red"),
            Err(FieldError::UnknownField("colour".to_string()))
        );
    }
}
