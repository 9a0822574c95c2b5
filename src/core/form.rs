//! # Plan Form Validation
//!
//! `FormValues` is what the user typed, untouched. `validate` turns it into a
//! `PlanRequest`, the only thing the generator ever sees.
//!
//! ```text
//! FormValues (raw strings)  →  validate()  →  PlanRequest (typed, trimmed)
//!                                  │
//!                                  └──→ ValidationError (first failing field)
//! ```

use std::fmt;

use crate::core::currency::Currency;

/// Minimum length (in characters, after trimming) of the free-text fields.
pub const MIN_TEXT_LEN: usize = 3;

/// Every input of the plan form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    DietaryPreferences,
    Goals,
    Restrictions,
    Budget,
    Weight,
    Height,
    BodyType,
    BodyFatPercentage,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::DietaryPreferences,
        Field::Goals,
        Field::Restrictions,
        Field::Budget,
        Field::Weight,
        Field::Height,
        Field::BodyType,
        Field::BodyFatPercentage,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::DietaryPreferences => "Dietary Preferences",
            Field::Goals => "Health Goals",
            Field::Restrictions => "Allergies & Restrictions",
            Field::Budget => "Weekly Budget",
            Field::Weight => "Weight (kg)",
            Field::Height => "Height (cm)",
            Field::BodyType => "Body Type",
            Field::BodyFatPercentage => "Body Fat (%)",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::DietaryPreferences => "e.g., Vegetarian, Low-carb",
            Field::Goals => "e.g., Weight loss, more energy",
            Field::Restrictions => "e.g., Peanuts, Gluten-free, none",
            Field::Budget => "150000",
            Field::Weight => "optional, e.g., 70",
            Field::Height => "optional, e.g., 175",
            Field::BodyType => "optional, e.g., Mesomorph",
            Field::BodyFatPercentage => "optional, e.g., 18",
        }
    }

    /// Body metrics may be left blank as a group.
    pub fn is_optional(self) -> bool {
        matches!(
            self,
            Field::Weight | Field::Height | Field::BodyType | Field::BodyFatPercentage
        )
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw form input, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues {
    pub dietary_preferences: String,
    pub goals: String,
    pub restrictions: String,
    pub budget: String,
    pub weight: String,
    pub height: String,
    pub body_type: String,
    pub body_fat_percentage: String,
}

impl FormValues {
    /// Empty form with the budget prefilled.
    pub fn with_budget(budget: f64) -> Self {
        Self {
            budget: format!("{budget}"),
            ..Default::default()
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::DietaryPreferences => &self.dietary_preferences,
            Field::Goals => &self.goals,
            Field::Restrictions => &self.restrictions,
            Field::Budget => &self.budget,
            Field::Weight => &self.weight,
            Field::Height => &self.height,
            Field::BodyType => &self.body_type,
            Field::BodyFatPercentage => &self.body_fat_percentage,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::DietaryPreferences => &mut self.dietary_preferences,
            Field::Goals => &mut self.goals,
            Field::Restrictions => &mut self.restrictions,
            Field::Budget => &mut self.budget,
            Field::Weight => &mut self.weight,
            Field::Height => &mut self.height,
            Field::BodyType => &mut self.body_type,
            Field::BodyFatPercentage => &mut self.body_fat_percentage,
        }
    }
}

/// Optional anthropometric data that refines the plan.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyMetrics {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub body_type: String,
    pub body_fat_percentage: Option<f64>,
}

/// A validated generation payload.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanRequest {
    pub dietary_preferences: String,
    pub goals: String,
    pub restrictions: String,
    /// Weekly budget, always > 0
    pub budget: f64,
    pub body: Option<BodyMetrics>,
    pub currency: Currency,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Free-text field shorter than `min` characters.
    TooShort { field: Field, min: usize },
    /// Numeric field that does not parse as a finite number.
    InvalidNumber { field: Field },
    /// Numeric field that must be strictly positive.
    NotPositive { field: Field },
    /// Percentage outside (0, 100).
    OutOfRange { field: Field },
    /// Some body metrics were given but this required one is blank.
    MissingBodyField { field: Field },
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            ValidationError::TooShort { field, .. }
            | ValidationError::InvalidNumber { field }
            | ValidationError::NotPositive { field }
            | ValidationError::OutOfRange { field }
            | ValidationError::MissingBodyField { field } => *field,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::TooShort { field, min } => {
                write!(f, "{field} must be at least {min} characters")
            }
            ValidationError::InvalidNumber { field } => write!(f, "{field} must be a number"),
            ValidationError::NotPositive { field } => {
                write!(f, "{field} must be a positive number")
            }
            ValidationError::OutOfRange { field } => {
                write!(f, "{field} must be between 0 and 100")
            }
            ValidationError::MissingBodyField { field } => {
                write!(f, "{field} is required when body metrics are provided")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate raw form input. Returns the first failing field.
pub fn validate(values: &FormValues, currency: Currency) -> Result<PlanRequest, ValidationError> {
    let dietary_preferences = required_text(Field::DietaryPreferences, &values.dietary_preferences)?;
    let goals = required_text(Field::Goals, &values.goals)?;
    let restrictions = required_text(Field::Restrictions, &values.restrictions)?;
    let budget = positive_number(Field::Budget, &values.budget)?;
    let body = body_metrics(values)?;

    Ok(PlanRequest {
        dietary_preferences,
        goals,
        restrictions,
        budget,
        body,
        currency,
    })
}

fn required_text(field: Field, raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.chars().count() < MIN_TEXT_LEN {
        return Err(ValidationError::TooShort {
            field,
            min: MIN_TEXT_LEN,
        });
    }
    Ok(trimmed.to_string())
}

/// Parse a number, ignoring `,`, `_` and whitespace used as digit grouping.
fn parse_number(field: Field, raw: &str) -> Result<f64, ValidationError> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, ',' | '_') && !c.is_whitespace())
        .collect();
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or(ValidationError::InvalidNumber { field })
}

fn positive_number(field: Field, raw: &str) -> Result<f64, ValidationError> {
    let value = parse_number(field, raw)?;
    if value <= 0.0 {
        return Err(ValidationError::NotPositive { field });
    }
    Ok(value)
}

fn body_metrics(values: &FormValues) -> Result<Option<BodyMetrics>, ValidationError> {
    let any_given = [
        &values.weight,
        &values.height,
        &values.body_type,
        &values.body_fat_percentage,
    ]
    .iter()
    .any(|v| !v.trim().is_empty());

    if !any_given {
        return Ok(None);
    }

    for field in [Field::Weight, Field::Height, Field::BodyType] {
        if values.get(field).trim().is_empty() {
            return Err(ValidationError::MissingBodyField { field });
        }
    }

    let weight_kg = positive_number(Field::Weight, &values.weight)?;
    let height_cm = positive_number(Field::Height, &values.height)?;

    let body_fat_percentage = match values.body_fat_percentage.trim() {
        "" => None,
        raw => {
            let pct = parse_number(Field::BodyFatPercentage, raw)?;
            if pct <= 0.0 || pct >= 100.0 {
                return Err(ValidationError::OutOfRange {
                    field: Field::BodyFatPercentage,
                });
            }
            Some(pct)
        }
    };

    Ok(Some(BodyMetrics {
        weight_kg,
        height_cm,
        body_type: values.body_type.trim().to_string(),
        body_fat_percentage,
    }))
}
