use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

/// Effort level for reasoning tokens
/// Higher effort = more reasoning tokens = better quality but higher cost
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Effort {
    /// Thorough analysis - model takes more time to reason
    High,
    /// Balanced reasoning
    Medium,
    /// Quick thinking - faster but less thorough
    Low,
    /// Model decides whether and how much to reason (default)
    #[default]
    Auto,
    /// Disables reasoning entirely
    None,
}

impl Effort {
    /// Returns a human-readable label for display
    pub fn label(self) -> &'static str {
        match self {
            Effort::High => "High",
            Effort::Medium => "Medium",
            Effort::Low => "Low",
            Effort::Auto => "Auto",
            Effort::None => "Off",
        }
    }
}

/// The three texts a successful generation produces.
///
/// Also the JSON shape the model is asked to answer with, so the schema
/// sent to the provider is derived from this struct.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanResult {
    /// The weekly meal plan, one line per heading, meal or dish
    pub meal_plan: String,
    /// The consolidated shopping list grouped by category
    pub shopping_list: String,
    /// Total estimated cost of the week in the requested currency
    #[serde(deserialize_with = "string_or_number")]
    #[schemars(with = "String")]
    pub cost_estimate: String,
}

/// Accepts `"12345"` as well as `12345`; models don't always quote numbers.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_plan_result_uses_camel_case_keys() {
        let json = r###"{"mealPlan":"## Week","shoppingList":"- Rice","costEstimate":"$ 100"}"###;
        let result: MealPlanResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.meal_plan, "## Week");
        assert_eq!(result.shopping_list, "- Rice");
        assert_eq!(result.cost_estimate, "$ 100");
    }

    #[test]
    fn test_numeric_cost_estimate_accepted() {
        let json = r#"{"mealPlan":"a","shoppingList":"b","costEstimate":145000}"#;
        let result: MealPlanResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.cost_estimate, "145000");
    }

    #[test]
    fn test_missing_field_rejected() {
        let json = r#"{"mealPlan":"a","costEstimate":"1"}"#;
        assert!(serde_json::from_str::<MealPlanResult>(json).is_err());
    }

    #[test]
    fn test_effort_deserializes_lowercase() {
        let effort: Effort = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(effort, Effort::Medium);
        assert_eq!(Effort::None.label(), "Off");
    }
}
