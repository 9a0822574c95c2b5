//! # Prompt Templates
//!
//! The instructions sent to the model. Ingredient consolidation in the
//! shopping list is asked for here; nothing in this crate performs it.

use std::fmt::Write;

use crate::core::form::PlanRequest;

pub const DEFAULT_SYSTEM_PROMPT: &str = "You are an expert nutritionist who designs weekly meal plans. \
    You answer with a detailed, realistic plan built from foods that are easy to find in the user's region, \
    a consolidated shopping list, and an honest cost estimate. \
    Respect every dietary restriction strictly; never include a restricted ingredient.";

/// Example shown to the model so similar items are combined per category.
const SHOPPING_LIST_EXAMPLE: &str = "\
Fruits and Vegetables:
- 2 Onions
- 2 Tomatoes
- 1 head of Lettuce
Dairy:
- 1 gallon of Milk
- 1 dozen Eggs
Other:
- ...";

const FORMAT_INSTRUCTIONS: &str = "\
Format the meal plan and the shopping list as plain text that a person can read:
- Use \"## \" for the week title and \"### \" for each day.
- Use a line ending in \":\" for each meal or shopping category.
- Use \"- \" for each dish or ingredient.
Respond with a single JSON object with exactly these string fields:
\"mealPlan\", \"shoppingList\" and \"costEstimate\". The cost estimate is the total for the week in the requested currency, written with digits only \
and no thousands separators (for example \"120000\").";

/// Build the user prompt for one generation request.
pub fn build_user_prompt(request: &PlanRequest, region: &str) -> String {
    let code = request.currency.code();
    let mut prompt = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(
        prompt,
        "Design a weekly meal plan for a user in {region}.\n"
    );
    let _ = writeln!(prompt, "User data:");
    let _ = writeln!(prompt, "- Dietary preferences: {}", request.dietary_preferences);
    let _ = writeln!(prompt, "- Restrictions: {}", request.restrictions);
    let _ = writeln!(prompt, "- Goals: {}", request.goals);
    // Ungrouped digits; grouped replies would not survive parse_amount
    let _ = writeln!(prompt, "- Weekly budget: {} {code}", request.budget.round());
    if let Some(body) = &request.body {
        let _ = writeln!(prompt, "- Weight: {} kg", body.weight_kg);
        let _ = writeln!(prompt, "- Height: {} cm", body.height_cm);
        let _ = writeln!(prompt, "- Body type: {}", body.body_type);
        if let Some(pct) = body.body_fat_percentage {
            let _ = writeln!(prompt, "- Body fat percentage: {pct}%");
        }
    }

    let _ = writeln!(
        prompt,
        "\nGenerate a detailed weekly meal plan, a consolidated shopping list and an estimated cost in {code}."
    );
    let _ = writeln!(
        prompt,
        "Make sure the shopping list consolidates ingredients whenever possible \
         (for example, if two meals use onions, combine the quantity of onions)."
    );
    let _ = writeln!(
        prompt,
        "Base your answer on foods and products commonly found in {region}.\n"
    );
    let _ = writeln!(
        prompt,
        "Here is an example shopping list. Notice how similar items are combined:\n\n{SHOPPING_LIST_EXAMPLE}\n"
    );
    prompt.push_str(FORMAT_INSTRUCTIONS);
    prompt
}
