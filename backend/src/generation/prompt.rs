//! Prompt construction for plan generation
//!
//! The prompt pins the exact JSON shape the parser expects; the schema lines
//! here must stay in sync with the plan model's serde names.

use fitquest_shared::models::UserProfile;
use std::fmt::Write;

const PLAN_PROMPT_HEADER: &str = r#"You are a certified fitness and nutrition coach. Create a one-week workout and diet plan for the client described below.

Respond with ONLY a JSON object, no other text, in exactly this shape:

{
  "summary": "<one short motivational paragraph>",
  "workout_plan": {
    "Monday": ["<exercise name (sets x reps)>", "..."],
    "Tuesday": ["..."],
    "Wednesday": ["..."],
    "Thursday": ["..."],
    "Friday": ["..."],
    "Saturday": ["..."],
    "Sunday": ["..."]
  },
  "diet_plan": {
    "Monday": {
      "Breakfast": [{"description": "<meal>", "calories": 0, "protein_g": 0}],
      "Lunch": [],
      "Dinner": [],
      "Snacks": []
    }
  },
  "recommended_water_l": 0.0
}

Rules:
- All seven weekdays (Monday through Sunday) must appear in both workout_plan and diet_plan.
- Use an empty exercise list for rest days.
- Every diet day must carry all four meal slots: Breakfast, Lunch, Dinner, Snacks.
- Keep exercise names short and put sets/reps in a trailing parenthesis.
- recommended_water_l is the daily water intake in liters, as a positive number.
- Write all free text in the requested language.

Client:
"#;

/// Build the generation prompt for one profile
pub fn build_prompt(profile: &UserProfile) -> String {
    let mut prompt = String::from(PLAN_PROMPT_HEADER);
    let _ = writeln!(prompt, "- Age: {}", profile.age);
    let _ = writeln!(prompt, "- Gender: {:?}", profile.gender);
    let _ = writeln!(prompt, "- Weight: {} kg", profile.weight_kg);
    let _ = writeln!(prompt, "- Height: {} cm", profile.height_cm);
    let _ = writeln!(
        prompt,
        "- Activity level: {}",
        profile.activity_level.description()
    );
    let _ = writeln!(prompt, "- Goal: {}", profile.fitness_goal.description());
    let _ = writeln!(prompt, "- Timeframe: {} weeks", profile.timeframe_weeks);
    let _ = writeln!(
        prompt,
        "- Current daily water intake: {} liters",
        profile.water_intake_l
    );
    if let Some(foods) = &profile.preferred_foods {
        let _ = writeln!(prompt, "- Preferred foods: {}", foods);
    }
    let _ = writeln!(prompt, "- Plan language: {}", profile.target_language);
    prompt
}
