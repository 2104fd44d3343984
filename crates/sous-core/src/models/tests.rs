use jiff::Timestamp;

use crate::{
    display::Countdown,
    models::{Completion, Recipe, RecipeId, RecipeSummary, Step, TimerState},
    session::SessionSnapshot,
};

fn sample_recipe() -> Recipe {
    Recipe::new(
        "토마토 파스타",
        vec!["파스타면 200g".to_string(), "토마토 소스".to_string()],
        vec![
            Step::new(1, "물을 끓이고 면을 삶는다", 10),
            Step::new(2, "소스를 데운다", 0),
        ],
    )
    .with_id("1700000000000-0")
}

#[test]
fn test_recipe_display_is_markdown_card() {
    let output = sample_recipe().to_string();

    assert!(output.starts_with("# 토마토 파스타\n"));
    assert!(output.contains("- ID: 1700000000000-0"));
    assert!(output.contains("- Cooking time: 10분"));
    assert!(output.contains("## 재료"));
    assert!(output.contains("- 파스타면 200g"));
    assert!(output.contains("1. 물을 끓이고 면을 삶는다 ⏱ 10분"));
    assert!(output.contains("2. 소스를 데운다\n"));
}

#[test]
fn test_recipe_without_ingredients_omits_section() {
    let recipe = Recipe::new("라면", vec![], vec![Step::new(1, "끓인다", 3)]);
    let output = recipe.to_string();
    assert!(!output.contains("## 재료"));
    assert!(output.contains("## 조리 순서"));
}

#[test]
fn test_recipe_json_uses_camel_case() {
    let json = serde_json::to_value(sample_recipe()).expect("serialize");
    assert_eq!(json["cookingTimeMinutes"], 10);
    assert_eq!(json["steps"][0]["stepNumber"], 1);
    assert_eq!(json["steps"][0]["timerMinutes"], 10);
    assert_eq!(json["id"], "1700000000000-0");
}

#[test]
fn test_recipe_json_missing_fields_get_defaults() {
    let recipe: Recipe = serde_json::from_str(
        r#"{"title":"계란말이","steps":[{"instruction":"계란을 푼다"}]}"#,
    )
    .expect("deserialize");

    assert!(!recipe.id.as_str().is_empty());
    assert!(recipe.ingredients.is_empty());
    assert_eq!(recipe.steps[0].timer_minutes, 0);
}

#[test]
fn test_generated_ids_are_distinct() {
    let a = RecipeId::generate();
    let b = RecipeId::generate();
    assert_ne!(a, b);
}

#[test]
fn test_normalize_restores_numbering_and_time() {
    let mut recipe = sample_recipe();
    recipe.steps[0].step_number = 7;
    recipe.steps[1].timer_minutes = 4;
    recipe.cooking_time_minutes = 0;

    recipe.normalize();

    assert_eq!(recipe.step_count(), 2);
    assert_eq!(recipe.steps[0].step_number, 1);
    assert_eq!(recipe.steps[1].step_number, 2);
    assert_eq!(recipe.cooking_time_minutes, 14);
}

#[test]
fn test_summary_display_shows_history_only_when_cooked() {
    let recipe = sample_recipe();
    let mut summary = RecipeSummary::from_recipe(&recipe, Timestamp::now());
    let fresh = summary.to_string();
    assert!(fresh.contains("## 토마토 파스타 (ID: 1700000000000-0)"));
    assert!(fresh.contains("- **Steps**: 2 (10분)"));
    assert!(!fresh.contains("Cooked"));

    summary.times_cooked = 2;
    summary.average_rating = Some(4.5);
    assert!(summary.to_string().contains("- **Cooked**: 2 times, rated 4.5/5"));
}

#[test]
fn test_completion_display_shows_stars() {
    let completion = Completion {
        id: 1,
        recipe_id: RecipeId::from("r"),
        rating: Some(3),
        completed_at: Timestamp::now(),
    };
    assert!(completion.to_string().contains("★★★☆☆"));
}

#[test]
fn test_timer_state_text() {
    assert_eq!(TimerState::Running.to_string(), "running");
    assert_eq!("paused".parse::<TimerState>().ok(), Some(TimerState::Paused));
    assert_eq!(TimerState::Finished.with_icon(), "✓ Finished");
}

#[test]
fn test_snapshot_display() {
    let snapshot = SessionSnapshot {
        current_step_index: 0,
        step_number: 1,
        step_count: 2,
        time_left_seconds: 125,
        timer_state: TimerState::Running,
        is_last_step: false,
        completed: false,
    };
    assert_eq!(snapshot.to_string(), "**Step 1/2** · ▶ Running 02:05\n");
    assert_eq!(Countdown(125).to_string(), "02:05");
}
