//! Tests for the extraction pipeline as a whole.

use super::*;
use crate::models::Step;

const TOMATO_PASTA: &str =
    "레시피: 토마토 파스타\n재료:\n스파게티\n토마토소스\n\nStep 1: 물을 끓인다 10분\nStep 2: 소스를 넣는다";

#[test]
fn test_tomato_pasta_scenario() {
    let recipe = extract(TOMATO_PASTA).expect("should extract");

    assert_eq!(recipe.title, "토마토 파스타");
    assert_eq!(recipe.ingredients, vec!["스파게티", "토마토소스"]);
    assert_eq!(
        recipe.steps,
        vec![
            Step::new(1, "물을 끓인다 10분", 10),
            Step::new(2, "소스를 넣는다", 0),
        ]
    );
    assert_eq!(recipe.cooking_time_minutes, 10);
}

#[test]
fn test_small_talk_is_not_extracted() {
    assert!(!is_recipe_text("오늘 날씨가 좋네요"));
    assert!(extract("오늘 날씨가 좋네요").is_none());
}

#[test]
fn test_non_recipe_texts_never_extract() {
    for text in ["", "   ", "안녕하세요!", "가격은 3.5달러예요", "1) 사과\n2) 배"] {
        assert!(!is_recipe_text(text), "{text:?} should not classify");
        assert!(extract(text).is_none(), "{text:?} should not extract");
    }
}

#[test]
fn test_recipe_texts_always_have_steps() {
    for text in [
        "레시피:",
        "재료:",
        "만드는 법:",
        "조리법:\n\n",
        "Step 1",
        "1.",
        "1) 5분",
        TOMATO_PASTA,
    ] {
        let recipe = extract(text).unwrap_or_else(|| panic!("{text:?} should extract"));
        assert!(!recipe.steps.is_empty(), "{text:?} produced no steps");
        for (index, step) in recipe.steps.iter().enumerate() {
            assert_eq!(step.step_number as usize, index + 1);
            assert!(!step.instruction.is_empty());
        }
    }
}

#[test]
fn test_cooking_time_is_sum_or_default() {
    let timed = extract("1. 굽는다 20분\n2. 식힌다 15분").expect("recipe");
    assert_eq!(timed.cooking_time_minutes, 35);

    let untimed = extract("Step 1: 섞는다\nStep 2: 담는다").expect("recipe");
    assert!(untimed.steps.iter().all(|s| s.timer_minutes == 0));
    assert_eq!(untimed.cooking_time_minutes, Recipe::DEFAULT_COOKING_TIME_MINUTES);
}

#[test]
fn test_extraction_is_idempotent_except_id() {
    let first = extract(TOMATO_PASTA).expect("recipe");
    let second = extract(TOMATO_PASTA).expect("recipe");

    assert_eq!(first.title, second.title);
    assert_eq!(first.ingredients, second.ingredients);
    assert_eq!(first.steps, second.steps);
    assert_ne!(first.id, second.id);
}

#[test]
fn test_numbered_chat_answer() {
    let text = "김치볶음밥 만드는 법을 알려드릴게요!\n\n재료:\n- 김치 1컵\n- 밥 1공기\n- 참기름\n\n1. 팬에 기름을 두르고 김치를 3분 볶는다\n2. 밥을 넣고 골고루 섞는다\n3. 참기름을 두르고 마무리한다";
    let extraction = extract_detailed(text).expect("recipe");
    let recipe = extraction.recipe;

    assert_eq!(extraction.step_source, StepSource::NumberedList);
    assert_eq!(recipe.title, "김치볶음밥");
    assert_eq!(recipe.ingredients, vec!["김치 1컵", "밥 1공기", "참기름"]);
    let timers: Vec<u32> = recipe.steps.iter().map(|s| s.timer_minutes).collect();
    assert_eq!(timers, vec![3, 5, 5]);
    assert_eq!(recipe.cooking_time_minutes, 13);
}

#[test]
fn test_paragraph_fallback() {
    let text = "레시피: 미역국\n\n불린 미역을 참기름에 달달 볶아주세요\n\n물을 붓고 20분 정도 푹 끓여주세요";
    let extraction = extract_detailed(text).expect("recipe");

    assert_eq!(extraction.step_source, StepSource::Paragraphs);
    assert_eq!(extraction.recipe.title, "미역국");
    let timers: Vec<u32> = extraction.recipe.steps.iter().map(|s| s.timer_minutes).collect();
    assert_eq!(timers, vec![5, 20]);
}

#[test]
fn test_synthetic_fallback_and_default_title() {
    let extraction = extract_detailed("재료:\n두부").expect("recipe");

    assert_eq!(extraction.step_source, StepSource::Synthetic);
    assert_eq!(extraction.recipe.steps.len(), 1);
    assert_eq!(extraction.recipe.steps[0].timer_minutes, steps::SYNTHETIC_TIMER_MINUTES);
    assert_eq!(extraction.recipe.cooking_time_minutes, steps::SYNTHETIC_TIMER_MINUTES);
    // First line is used verbatim when nothing better exists
    assert_eq!(extraction.recipe.title, "재료:");
}

#[test]
fn test_crlf_line_endings() {
    let recipe = extract("레시피: 떡국\r\n재료:\r\n떡\r\n\r\nStep 1: 끓인다 7분").expect("recipe");
    assert_eq!(recipe.title, "떡국");
    assert_eq!(recipe.ingredients, vec!["떡"]);
    assert_eq!(recipe.steps[0].timer_minutes, 7);
}
