// ABOUTME: Integration tests for chat input intent classification
// ABOUTME: Covers trigger phrases, goal detection precedence, and the recipe dish extraction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intent Classification Tests
//!
//! The trigger substrings are a compatibility contract, so these tests pin
//! the exact matching rules, including the one case-sensitive trigger.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use san_fitness_agent::intent::{classify, Goal, UserIntent};

// ============================================================================
// Diet Plan Triggers
// ============================================================================

#[test]
fn test_diet_plan_trigger() {
    assert_eq!(
        classify("Can you make me a diet plan?"),
        UserIntent::DietPlan {
            goal: Goal::Unspecified
        }
    );
}

#[test]
fn test_muscle_gain_trigger_carries_goal() {
    assert_eq!(
        classify("I'm aiming for muscle gain this year"),
        UserIntent::DietPlan {
            goal: Goal::MuscleGain
        }
    );
}

#[test]
fn test_weight_loss_trigger_carries_goal() {
    assert_eq!(
        classify("any weight loss tips?"),
        UserIntent::DietPlan {
            goal: Goal::WeightLoss
        }
    );
}

#[test]
fn test_triggers_are_case_insensitive() {
    assert_eq!(
        classify("DIET PLAN NOW"),
        UserIntent::DietPlan {
            goal: Goal::Unspecified
        }
    );
}

#[test]
fn test_workout_plan_trigger_is_case_sensitive() {
    // "Workout plan" matches only with this exact capitalization
    assert_eq!(
        classify("Workout plan please"),
        UserIntent::DietPlan {
            goal: Goal::Unspecified
        }
    );
    assert_eq!(classify("workout plan please"), UserIntent::Chat);
    assert_eq!(classify("WORKOUT PLAN please"), UserIntent::Chat);
}

#[test]
fn test_goal_words_alone_do_not_trigger() {
    // "lose weight" feeds goal detection but is not itself a trigger
    assert_eq!(classify("I want to lose weight"), UserIntent::Chat);
    assert_eq!(classify("help me gain weight"), UserIntent::Chat);
}

// ============================================================================
// Goal Detection
// ============================================================================

#[test]
fn test_goal_detection_prefers_muscle_gain() {
    assert_eq!(
        classify("diet plan for muscle gain and weight loss"),
        UserIntent::DietPlan {
            goal: Goal::MuscleGain
        }
    );
}

#[test]
fn test_gain_weight_phrase_maps_to_muscle_gain() {
    assert_eq!(
        classify("diet plan to gain weight"),
        UserIntent::DietPlan {
            goal: Goal::MuscleGain
        }
    );
}

#[test]
fn test_lose_weight_phrase_maps_to_weight_loss() {
    assert_eq!(
        classify("diet plan to lose weight fast"),
        UserIntent::DietPlan {
            goal: Goal::WeightLoss
        }
    );
}

#[test]
fn test_maintain_weight_goal() {
    assert_eq!(
        classify("diet plan to maintain weight"),
        UserIntent::DietPlan {
            goal: Goal::MaintainWeight
        }
    );
}

#[test]
fn test_goal_phrasing_for_prompts() {
    assert_eq!(Goal::MuscleGain.as_str(), "muscle gain");
    assert_eq!(Goal::WeightLoss.as_str(), "weight loss");
    assert_eq!(Goal::MaintainWeight.as_str(), "maintain weight");
    assert_eq!(Goal::Unspecified.as_str(), "unspecified");
}

// ============================================================================
// Recipe Trigger
// ============================================================================

#[test]
fn test_recipe_trigger_extracts_lowercased_dish() {
    assert_eq!(
        classify("Give me a recipe for Chicken Biryani"),
        UserIntent::Recipe {
            dish: "chicken biryani".to_owned()
        }
    );
}

#[test]
fn test_recipe_trigger_is_case_insensitive() {
    assert_eq!(
        classify("RECIPE FOR oats"),
        UserIntent::Recipe {
            dish: "oats".to_owned()
        }
    );
}

#[test]
fn test_recipe_without_for_is_plain_chat() {
    assert_eq!(classify("got any good recipe ideas?"), UserIntent::Chat);
}

#[test]
fn test_recipe_with_no_dish_yields_empty_name() {
    assert_eq!(
        classify("recipe for   "),
        UserIntent::Recipe {
            dish: String::new()
        }
    );
}

#[test]
fn test_diet_plan_wins_over_recipe() {
    assert_eq!(
        classify("diet plan with a recipe for dal"),
        UserIntent::DietPlan {
            goal: Goal::Unspecified
        }
    );
}

// ============================================================================
// Fallback
// ============================================================================

#[test]
fn test_everything_else_is_chat() {
    assert_eq!(classify("how much protein do I need?"), UserIntent::Chat);
    assert_eq!(classify(""), UserIntent::Chat);
}
