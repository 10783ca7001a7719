// ABOUTME: Intent classification for free-text chat input
// ABOUTME: Maps trigger substrings to enumerated intents with a detected training goal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intent Classification
//!
//! Free-text input from the chat loop is classified into a tagged intent
//! before any prompt is built. The trigger substrings are a compatibility
//! contract: all are matched case-insensitively except `"Workout plan"`,
//! which matches the raw input exactly as typed.

/// Training goal detected from a diet-plan request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Goal {
    /// Caloric surplus for muscle growth
    MuscleGain,
    /// Caloric deficit for fat loss
    WeightLoss,
    /// Caloric balance
    MaintainWeight,
    /// No goal phrase found in the request
    Unspecified,
}

impl Goal {
    /// The goal phrasing used inside generated prompts
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MuscleGain => "muscle gain",
            Self::WeightLoss => "weight loss",
            Self::MaintainWeight => "maintain weight",
            Self::Unspecified => "unspecified",
        }
    }
}

/// Classified intent of one chat input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserIntent {
    /// Structured diet-plan flow, with the goal detected from the request
    DietPlan {
        /// Goal phrase found in the input, if any
        goal: Goal,
    },
    /// Step-by-step recipe request for a named dish
    Recipe {
        /// Dish name extracted after the `"recipe for"` trigger, lowercased
        dish: String,
    },
    /// Anything else is forwarded to the model verbatim
    Chat,
}

const RECIPE_TRIGGER: &str = "recipe for";

/// Classify one line of chat input
///
/// Diet-plan triggers are checked before the recipe trigger, so a line
/// containing both starts the diet-plan flow.
#[must_use]
pub fn classify(input: &str) -> UserIntent {
    let lowered = input.to_lowercase();

    if lowered.contains("diet plan")
        || lowered.contains("muscle gain")
        || lowered.contains("weight loss")
        || input.contains("Workout plan")
    {
        return UserIntent::DietPlan {
            goal: detect_goal(&lowered),
        };
    }

    if let Some(pos) = lowered.find(RECIPE_TRIGGER) {
        let dish = lowered[pos + RECIPE_TRIGGER.len()..].trim().to_owned();
        return UserIntent::Recipe { dish };
    }

    UserIntent::Chat
}

fn detect_goal(lowered: &str) -> Goal {
    if lowered.contains("muscle gain") || lowered.contains("gain weight") {
        Goal::MuscleGain
    } else if lowered.contains("lose weight") || lowered.contains("weight loss") {
        Goal::WeightLoss
    } else if lowered.contains("maintain weight") {
        Goal::MaintainWeight
    } else {
        Goal::Unspecified
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_questions_are_chat() {
        assert_eq!(classify("how many calories in an egg?"), UserIntent::Chat);
    }

    #[test]
    fn test_trigger_inside_a_sentence() {
        assert_eq!(
            classify("Could you put together a diet plan for me?"),
            UserIntent::DietPlan {
                goal: Goal::Unspecified
            }
        );
    }

    #[test]
    fn test_dish_is_lowercased_suffix() {
        assert_eq!(
            classify("Recipe for Masala Dosa please"),
            UserIntent::Recipe {
                dish: "masala dosa please".to_owned()
            }
        );
    }
}
