//! Simple template: the canonical one-paragraph prompt.

use rand::RngCore;

use crate::composer::strategy::{PromptStrategy, ResolvedSelection, StrategyKind};
use crate::composer::tables::STRUCTURE_GUIDANCE;

/// Fixed-order concatenation. Deterministic; never touches the rng.
pub struct SimpleTemplateStrategy;

impl PromptStrategy for SimpleTemplateStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Simple
    }

    fn render(&self, r: &ResolvedSelection<'_>, _rng: &mut dyn RngCore) -> String {
        let mut prompt = format!(
            "I need you to {} {}, {}, {}. {}",
            r.goal_phrase,
            r.subject,
            r.tone_phrase,
            r.audience_phrase,
            r.constraint_sentences().join(" ")
        );

        if let Some(bonus) = r.bonus_clause {
            prompt.push(' ');
            prompt.push_str(bonus);
        }

        prompt.push(' ');
        prompt.push_str(STRUCTURE_GUIDANCE);

        if let Some(quality) = r.quality_instruction {
            prompt.push(' ');
            prompt.push_str(quality);
        }

        prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composer::selection::{Constraints, Selection};
    use rand::rngs::mock::StepRng;

    fn render(selection: &Selection) -> String {
        let resolved = ResolvedSelection::resolve(selection);
        SimpleTemplateStrategy.render(&resolved, &mut StepRng::new(0, 1))
    }

    #[test]
    fn test_clause_order() {
        let selection = Selection {
            subject: "quarterly sales".to_string(),
            goal: "write".to_string(),
            tone: "formal".to_string(),
            audience: "professionals".to_string(),
            constraints: Constraints::default(),
        };
        let out = render(&selection);

        let head = out.find("I need you to write").unwrap();
        let words = out.find("Keep the response around 150 words.").unwrap();
        let bonus = out.find("Include relevant industry statistics").unwrap();
        let guidance = out.find("Provide your response with clear structure").unwrap();
        let quality = out.find("Balance depth with clarity").unwrap();
        assert!(head < words && words < bonus && bonus < guidance && guidance < quality);
    }

    #[test]
    fn test_no_goal_means_no_quality_instruction() {
        let selection = Selection {
            subject: "clouds".to_string(),
            ..Selection::default()
        };
        let out = render(&selection);
        assert!(out.starts_with("I need you to create content about clouds,"));
        assert!(!out.contains("Balance depth"));
        assert!(!out.contains("Prioritize readability"));
    }
}
