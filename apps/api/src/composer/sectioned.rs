//! Sectioned ("advanced") layout: one labelled section per line.

use rand::RngCore;

use crate::composer::normalize::{collapse_whitespace, Layout};
use crate::composer::prompts::{fill_template, SECTIONED_TEMPLATE};
use crate::composer::strategy::{PromptStrategy, ResolvedSelection, StrategyKind};
use crate::composer::tables::STRUCTURE_GUIDANCE;

pub struct SectionedStrategy;

impl PromptStrategy for SectionedStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Sectioned
    }

    fn layout(&self) -> Layout {
        Layout::Lines
    }

    fn render(&self, r: &ResolvedSelection<'_>, _rng: &mut dyn RngCore) -> String {
        let constraints = r.constraint_sentences();
        let constraints_section = if constraints.is_empty() {
            String::new()
        } else {
            format!("Constraints: {}", constraints.join(" "))
        };
        let focus_section = r
            .bonus_clause
            .map(|bonus| format!("Focus: {bonus}"))
            .unwrap_or_default();

        // Subject is flattened so it cannot open a section of its own.
        let subject = collapse_whitespace(r.subject);

        fill_template(SECTIONED_TEMPLATE, |slot| match slot {
            "goal_phrase" => Some(r.goal_phrase),
            "subject" => Some(subject.as_str()),
            "tone_phrase" => Some(r.tone_phrase),
            "audience_phrase" => Some(r.audience_phrase),
            "constraints_section" => Some(constraints_section.as_str()),
            "focus_section" => Some(focus_section.as_str()),
            "guidance" => Some(STRUCTURE_GUIDANCE),
            "quality" => Some(r.quality_instruction.unwrap_or_default()),
            _ => None,
        })
    }
}
