//! Phrase tables: static tag → fragment mappings used by every strategy.
//!
//! Lookups are total: `None` (empty or unknown tag) maps to the default phrase.

use crate::composer::selection::{Audience, Goal, Tone};

pub const DEFAULT_GOAL_PHRASE: &str = "create content about";
pub const DEFAULT_AUDIENCE_PHRASE: &str = "for a general audience";
pub const DEFAULT_TONE_PHRASE: &str = "using a balanced, neutral tone";

/// Action phrase placed before the subject.
pub fn goal_phrase(goal: Option<Goal>) -> &'static str {
    let Some(goal) = goal else {
        return DEFAULT_GOAL_PHRASE;
    };
    match goal {
        Goal::Write => "write a detailed and engaging piece about",
        Goal::Draw => "create a visual representation of",
        Goal::Code => "generate code that implements",
        Goal::Explain => "provide a clear explanation of",
        Goal::Brainstorm => "generate creative ideas for",
        Goal::Marketing => "create compelling marketing copy about",
        Goal::DesignLanding => "design an effective landing page for",
        Goal::AnalyzeData => "analyze the data related to",
        Goal::VideoScript => "create an engaging video script about",
        Goal::EmailCampaign => "develop an email campaign focused on",
        Goal::ProductFeature => "design a product feature that addresses",
        Goal::TechnicalDoc => "write technical documentation for",
        Goal::SocialMedia => "create engaging social media content about",
        Goal::BusinessStrategy => "develop a business strategy for",
        Goal::Educational => "create educational content explaining",
        Goal::ResearchSummary => "summarize research findings about",
    }
}

pub fn audience_phrase(audience: Option<Audience>) -> &'static str {
    let Some(audience) = audience else {
        return DEFAULT_AUDIENCE_PHRASE;
    };
    match audience {
        Audience::General => "for a broad audience with varied backgrounds",
        Audience::Professionals => {
            "for professionals in the field, using appropriate industry terminology"
        }
        Audience::Developers => "for software developers with technical understanding",
        Audience::Kids => "for children, using simple language and engaging examples",
        Audience::Students => "for students looking to learn and understand the subject",
        Audience::Marketers => "for marketing professionals focused on campaign effectiveness",
        Audience::Creators => "for content creators looking to engage their audience",
        Audience::Executives => "for decision-makers who need concise, actionable information",
        Audience::Researchers => "for researchers with deep subject matter expertise",
        Audience::Technical => {
            "for technically-minded non-developers who understand complex concepts"
        }
    }
}

pub fn tone_phrase(tone: Option<Tone>) -> &'static str {
    let Some(tone) = tone else {
        return DEFAULT_TONE_PHRASE;
    };
    match tone {
        Tone::Professional => "using professional and authoritative language",
        Tone::Friendly => "in a friendly, conversational tone",
        Tone::Technical => "with technical precision and detailed specifications",
        Tone::Creative => "using creative and imaginative language",
        Tone::Persuasive => "with persuasive and compelling arguments",
        Tone::Formal => "in a formal, academic style with proper citations and references",
    }
}

/// Extra instruction for goal/audience pairs that benefit from one.
/// Most pairs have none.
pub fn bonus_clause(goal: Option<Goal>, audience: Option<Audience>) -> Option<&'static str> {
    use Audience as A;
    use Goal as G;

    let clause = match (goal?, audience?) {
        (G::Write, A::Professionals) => {
            "Include relevant industry statistics and actionable insights."
        }
        (G::Explain, A::Kids) => {
            "Use simple metaphors and engaging examples that children can easily understand."
        }
        (G::Code, A::Developers) => {
            "Include comments explaining the logic and any potential edge cases."
        }
        (G::Marketing, A::Marketers | A::Creators) => {
            "Focus on unique value propositions and compelling calls to action."
        }
        (G::DesignLanding, A::Marketers) => {
            "Focus on conversion optimization and clear call-to-action elements."
        }
        (G::VideoScript, A::Creators) => "Include engaging hooks and visual scene descriptions.",
        (G::TechnicalDoc, A::Developers) => {
            "Include code examples and clear implementation steps."
        }
        (G::ResearchSummary, A::Researchers) => {
            "Include methodology considerations and potential limitations of the findings."
        }
        (G::BusinessStrategy, A::Executives) => {
            "Include ROI considerations, implementation timelines, and resource requirements."
        }
        (G::AnalyzeData, A::Professionals | A::Researchers) => {
            "Include statistical significance, relevant correlations, and actionable insights."
        }
        (G::Educational, A::Students) => {
            "Structure content with clear learning objectives and include review questions."
        }
        (G::SocialMedia, A::Creators) => {
            "Optimize for engagement with short, punchy statements and attention-grabbing hooks."
        }
        (G::EmailCampaign, A::Marketers) => {
            "Include subject line suggestions, clear CTAs, and segmentation strategy."
        }
        _ => return None,
    };
    Some(clause)
}

/// Closing instruction shared by every prompt.
pub const STRUCTURE_GUIDANCE: &str = "Provide your response with clear structure, \
    using appropriate formatting like headings, lists, or bullet points where relevant. \
    If appropriate, include thought-provoking questions or considerations \
    that might not be immediately obvious.";

/// Depth/quality instruction by goal category.
pub fn quality_instruction(goal: Option<Goal>) -> Option<&'static str> {
    match goal? {
        Goal::Write | Goal::Explain | Goal::Educational => Some(
            "Balance depth with clarity, avoiding both oversimplification and unnecessary complexity.",
        ),
        Goal::Code | Goal::TechnicalDoc => Some(
            "Prioritize readability, maintainability, and security in any technical solutions.",
        ),
        Goal::Marketing | Goal::SocialMedia | Goal::EmailCampaign => Some(
            "Ensure all messages align with current marketing best practices while standing out from common approaches.",
        ),
        Goal::ResearchSummary | Goal::AnalyzeData => Some(
            "Present information objectively while highlighting meaningful patterns and implications.",
        ),
        _ => None,
    }
}

/// Openers for the substitution strategy. The first entry is the canonical one.
pub const OPENER_VARIANTS: &[&str] = &[
    "I need you to",
    "Please",
    "Your task is to",
    "I would like you to",
];

/// Closing lines for the substitution strategy.
pub const CLOSER_VARIANTS: &[&str] = &[
    "Think through the request carefully before answering.",
    "Take a moment to plan the response before writing it.",
    "Check the response against every instruction above before finishing.",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_tags_use_defaults() {
        assert_eq!(goal_phrase(None), DEFAULT_GOAL_PHRASE);
        assert_eq!(audience_phrase(None), DEFAULT_AUDIENCE_PHRASE);
        assert_eq!(tone_phrase(None), DEFAULT_TONE_PHRASE);
    }

    #[test]
    fn test_every_goal_has_a_distinct_phrase() {
        let mut seen = std::collections::HashSet::new();
        for goal in Goal::ALL {
            let phrase = goal_phrase(Some(goal));
            assert_ne!(phrase, DEFAULT_GOAL_PHRASE);
            assert!(seen.insert(phrase), "duplicate phrase for {goal:?}");
        }
    }

    #[test]
    fn test_bonus_clause_known_pairs() {
        assert_eq!(
            bonus_clause(Some(Goal::Write), Some(Audience::Professionals)),
            Some("Include relevant industry statistics and actionable insights.")
        );
        assert!(bonus_clause(Some(Goal::Marketing), Some(Audience::Creators)).is_some());
        assert!(bonus_clause(Some(Goal::Marketing), Some(Audience::Marketers)).is_some());
        assert!(bonus_clause(Some(Goal::AnalyzeData), Some(Audience::Researchers)).is_some());
    }

    #[test]
    fn test_bonus_clause_absent_for_other_pairs() {
        assert_eq!(bonus_clause(Some(Goal::Write), Some(Audience::Kids)), None);
        assert_eq!(bonus_clause(None, Some(Audience::Developers)), None);
        assert_eq!(bonus_clause(Some(Goal::Code), None), None);
    }

    #[test]
    fn test_quality_instruction_by_category() {
        assert!(quality_instruction(Some(Goal::Educational))
            .unwrap()
            .starts_with("Balance depth"));
        assert!(quality_instruction(Some(Goal::TechnicalDoc))
            .unwrap()
            .starts_with("Prioritize readability"));
        assert_eq!(quality_instruction(Some(Goal::Draw)), None);
        assert_eq!(quality_instruction(None), None);
    }
}
