//! Composition strategies: pluggable renderers behind one trait.
//!
//! The `Composer` resolves tags to phrases, asks the active strategy to lay
//! them out, then normalizes and redacts. Strategies only arrange text.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use rand::RngCore;
use serde::Serialize;

use crate::composer::normalize::Layout;
use crate::composer::sectioned::SectionedStrategy;
use crate::composer::selection::{Audience, Goal, Selection, Tone};
use crate::composer::simple::SimpleTemplateStrategy;
use crate::composer::substitution::SubstitutionStrategy;
use crate::composer::tables;

// ────────────────────────────────────────────────────────────────────────────
// Resolved input shared by all strategies
// ────────────────────────────────────────────────────────────────────────────

/// A selection with every tag already looked up in the phrase tables.
#[derive(Debug, Clone)]
pub struct ResolvedSelection<'a> {
    pub subject: &'a str,
    pub goal: Option<Goal>,
    pub tone: Option<Tone>,
    pub audience: Option<Audience>,
    pub goal_phrase: &'static str,
    pub tone_phrase: &'static str,
    pub audience_phrase: &'static str,
    /// `None` when the word-count target is 0.
    pub word_count: Option<u32>,
    pub forbidden_words: Vec<String>,
    pub bonus_clause: Option<&'static str>,
    pub quality_instruction: Option<&'static str>,
}

impl<'a> ResolvedSelection<'a> {
    pub fn resolve(selection: &'a Selection) -> Self {
        let goal = selection.goal();
        let tone = selection.tone();
        let audience = selection.audience();

        Self {
            subject: selection.subject.trim(),
            goal,
            tone,
            audience,
            goal_phrase: tables::goal_phrase(goal),
            tone_phrase: tables::tone_phrase(tone),
            audience_phrase: tables::audience_phrase(audience),
            word_count: Some(selection.constraints.word_count).filter(|&n| n > 0),
            forbidden_words: selection.constraints.forbidden_list(),
            bonus_clause: tables::bonus_clause(goal, audience),
            quality_instruction: tables::quality_instruction(goal),
        }
    }

    /// Constraint sentences in fixed order: word count, then avoid-list.
    pub fn constraint_sentences(&self) -> Vec<String> {
        let mut sentences = Vec::new();
        if let Some(n) = self.word_count {
            sentences.push(format!("Keep the response around {n} words."));
        }
        if !self.forbidden_words.is_empty() {
            sentences.push(format!(
                "Avoid using these specific words: {}.",
                self.forbidden_words.join(", ")
            ));
        }
        sentences
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to add a new prompt layout without touching the composer
/// or the handlers. Held by the composer as `Arc<dyn PromptStrategy>`.
pub trait PromptStrategy: Send + Sync {
    fn kind(&self) -> StrategyKind;

    fn layout(&self) -> Layout {
        Layout::Inline
    }

    /// Lays out the resolved phrases. Output need not be normalized.
    fn render(&self, resolved: &ResolvedSelection<'_>, rng: &mut dyn RngCore) -> String;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    #[default]
    Simple,
    Substitution,
    Sectioned,
}

impl StrategyKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StrategyKind::Simple => "simple",
            StrategyKind::Substitution => "substitution",
            StrategyKind::Sectioned => "sectioned",
        }
    }

    pub fn build(self) -> Arc<dyn PromptStrategy> {
        match self {
            StrategyKind::Simple => Arc::new(SimpleTemplateStrategy),
            StrategyKind::Substitution => Arc::new(SubstitutionStrategy),
            StrategyKind::Sectioned => Arc::new(SectionedStrategy),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simple" => Ok(StrategyKind::Simple),
            "substitution" => Ok(StrategyKind::Substitution),
            "sectioned" | "advanced" => Ok(StrategyKind::Sectioned),
            other => Err(format!(
                "unknown composer strategy '{other}' (expected simple|substitution|sectioned)"
            )),
        }
    }
}
