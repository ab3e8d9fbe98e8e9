//! Prompt Composer: resolves a selection, renders it with the active
//! strategy, then normalizes and redacts.
//!
//! Flow: resolve tags → strategy.render → normalize → redact forbidden words
//!       (re-normalizing per pass) → GeneratedPrompt.
//!
//! The composer does not validate the subject; callers run
//! `Selection::validate` first.

use std::sync::{Arc, Mutex, PoisonError};

use anyhow::Context;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde::Serialize;
use tracing::debug;

use crate::composer::normalize::normalize;
use crate::composer::redaction::{RedactionMode, Redactor};
use crate::composer::selection::Selection;
use crate::composer::strategy::{PromptStrategy, ResolvedSelection, StrategyKind};
use crate::errors::AppError;

/// The enhanced prompt plus a few facts about how it was built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedPrompt {
    pub prompt: String,
    pub strategy: StrategyKind,
    /// Whitespace-separated words in `prompt`.
    pub word_count: usize,
    /// Forbidden-word hits replaced.
    pub redacted: usize,
}

pub struct Composer {
    strategy: Arc<dyn PromptStrategy>,
    redaction: RedactionMode,
    rng: Mutex<StdRng>,
}

impl Composer {
    /// `seed` fixes the variant rng; `None` seeds from entropy.
    pub fn new(
        strategy: Arc<dyn PromptStrategy>,
        redaction: RedactionMode,
        seed: Option<u64>,
    ) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            strategy,
            redaction,
            rng: Mutex::new(rng),
        }
    }

    pub fn strategy_kind(&self) -> StrategyKind {
        self.strategy.kind()
    }

    pub fn redaction_mode(&self) -> RedactionMode {
        self.redaction
    }

    /// Composes with the composer's own rng.
    pub fn compose(&self, selection: &Selection) -> Result<GeneratedPrompt, AppError> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        self.compose_with_rng(selection, &mut *rng)
    }

    /// Composes with a caller-supplied rng.
    ///
    /// Errors only when the forbidden-word list cannot be compiled into matchers.
    pub fn compose_with_rng(
        &self,
        selection: &Selection,
        rng: &mut dyn RngCore,
    ) -> Result<GeneratedPrompt, AppError> {
        let resolved = ResolvedSelection::resolve(selection);
        let layout = self.strategy.layout();

        let rendered = self.strategy.render(&resolved, rng);
        let mut prompt = normalize(&rendered, layout);
        let mut redacted = 0;

        if !resolved.forbidden_words.is_empty() {
            let redactor = Redactor::new(&resolved.forbidden_words, self.redaction)
                .context("compiling forbidden-word matchers")?;
            let outcome = redactor.apply(&prompt, layout);
            prompt = outcome.text;
            redacted = outcome.hits;
        }

        let word_count = prompt.split_whitespace().count();
        debug!(
            strategy = %self.strategy.kind(),
            goal = ?resolved.goal,
            tone = ?resolved.tone,
            audience = ?resolved.audience,
            word_count,
            redacted,
            "Composed prompt"
        );

        Ok(GeneratedPrompt {
            prompt,
            strategy: self.strategy.kind(),
            word_count,
            redacted,
        })
    }
}
