//! Axum route handlers for the Prompt API.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::composer::engine::GeneratedPrompt;
use crate::composer::redaction::RedactionMode;
use crate::composer::selection::{
    Audience, Goal, Selection, Tone, DEFAULT_TONE_TAG, WORD_COUNT_DEFAULT, WORD_COUNT_MAX,
    WORD_COUNT_MIN, WORD_COUNT_STEP,
};
use crate::composer::strategy::StrategyKind;
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct TagOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct WordCountBounds {
    pub min: u32,
    pub max: u32,
    pub step: u32,
    pub default: u32,
}

#[derive(Debug, Serialize)]
pub struct OptionsResponse {
    pub goals: Vec<TagOption>,
    pub tones: Vec<TagOption>,
    pub audiences: Vec<TagOption>,
    pub default_tone: &'static str,
    pub word_count: WordCountBounds,
    pub strategy: StrategyKind,
    pub redaction: RedactionMode,
    /// Simulated latency of `/generate`, for the form's progress indicator.
    pub generation_delay_ms: u64,
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    /// Requests sharing a session supersede each other. Omit for a one-off.
    #[serde(default, alias = "sessionId")]
    pub session_id: Option<Uuid>,
    #[serde(default)]
    pub selection: Selection,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub session_id: Uuid,
    pub generated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub generated: GeneratedPrompt,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/prompts/options
///
/// Everything the form needs to render its selects and slider.
pub async fn handle_options(State(state): State<AppState>) -> Json<OptionsResponse> {
    Json(OptionsResponse {
        goals: Goal::ALL
            .iter()
            .map(|g| TagOption {
                value: g.tag(),
                label: g.label(),
            })
            .collect(),
        tones: Tone::ALL
            .iter()
            .map(|t| TagOption {
                value: t.tag(),
                label: t.label(),
            })
            .collect(),
        audiences: Audience::ALL
            .iter()
            .map(|a| TagOption {
                value: a.tag(),
                label: a.label(),
            })
            .collect(),
        default_tone: DEFAULT_TONE_TAG,
        word_count: WordCountBounds {
            min: WORD_COUNT_MIN,
            max: WORD_COUNT_MAX,
            step: WORD_COUNT_STEP,
            default: WORD_COUNT_DEFAULT,
        },
        strategy: state.composer.strategy_kind(),
        redaction: state.composer.redaction_mode(),
        generation_delay_ms: u64::try_from(state.desk.delay().as_millis()).unwrap_or(u64::MAX),
    })
}

/// POST /api/v1/prompts/compose
///
/// Composes immediately, without the simulated delay.
pub async fn handle_compose(
    State(state): State<AppState>,
    Json(selection): Json<Selection>,
) -> Result<Json<GeneratedPrompt>, AppError> {
    selection.validate()?;
    let generated = state.composer.compose(&selection)?;
    Ok(Json(generated))
}

/// POST /api/v1/prompts/generate
///
/// Validates first, then waits out the generation delay. A newer request for
/// the same session turns this one into a 409.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    request.selection.validate()?;

    let session_id = request.session_id.unwrap_or_else(Uuid::new_v4);
    info!(%session_id, strategy = %state.composer.strategy_kind(), "Generation requested");

    let generated = state
        .desk
        .generate(session_id, &state.composer, &request.selection)
        .await?;

    Ok(Json(GenerateResponse {
        session_id,
        generated_at: Utc::now(),
        generated,
    }))
}
