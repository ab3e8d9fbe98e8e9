// Prompt composition: phrase tables, strategies, normalization, redaction,
// and the delayed generation desk.
// Handlers are the only HTTP-aware code in this module.

pub mod desk;
pub mod engine;
pub mod handlers;
pub mod normalize;
pub mod prompts;
pub mod redaction;
pub mod sectioned;
pub mod selection;
pub mod simple;
pub mod strategy;
pub mod substitution;
pub mod tables;

// Re-export the public API consumed by state and routes.
pub use desk::GenerationDesk;
pub use engine::Composer;
pub use redaction::RedactionMode;
pub use strategy::StrategyKind;
