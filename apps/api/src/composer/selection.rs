//! Selection: the user's current form state and the enumerated tags it carries.
//!
//! Tags arrive as free strings from the form. Parsing is lenient: an unknown or
//! empty tag becomes `None` and composition falls back to a default phrase.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Word-count slider bounds exposed to the form.
pub const WORD_COUNT_MIN: u32 = 50;
pub const WORD_COUNT_MAX: u32 = 500;
pub const WORD_COUNT_STEP: u32 = 10;
pub const WORD_COUNT_DEFAULT: u32 = 150;

pub const DEFAULT_TONE_TAG: &str = "professional";

/// Message returned when the required subject is missing.
pub const SUBJECT_REQUIRED: &str = "Please enter what your prompt is about";

/// Desired content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    Write,
    Draw,
    Code,
    Explain,
    Brainstorm,
    Marketing,
    DesignLanding,
    AnalyzeData,
    VideoScript,
    EmailCampaign,
    ProductFeature,
    TechnicalDoc,
    SocialMedia,
    BusinessStrategy,
    Educational,
    ResearchSummary,
}

impl Goal {
    pub const ALL: [Goal; 16] = [
        Goal::Write,
        Goal::Draw,
        Goal::Code,
        Goal::Explain,
        Goal::Brainstorm,
        Goal::Marketing,
        Goal::DesignLanding,
        Goal::AnalyzeData,
        Goal::VideoScript,
        Goal::EmailCampaign,
        Goal::ProductFeature,
        Goal::TechnicalDoc,
        Goal::SocialMedia,
        Goal::BusinessStrategy,
        Goal::Educational,
        Goal::ResearchSummary,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Goal::Write => "write",
            Goal::Draw => "draw",
            Goal::Code => "code",
            Goal::Explain => "explain",
            Goal::Brainstorm => "brainstorm",
            Goal::Marketing => "marketing",
            Goal::DesignLanding => "design_landing",
            Goal::AnalyzeData => "analyze_data",
            Goal::VideoScript => "video_script",
            Goal::EmailCampaign => "email_campaign",
            Goal::ProductFeature => "product_feature",
            Goal::TechnicalDoc => "technical_doc",
            Goal::SocialMedia => "social_media",
            Goal::BusinessStrategy => "business_strategy",
            Goal::Educational => "educational",
            Goal::ResearchSummary => "research_summary",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Goal::Write => "Write Content",
            Goal::Draw => "Generate Art",
            Goal::Code => "Create Code",
            Goal::Explain => "Explain Concept",
            Goal::Brainstorm => "Brainstorm Ideas",
            Goal::Marketing => "Create Marketing Copy",
            Goal::DesignLanding => "Design Landing Page",
            Goal::AnalyzeData => "Analyze Data",
            Goal::VideoScript => "Write Video Script",
            Goal::EmailCampaign => "Plan Email Campaign",
            Goal::ProductFeature => "Design Product Feature",
            Goal::TechnicalDoc => "Write Technical Docs",
            Goal::SocialMedia => "Create Social Media Content",
            Goal::BusinessStrategy => "Develop Business Strategy",
            Goal::Educational => "Create Educational Content",
            Goal::ResearchSummary => "Summarize Research",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        Self::ALL.into_iter().find(|g| g.tag() == tag)
    }
}

/// Stylistic register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Professional,
    Friendly,
    Technical,
    Creative,
    Persuasive,
    Formal,
}

impl Tone {
    pub const ALL: [Tone; 6] = [
        Tone::Professional,
        Tone::Friendly,
        Tone::Technical,
        Tone::Creative,
        Tone::Persuasive,
        Tone::Formal,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Friendly => "friendly",
            Tone::Technical => "technical",
            Tone::Creative => "creative",
            Tone::Persuasive => "persuasive",
            Tone::Formal => "formal",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tone::Professional => "Professional",
            Tone::Friendly => "Friendly",
            Tone::Technical => "Technical",
            Tone::Creative => "Creative",
            Tone::Persuasive => "Persuasive",
            Tone::Formal => "Formal",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        Self::ALL.into_iter().find(|t| t.tag() == tag)
    }
}

/// Target reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Audience {
    General,
    Professionals,
    Developers,
    Kids,
    Students,
    Marketers,
    Creators,
    Executives,
    Researchers,
    Technical,
}

impl Audience {
    pub const ALL: [Audience; 10] = [
        Audience::General,
        Audience::Professionals,
        Audience::Developers,
        Audience::Kids,
        Audience::Students,
        Audience::Marketers,
        Audience::Creators,
        Audience::Executives,
        Audience::Researchers,
        Audience::Technical,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Audience::General => "general",
            Audience::Professionals => "professionals",
            Audience::Developers => "developers",
            Audience::Kids => "kids",
            Audience::Students => "students",
            Audience::Marketers => "marketers",
            Audience::Creators => "creators",
            Audience::Executives => "executives",
            Audience::Researchers => "researchers",
            Audience::Technical => "technical",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Audience::General => "General Audience",
            Audience::Professionals => "Professionals",
            Audience::Developers => "Developers",
            Audience::Kids => "Children",
            Audience::Students => "Students",
            Audience::Marketers => "Marketers",
            Audience::Creators => "Content Creators",
            Audience::Executives => "Executives",
            Audience::Researchers => "Researchers",
            Audience::Technical => "Technical Non-Developers",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        Self::ALL.into_iter().find(|a| a.tag() == tag)
    }
}

/// User-configured limits on the generated text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Constraints {
    /// Advisory target; 0 omits the clause.
    #[serde(alias = "wordCount")]
    pub word_count: u32,
    #[serde(alias = "hasForbiddenWords")]
    pub has_forbidden_words: bool,
    /// Comma separated, as typed into the form.
    #[serde(alias = "forbiddenWords")]
    pub forbidden_words: String,
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            word_count: WORD_COUNT_DEFAULT,
            has_forbidden_words: false,
            forbidden_words: String::new(),
        }
    }
}

impl Constraints {
    /// Parsed forbidden-word list. Empty when the toggle is off.
    ///
    /// Entries are trimmed, empties dropped, and duplicates (ignoring case)
    /// collapsed to their first spelling.
    pub fn forbidden_list(&self) -> Vec<String> {
        if !self.has_forbidden_words {
            return Vec::new();
        }

        let mut words: Vec<String> = Vec::new();
        for word in self.forbidden_words.split(',').map(str::trim) {
            if word.is_empty() {
                continue;
            }
            let lower = word.to_lowercase();
            if !words.iter().any(|w| w.to_lowercase() == lower) {
                words.push(word.to_string());
            }
        }
        words
    }
}

/// The complete form state submitted on "Generate".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selection {
    pub subject: String,
    pub goal: String,
    pub tone: String,
    pub audience: String,
    pub constraints: Constraints,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            subject: String::new(),
            goal: String::new(),
            tone: DEFAULT_TONE_TAG.to_string(),
            audience: String::new(),
            constraints: Constraints::default(),
        }
    }
}

impl Selection {
    /// The one precondition composition relies on: a non-blank subject.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.subject.trim().is_empty() {
            return Err(AppError::Validation(SUBJECT_REQUIRED.to_string()));
        }
        Ok(())
    }

    pub fn goal(&self) -> Option<Goal> {
        Goal::from_tag(&self.goal)
    }

    pub fn tone(&self) -> Option<Tone> {
        Tone::from_tag(&self.tone)
    }

    pub fn audience(&self) -> Option<Audience> {
        Audience::from_tag(&self.audience)
    }
}
