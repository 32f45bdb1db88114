use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::ua::Platform;
use crate::validate;

/// The kinds of feedback an opinion can carry. Stored as INTEGER codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[repr(i32)]
pub enum OpinionType {
    Praise = 1,
    Issue = 2,
    Idea = 3,
    Broken = 4,
}

impl OpinionType {
    pub const ALL: [OpinionType; 4] = [
        OpinionType::Praise,
        OpinionType::Issue,
        OpinionType::Idea,
        OpinionType::Broken,
    ];

    pub fn code(&self) -> i32 {
        *self as i32
    }

    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }

    /// Legacy per-type page slugs: `happy`, `sad`, `idea` (alias `suggestion`).
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "happy" => Some(OpinionType::Praise),
            "sad" => Some(OpinionType::Issue),
            "idea" | "suggestion" => Some(OpinionType::Idea),
            _ => None,
        }
    }

    /// Prefix for form element ids and the anchor on the unified page.
    pub fn form_prefix(&self) -> &'static str {
        match self {
            OpinionType::Praise => "happy",
            OpinionType::Issue => "sad",
            OpinionType::Idea => "idea",
            OpinionType::Broken => "broken",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OpinionType::Praise => "Praise",
            OpinionType::Issue => "Issue",
            OpinionType::Idea => "Idea",
            OpinionType::Broken => "Broken Website",
        }
    }

    /// Smiley style shown next to an opinion; empty for types without one.
    pub fn smiley(&self) -> &'static str {
        match self {
            OpinionType::Praise => "happy",
            OpinionType::Issue => "sad",
            OpinionType::Idea | OpinionType::Broken => "",
        }
    }
}

impl TryFrom<i32> for OpinionType {
    type Error = AppError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        OpinionType::from_code(code).ok_or(AppError::UnknownOpinionType(code))
    }
}

/// A stored opinion.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Opinion {
    pub id: i64,
    pub opinion_type: OpinionType,
    pub url: String,
    pub description: String,
    pub user_agent: String,
    pub locale: String,
    pub manufacturer: String,
    pub device: String,
    pub product: String,
    pub version: String,
    pub platform: String,
    pub created_at: DateTime<Utc>,
}

impl Opinion {
    pub fn platform_name(&self) -> &'static str {
        Platform::from_short(&self.platform).pretty()
    }

    /// Only http(s) URLs are rendered as links; anything else is shown as text.
    pub fn has_link(&self) -> bool {
        validate::is_link_url(&self.url)
    }

    pub fn created_display(&self) -> String {
        self.created_at.format("%Y-%m-%d %H:%M UTC").to_string()
    }
}

/// Row values for a new opinion, after URL normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOpinion {
    pub opinion_type: OpinionType,
    pub url: String,
    pub description: String,
    pub user_agent: String,
    pub locale: String,
    pub manufacturer: String,
    pub device: String,
    pub product: String,
    pub version: String,
    pub platform: String,
}

/// Raw form body posted by the feedback pages. `type` is only read by the
/// unified page; the legacy pages take the type from their path.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedbackSubmission {
    #[serde(rename = "type", default)]
    pub type_code: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub add_url: Option<String>,
    #[serde(default)]
    pub manufacturer: String,
    #[serde(default)]
    pub device: String,
}

impl FeedbackSubmission {
    /// Resolve the posted `type` field. Missing or unknown codes are a
    /// client error.
    pub fn opinion_type(&self) -> Result<OpinionType, AppError> {
        self.type_code
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i32>().ok())
            .and_then(OpinionType::from_code)
            .ok_or_else(|| AppError::BadRequest("Invalid feedback type".to_string()))
    }
}
