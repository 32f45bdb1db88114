use crate::config::AppConfig;
use crate::validate::{self, MAX_METADATA_LENGTH};

use super::types::{FeedbackSubmission, OpinionType};

/// Limits applied while validating feedback forms.
#[derive(Debug, Clone, Copy)]
pub struct FormRules {
    pub max_description_length: usize,
}

impl FormRules {
    pub fn from_config(config: &AppConfig) -> Self {
        FormRules {
            max_description_length: config.max_feedback_length,
        }
    }
}

/// Values bound to a feedback form, as submitted or as pre-filled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackInput {
    pub description: String,
    pub url: String,
    pub add_url: bool,
    pub manufacturer: String,
    pub device: String,
}

impl FeedbackInput {
    /// Initial values for a fresh form; `url` comes from the `?url=` query
    /// parameter set by the browser extension.
    pub fn initial(url: &str) -> Self {
        FeedbackInput {
            url: url.to_string(),
            ..Default::default()
        }
    }
}

impl From<FeedbackSubmission> for FeedbackInput {
    fn from(s: FeedbackSubmission) -> Self {
        FeedbackInput {
            add_url: validate::checkbox(s.add_url.as_deref()),
            description: s.description,
            url: s.url,
            manufacturer: s.manufacturer,
            device: s.device,
        }
    }
}

/// Validated, trimmed form values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedFeedback {
    pub description: String,
    pub url: String,
    pub add_url: bool,
    pub manufacturer: String,
    pub device: String,
}

/// Field-level validation errors, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(Vec<(&'static str, String)>);

impl FormErrors {
    pub fn add(&mut self, field: &'static str, message: String) {
        self.0.push((field, message));
    }

    /// First error for `field`, or an empty string.
    pub fn get(&self, field: &str) -> &str {
        self.0
            .iter()
            .find(|(f, _)| *f == field)
            .map_or("", |(_, m)| m.as_str())
    }

    pub fn has(&self, field: &str) -> bool {
        self.0.iter().any(|(f, _)| *f == field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UrlRule {
    Optional,
    Required,
}

/// One feedback form per opinion type. Praise, Issue and Idea share their
/// field rules; broken-site reports must name the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackForm {
    Praise(FeedbackInput),
    Issue(FeedbackInput),
    Idea(FeedbackInput),
    Broken(FeedbackInput),
}

impl FeedbackForm {
    pub fn bind(kind: OpinionType, input: FeedbackInput) -> Self {
        match kind {
            OpinionType::Praise => FeedbackForm::Praise(input),
            OpinionType::Issue => FeedbackForm::Issue(input),
            OpinionType::Idea => FeedbackForm::Idea(input),
            OpinionType::Broken => FeedbackForm::Broken(input),
        }
    }

    pub fn blank(kind: OpinionType) -> Self {
        Self::bind(kind, FeedbackInput::default())
    }

    pub fn kind(&self) -> OpinionType {
        match self {
            FeedbackForm::Praise(_) => OpinionType::Praise,
            FeedbackForm::Issue(_) => OpinionType::Issue,
            FeedbackForm::Idea(_) => OpinionType::Idea,
            FeedbackForm::Broken(_) => OpinionType::Broken,
        }
    }

    pub fn input(&self) -> &FeedbackInput {
        match self {
            FeedbackForm::Praise(input)
            | FeedbackForm::Issue(input)
            | FeedbackForm::Idea(input)
            | FeedbackForm::Broken(input) => input,
        }
    }

    pub fn url_required(&self) -> bool {
        self.url_rule() == UrlRule::Required
    }

    fn url_rule(&self) -> UrlRule {
        match self {
            FeedbackForm::Praise(_) | FeedbackForm::Issue(_) | FeedbackForm::Idea(_) => UrlRule::Optional,
            FeedbackForm::Broken(_) => UrlRule::Required,
        }
    }

    pub fn validate(&self, rules: &FormRules) -> Result<CleanedFeedback, FormErrors> {
        let input = self.input();
        let mut errors = FormErrors::default();

        if let Some(e) = validate::validate_required(&input.description, "Description", rules.max_description_length) {
            errors.add("description", e);
        }

        let url_error = match self.url_rule() {
            UrlRule::Required => validate::validate_required(&input.url, "URL", validate::MAX_URL_LENGTH)
                .or_else(|| validate::validate_url(&input.url)),
            UrlRule::Optional => validate::validate_url(&input.url),
        };
        if let Some(e) = url_error {
            errors.add("url", e);
        }

        if let Some(e) = validate::validate_optional(&input.manufacturer, "Manufacturer", MAX_METADATA_LENGTH) {
            errors.add("manufacturer", e);
        }
        if let Some(e) = validate::validate_optional(&input.device, "Device", MAX_METADATA_LENGTH) {
            errors.add("device", e);
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(CleanedFeedback {
            description: input.description.trim().to_string(),
            url: input.url.trim().to_string(),
            add_url: input.add_url,
            manufacturer: input.manufacturer.trim().to_string(),
            device: input.device.trim().to_string(),
        })
    }
}
