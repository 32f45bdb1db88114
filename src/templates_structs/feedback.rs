use askama::Template;

use crate::models::opinion::{FeedbackForm, FormErrors, OpinionType};

/// A feedback form as the templates see it: bound values plus errors.
#[derive(Debug, Clone)]
pub struct FormView {
    pub kind: OpinionType,
    pub prefix: &'static str,
    pub type_code: i32,
    pub label: &'static str,
    pub description: String,
    pub url: String,
    pub add_url: bool,
    pub manufacturer: String,
    pub device: String,
    pub url_required: bool,
    pub errors: FormErrors,
}

impl FormView {
    pub fn new(form: &FeedbackForm, errors: FormErrors) -> Self {
        let kind = form.kind();
        let input = form.input();
        FormView {
            kind,
            prefix: kind.form_prefix(),
            type_code: kind.code(),
            label: kind.label(),
            description: input.description.clone(),
            url: input.url.clone(),
            add_url: input.add_url,
            manufacturer: input.manufacturer.clone(),
            device: input.device.clone(),
            url_required: form.url_required(),
            errors,
        }
    }

    pub fn blank(kind: OpinionType) -> Self {
        Self::new(&FeedbackForm::blank(kind), FormErrors::default())
    }

    /// Element id for `field`, e.g. `sad-description`.
    pub fn field_id(&self, field: &str) -> String {
        format!("{}-{}", self.prefix, field)
    }

    /// The idea form gets its own container id for styling.
    pub fn div_id(&self) -> &'static str {
        match self.kind {
            OpinionType::Idea => "ideaform",
            _ => "feedbackform",
        }
    }
}

/// Desktop page with one form per feedback type.
#[derive(Template)]
#[template(path = "feedback/index.html")]
pub struct FeedbackIndexTemplate {
    pub app_name: &'static str,
    pub forms: Vec<FormView>,
    pub post_url: &'static str,
    pub max_length: usize,
}

/// Mobile landing page linking to the per-type forms.
#[derive(Template)]
#[template(path = "mobile/index.html")]
pub struct MobileIndexTemplate {
    pub app_name: &'static str,
}

#[derive(Template)]
#[template(path = "mobile/feedback.html")]
pub struct MobileFeedbackTemplate {
    pub app_name: &'static str,
    pub form: FormView,
    pub post_url: String,
    pub max_length: usize,
}

#[derive(Template)]
#[template(path = "feedback/thanks.html")]
pub struct ThanksTemplate {
    pub app_name: &'static str,
}

#[derive(Template)]
#[template(path = "mobile/thanks.html")]
pub struct MobileThanksTemplate {
    pub app_name: &'static str,
}

#[derive(Template)]
#[template(path = "feedback/download.html")]
pub struct DownloadTemplate {
    pub app_name: &'static str,
}

#[derive(Template)]
#[template(path = "mobile/download.html")]
pub struct MobileDownloadTemplate {
    pub app_name: &'static str,
}
