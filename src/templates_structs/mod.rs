// Template context structures for Askama templates, organized by page group.

/// Product name shown in page titles and headers.
pub const APP_NAME: &str = "Firefox Input";

mod feedback;
mod opinion;
mod api;

pub use self::feedback::{
    FormView, FeedbackIndexTemplate, MobileIndexTemplate, MobileFeedbackTemplate,
    ThanksTemplate, MobileThanksTemplate, DownloadTemplate, MobileDownloadTemplate,
};
pub use self::opinion::OpinionDetailTemplate;
pub use self::api::{ApiOpinionResponse, ApiErrorResponse};
