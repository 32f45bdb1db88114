pub mod form;
pub mod queries;
pub mod types;

pub use form::{CleanedFeedback, FeedbackForm, FeedbackInput, FormErrors, FormRules};
pub use queries::*;
pub use types::*;
