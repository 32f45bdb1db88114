use askama::Template;

use crate::models::opinion::Opinion;

#[derive(Template)]
#[template(path = "opinion/detail.html")]
pub struct OpinionDetailTemplate {
    pub app_name: &'static str,
    pub opinion: Opinion,
    pub locale_name: &'static str,
}
