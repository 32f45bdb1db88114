use actix_web::{HttpResponse, web};
use sqlx::PgPool;

use crate::errors::{AppError, render};
use crate::locale;
use crate::models::opinion;
use crate::templates_structs::{APP_NAME, OpinionDetailTemplate};

/// GET /opinion/{id}
pub async fn detail(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let opinion = opinion::find_by_id(&pool, id)
        .await?
        .ok_or(AppError::NotFound)?;

    let locale_name = locale::locale_name(&opinion.locale);
    render(OpinionDetailTemplate {
        app_name: APP_NAME,
        opinion,
        locale_name,
    })
}
