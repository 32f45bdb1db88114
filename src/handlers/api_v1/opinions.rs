use actix_web::{HttpResponse, web};
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::opinion;
use crate::templates_structs::{ApiErrorResponse, ApiOpinionResponse};

/// GET /api/v1/opinions/{id} - Get single opinion by ID
pub async fn read(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    match opinion::find_by_id(&pool, id).await? {
        Some(o) => Ok(HttpResponse::Ok().json(ApiOpinionResponse::from(o))),
        None => Ok(HttpResponse::NotFound().json(ApiErrorResponse {
            error: format!("Opinion {id} not found"),
        })),
    }
}
