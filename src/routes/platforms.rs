use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::forms::name::NameForm;
use crate::repository::DieselRepository;
use crate::routes::query_params;
use crate::services::ServiceError;
use crate::services::platforms as platform_service;

#[get("/platforms")]
pub async fn list_platforms(
    params: web::Query<Vec<(String, String)>>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let params = query_params(params);
    let response = platform_service::list_platforms(repo.get_ref(), &params)?;
    Ok(HttpResponse::Ok().json(response))
}

#[get("/platforms/{id}")]
pub async fn show_platform(
    id: web::Path<i64>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let platform = platform_service::get_platform(repo.get_ref(), id.into_inner())?;
    Ok(HttpResponse::Ok().json(platform))
}

#[post("/platforms")]
pub async fn create_platform(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<NameForm>,
) -> Result<HttpResponse, ServiceError> {
    let platform = platform_service::create_platform(repo.get_ref(), form)?;
    Ok(HttpResponse::Created().json(platform))
}

#[put("/platforms/{id}")]
pub async fn rename_platform(
    id: web::Path<i64>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<NameForm>,
) -> Result<HttpResponse, ServiceError> {
    let platform = platform_service::rename_platform(repo.get_ref(), id.into_inner(), form)?;
    Ok(HttpResponse::Ok().json(platform))
}

#[delete("/platforms/{id}")]
pub async fn delete_platform(
    id: web::Path<i64>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    platform_service::delete_platform(repo.get_ref(), id.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}
