use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::forms::name::NameForm;
use crate::repository::DieselRepository;
use crate::routes::query_params;
use crate::services::ServiceError;
use crate::services::tags as tag_service;

#[get("/tags")]
pub async fn list_tags(
    params: web::Query<Vec<(String, String)>>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let params = query_params(params);
    let response = tag_service::list_tags(repo.get_ref(), &params)?;
    Ok(HttpResponse::Ok().json(response))
}

#[get("/tags/{id}")]
pub async fn show_tag(
    id: web::Path<i64>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let tag = tag_service::get_tag(repo.get_ref(), id.into_inner())?;
    Ok(HttpResponse::Ok().json(tag))
}

#[post("/tags")]
pub async fn create_tag(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<NameForm>,
) -> Result<HttpResponse, ServiceError> {
    let tag = tag_service::create_tag(repo.get_ref(), form)?;
    Ok(HttpResponse::Created().json(tag))
}

#[put("/tags/{id}")]
pub async fn rename_tag(
    id: web::Path<i64>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<NameForm>,
) -> Result<HttpResponse, ServiceError> {
    let tag = tag_service::rename_tag(repo.get_ref(), id.into_inner(), form)?;
    Ok(HttpResponse::Ok().json(tag))
}

#[delete("/tags/{id}")]
pub async fn delete_tag(
    id: web::Path<i64>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    tag_service::delete_tag(repo.get_ref(), id.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}
