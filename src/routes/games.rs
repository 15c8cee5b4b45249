use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::forms::game::GameForm;
use crate::repository::DieselRepository;
use crate::routes::query_params;
use crate::services::ServiceError;
use crate::services::games as game_service;

#[get("/games")]
pub async fn list_games(
    params: web::Query<Vec<(String, String)>>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let params = query_params(params);
    let response = game_service::list_games(repo.get_ref(), &params)?;
    Ok(HttpResponse::Ok().json(response))
}

#[get("/games/{id}")]
pub async fn show_game(
    id: web::Path<i64>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let game = game_service::get_game(repo.get_ref(), id.into_inner())?;
    Ok(HttpResponse::Ok().json(game))
}

#[post("/games")]
pub async fn create_game(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<GameForm>,
) -> Result<HttpResponse, ServiceError> {
    let game = game_service::create_game(repo.get_ref(), form)?;
    Ok(HttpResponse::Created().json(game))
}

#[put("/games/{id}")]
pub async fn update_game(
    id: web::Path<i64>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<GameForm>,
) -> Result<HttpResponse, ServiceError> {
    let game = game_service::update_game(repo.get_ref(), id.into_inner(), form)?;
    Ok(HttpResponse::Ok().json(game))
}

#[delete("/games/{id}")]
pub async fn delete_game(
    id: web::Path<i64>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    game_service::delete_game(repo.get_ref(), id.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}
