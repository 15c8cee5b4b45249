//! HTTP endpoints.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError, web};
use serde_json::json;

use crate::query::QueryParams;
use crate::services::ServiceError;

pub mod games;
pub mod platforms;
pub mod tags;

/// Registers every catalog endpoint.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(games::list_games)
        .service(games::show_game)
        .service(games::create_game)
        .service(games::update_game)
        .service(games::delete_game)
        .service(tags::list_tags)
        .service(tags::show_tag)
        .service(tags::create_tag)
        .service(tags::rename_tag)
        .service(tags::delete_tag)
        .service(platforms::list_platforms)
        .service(platforms::show_platform)
        .service(platforms::create_platform)
        .service(platforms::rename_platform)
        .service(platforms::delete_platform);
}

/// Collects decoded query-string pairs into listing parameters.
pub(crate) fn query_params(pairs: web::Query<Vec<(String, String)>>) -> QueryParams {
    pairs.into_inner().into_iter().collect()
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::InvalidParams(_)
            | ServiceError::Form(_)
            | ServiceError::TypeConstraint(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound => StatusCode::NOT_FOUND,
            ServiceError::Conflict(_) => StatusCode::CONFLICT,
            ServiceError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ServiceError::InvalidParams(err) => json!({
                "error": "invalid_params",
                "param": err.param(),
                "value": err.value(),
                "message": err.to_string(),
            }),
            ServiceError::Form(_) | ServiceError::TypeConstraint(_) => json!({
                "error": "invalid_request",
                "message": self.to_string(),
            }),
            ServiceError::NotFound => json!({ "error": "not_found" }),
            ServiceError::Conflict(_) => json!({
                "error": "conflict",
                "message": self.to_string(),
            }),
            ServiceError::Internal => json!({ "error": "internal" }),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::QueryError;

    #[test]
    fn invalid_params_is_bad_request() {
        let err = ServiceError::InvalidParams(QueryError::UnknownMode {
            value: "x".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn status_codes_follow_error_kind() {
        assert_eq!(ServiceError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ServiceError::Conflict("dup".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ServiceError::Internal.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
