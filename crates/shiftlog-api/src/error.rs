//! HTTP error responses.
//!
//! The status mapping lives on `AppError` itself in `shiftlog-core`; this
//! module re-exports the response body type and pins the mapping with
//! tests at the API boundary.

pub use shiftlog_core::error::ApiErrorResponse;

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    use shiftlog_core::error::AppError;

    #[test]
    fn test_stale_edit_maps_to_forbidden() {
        let resp = AppError::stale_edit("too old").into_response();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_validation_maps_to_bad_request() {
        let resp = AppError::validation("missing title").into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_database_maps_to_internal_error() {
        let resp = AppError::database("boom").into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let resp = AppError::not_found("no such report").into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
