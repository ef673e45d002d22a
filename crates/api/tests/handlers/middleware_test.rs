use workplan_core::errors::PlanError;

#[tokio::test]
async fn test_error_handling_not_found() {
    // Create a not found error
    let error = PlanError::NotFound("Resource not found".to_string());

    // Map the error to a response
    let response = workplan_api::middleware::error_handling::map_error(error);

    // Assert the response has the correct status code
    assert_eq!(response.status(), axum::http::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_error_handling_validation() {
    // Create a validation error
    let error = PlanError::Validation("Invalid input".to_string());

    // Map the error to a response
    let response = workplan_api::middleware::error_handling::map_error(error);

    // Assert the response has the correct status code
    assert_eq!(response.status(), axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_error_handling_conflict() {
    // Create a conflict error
    let error = PlanError::Conflict("Duplicate half-day entry".to_string());

    // Map the error to a response
    let response = workplan_api::middleware::error_handling::map_error(error);

    // Assert the response has the correct status code
    assert_eq!(response.status(), axum::http::StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_error_handling_database() {
    // Create a database error
    let error = PlanError::Database(eyre::eyre!("Database error"));

    // Map the error to a response
    let response = workplan_api::middleware::error_handling::map_error(error);

    // Assert the response has the correct status code
    assert_eq!(
        response.status(),
        axum::http::StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[tokio::test]
async fn test_error_handling_internal() {
    // Create an internal error
    let error = PlanError::Internal(Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "Internal error",
    )));

    // Map the error to a response
    let response = workplan_api::middleware::error_handling::map_error(error);

    // Assert the response has the correct status code
    assert_eq!(
        response.status(),
        axum::http::StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[tokio::test]
async fn test_app_error_from_eyre() {
    use workplan_api::middleware::error_handling::AppError;

    let error: AppError = eyre::eyre!("connection refused").into();
    let response = axum::response::IntoResponse::into_response(error);

    assert_eq!(
        response.status(),
        axum::http::StatusCode::INTERNAL_SERVER_ERROR
    );
}
