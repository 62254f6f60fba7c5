use foodgram_client::error::AppError;
use foodgram_client::model::responses::ApiResponse;
use foodgram_client::presentation::catalog::Tag;
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde_json::json;

#[test]
fn test_json_response_maps_to_type() {
    let response = ApiResponse::Json {
        status: StatusCode::OK,
        body: json!({"id": 1, "name": "Lunch", "color": "#49B64E", "slug": "lunch"}),
    };
    assert!(response.is_json());

    let tag: Tag = response.into_json().unwrap();
    assert_eq!(tag.slug, "lunch");
}

#[test]
fn test_opaque_response_has_no_body() {
    let response = ApiResponse::Opaque {
        status: StatusCode::NO_CONTENT,
        headers: HeaderMap::new(),
    };
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(response.body().is_none());

    match response.into_json::<Tag>() {
        Err(AppError::UnexpectedBody(status)) => assert_eq!(status, StatusCode::NO_CONTENT),
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn test_json_response_with_wrong_shape() {
    let response = ApiResponse::Json {
        status: StatusCode::OK,
        body: json!([1, 2, 3]),
    };
    assert!(matches!(response.into_json::<Tag>(), Err(AppError::Json(_))));
}
