use actix_web::{post, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::dto::{AskRequest, AskResponse},
};

#[post("/ask-gemini")]
pub async fn ask_gemini(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<AskRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let request_id = get_request_id(&req).unwrap_or_else(|| "-".to_string());
    log::info!("[{}] Received question: \"{}\"", request_id, request.question);

    let answer = state.ai_proxy.ask(&request.question).await?;
    Ok(HttpResponse::Ok().json(AskResponse { answer }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::Config,
        handlers::json_config,
        services::model_service::{MockGenerativeModel, UpstreamError},
        test_utils::test_helpers::assert_error_status,
    };
    use actix_web::{http::StatusCode, test, App};
    use std::sync::Arc;

    fn state_with(mock: MockGenerativeModel) -> web::Data<AppState> {
        web::Data::new(AppState::with_model(Config::test_config(), Arc::new(mock)))
    }

    #[actix_web::test]
    async fn test_ask_gemini_returns_answer() {
        let mut mock = MockGenerativeModel::new();
        mock.expect_generate_content()
            .times(1)
            .returning(|_| Ok("Paris".to_string()));

        let app = test::init_service(
            App::new()
                .app_data(state_with(mock))
                .app_data(json_config())
                .service(ask_gemini),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/ask-gemini")
            .set_json(serde_json::json!({"question": "Capital of France?"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: AskResponse = test::read_body_json(resp).await;
        assert_eq!(body.answer, "Paris");
    }

    #[actix_web::test]
    async fn test_ask_gemini_rejects_blank_question() {
        let mut mock = MockGenerativeModel::new();
        mock.expect_generate_content().times(0);

        let app = test::init_service(
            App::new()
                .app_data(state_with(mock))
                .app_data(json_config())
                .service(ask_gemini),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/ask-gemini")
            .set_json(serde_json::json!({"question": "   "}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body["error"],
            "Question is required and must be a non-empty string."
        );
    }

    #[actix_web::test]
    async fn test_ask_gemini_rejects_missing_question_with_json_error() {
        let app = test::init_service(
            App::new()
                .app_data(state_with(MockGenerativeModel::new()))
                .app_data(json_config())
                .service(ask_gemini),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/ask-gemini")
            .set_json(serde_json::json!({"prompt": "hi"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string());
    }

    #[actix_web::test]
    async fn test_ask_gemini_maps_upstream_failure() {
        let mut mock = MockGenerativeModel::new();
        mock.expect_generate_content()
            .returning(|_| {
                Err(UpstreamError::with_status(
                    400,
                    "API key not valid. Please pass a valid API key.",
                ))
            });

        let app = test::init_service(
            App::new()
                .app_data(state_with(mock))
                .app_data(json_config())
                .service(ask_gemini),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/ask-gemini")
            .set_json(serde_json::json!({"question": "hello"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_error_status(resp.status());
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body["error"],
            "Authentication error: Your Gemini API Key might be invalid."
        );
        assert_eq!(
            body["details"],
            "API key not valid. Please pass a valid API key."
        );
    }
}
