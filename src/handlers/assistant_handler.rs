use actix_web::{post, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState,
    constants::PromptTemplate,
    errors::AppError,
    middleware::get_request_id,
    models::dto::{AssistantRequest, AssistantResponse},
};

/// Runs one of the canned assistant prompts.
#[post("/assistant/{template}")]
pub async fn ask_assistant(
    req: HttpRequest,
    state: web::Data<AppState>,
    template: web::Path<String>,
    request: web::Json<AssistantRequest>,
) -> Result<HttpResponse, AppError> {
    let template: PromptTemplate = template.parse()?;
    let prompt = template.render(&request.input)?;

    let request_id = get_request_id(&req).unwrap_or_else(|| "-".to_string());
    log::info!("[{}] Running assistant template '{}'", request_id, template);

    let answer = state.ai_proxy.ask(&prompt).await?;
    Ok(HttpResponse::Ok().json(AssistantResponse {
        template: template.to_string(),
        answer,
    }))
}
