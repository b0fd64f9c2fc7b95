use actix_web::{post, web, HttpResponse};
use serde::Serialize;

use crate::{
    configuration::Settings,
    domain::EvaluationRequest,
    errors::AppError,
    services::{process_submission, DroidFetcher, OpenaiClient},
};

#[derive(Serialize)]
struct SubmitFormResponse {
    ok: bool,
    message: String,
    file: String,
    generated_prompt: String,
}

#[post("/submit-form")]
async fn submit_form(
    settings: web::Data<Settings>,
    fetcher: web::Data<DroidFetcher>,
    openai_client: web::Data<OpenaiClient>,
    body: web::Json<EvaluationRequest>,
) -> Result<HttpResponse, AppError> {
    let outcome = process_submission(
        fetcher.get_ref(),
        openai_client.get_ref(),
        &settings.results,
        body.into_inner(),
    )
    .await?;

    Ok(HttpResponse::Ok().json(SubmitFormResponse {
        ok: true,
        message: "The prompt was generated and saved successfully!".to_string(),
        file: outcome.file,
        generated_prompt: outcome.generated_prompt,
    }))
}
