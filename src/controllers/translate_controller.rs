use actix_web::{post, web, HttpResponse};

use crate::error::TranslatorError;
use crate::server::AppState;
use crate::translate::{LegacyTranslationRequest, TranslationRequest};

#[post("/translate")]
pub async fn translate(
    state: web::Data<AppState>,
    payload: web::Json<TranslationRequest>,
) -> Result<HttpResponse, TranslatorError> {
    let result = state.dispatcher.translate(payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(result))
}

#[post("/translate/legacy")]
pub async fn translate_legacy(
    state: web::Data<AppState>,
    payload: web::Json<LegacyTranslationRequest>,
) -> Result<HttpResponse, TranslatorError> {
    let result = state.dispatcher.translate_legacy(payload.into_inner().into()).await?;
    Ok(HttpResponse::Ok().json(result))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(translate).service(translate_legacy);
}
