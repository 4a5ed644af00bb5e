use actix_web::{get, web, HttpResponse};
use serde::Serialize;

use crate::modes::{self, ModeInfo};

#[derive(Serialize)]
struct ModesResponse {
    success: bool,
    modes: Vec<ModeInfo>,
}

#[get("/modes")]
pub async fn list_modes() -> HttpResponse {
    let response = ModesResponse {
        success: true,
        modes: modes::list_all().iter().map(|mode| mode.info()).collect(),
    };
    HttpResponse::Ok().json(response)
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(list_modes);
}
