use actix_web::{http::Method, web, HttpRequest, HttpResponse};

use crate::{
    controllers::preflight,
    dto::{GenerateTitleRequest, GenerateTitleResponse},
    error::Result,
    middleware::extract_trace_id,
    server::AppState,
};

pub async fn generate_title(
    app_state: web::Data<AppState>,
    req: web::Json<GenerateTitleRequest>,
    http_req: HttpRequest,
) -> Result<HttpResponse> {
    let GenerateTitleRequest { topic } = req.into_inner();
    tracing::debug!(
        trace_id = %extract_trace_id(&http_req).unwrap_or_default(),
        "generate-title invoked"
    );

    let titles = app_state.generation.generate_titles(&topic).await?;
    Ok(HttpResponse::Ok().json(GenerateTitleResponse { titles }))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/generate-title")
            .route(web::post().to(generate_title))
            .route(web::method(Method::OPTIONS).to(preflight)),
    );
}
