use actix_web::{http::Method, web, HttpRequest, HttpResponse};

use crate::{
    controllers::preflight,
    dto::{GenerateThumbnailRequest, GenerateThumbnailResponse},
    error::Result,
    middleware::extract_trace_id,
    server::AppState,
};

pub async fn generate_thumbnail(
    app_state: web::Data<AppState>,
    req: web::Json<GenerateThumbnailRequest>,
    http_req: HttpRequest,
) -> Result<HttpResponse> {
    let GenerateThumbnailRequest { topic, title } = req.into_inner();
    tracing::debug!(
        trace_id = %extract_trace_id(&http_req).unwrap_or_default(),
        "generate-thumbnail invoked"
    );

    let image_url = app_state
        .generation
        .generate_thumbnail(&topic, &title)
        .await?;
    Ok(HttpResponse::Ok().json(GenerateThumbnailResponse { image_url }))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/generate-thumbnail")
            .route(web::post().to(generate_thumbnail))
            .route(web::method(Method::OPTIONS).to(preflight)),
    );
}
