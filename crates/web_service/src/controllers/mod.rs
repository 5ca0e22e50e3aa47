pub mod system_controller;
pub mod thumbnail_controller;
pub mod title_controller;

use actix_web::HttpResponse;

/// Answer an `OPTIONS` preflight; CORS headers come from the scope middleware.
pub async fn preflight() -> HttpResponse {
    HttpResponse::Ok().finish()
}
