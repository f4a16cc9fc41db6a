use utoipa::OpenApi;

use crate::routes::v1;

#[derive(OpenApi)]
#[openapi(info(
    title = "wayfare-server",
    description = "Wayfare travel & culture API",
    version = "0.1.0",
    contact(name = "wayfare", url = "https://github.com/wayfare-app/wayfare")
))]
pub struct ApiDoc;

pub fn get_docs() -> utoipa::openapi::OpenApi {
    let mut root = ApiDoc::openapi();
    root.merge(v1::api_docs());
    root.merge(crate::routes::health::HealthApi::openapi());
    root
}
