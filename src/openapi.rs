use utoipa::OpenApi;

use crate::models::ClassEvent;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::root,
        crate::handlers::healthz_live,
        crate::handlers::healthz_ready,
        crate::handlers::list_classes
    ),
    components(schemas(ClassEvent)),
    tags(
        (name = "classes", description = "Scheduled class listing")
    ),
)]
pub struct ApiDoc;
