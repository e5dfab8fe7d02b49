//! OpenAPI document served through Swagger UI at /docs.

use utoipa::OpenApi;

use super::{ErrorBody, MessageBody};
use crate::handlers::products::{CreateProductRequest, UpdateProductRequest};
use crate::store::Product;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Product API",
        description = "CRUD API for the product catalog, backed by MongoDB"
    ),
    paths(
        crate::handlers::products::create::product_create,
        crate::handlers::products::list::product_list,
        crate::handlers::products::get::product_get,
        crate::handlers::products::update::product_update,
        crate::handlers::products::delete::product_delete,
    ),
    components(schemas(
        Product,
        CreateProductRequest,
        UpdateProductRequest,
        ErrorBody,
        MessageBody,
    )),
    tags((name = "products", description = "Product catalog operations"))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_covers_every_product_operation() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        assert!(paths.iter().any(|p| p.as_str() == "/products/newproduct"));
        assert!(paths.iter().any(|p| p.as_str() == "/products/products"));
        assert!(paths.iter().any(|p| p.as_str() == "/products/{identifier}"));
        assert!(paths.iter().any(|p| p.as_str() == "/products/{id}"));
    }
}
