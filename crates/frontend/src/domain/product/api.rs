use contracts::domain::product::{
    ApiErrorBody, Product, ProductId, ProductListResponse, ProductResponse, SaveProductRequest,
    ScrapeResponse,
};
use gloo_net::http::{Request, Response};

use crate::shared::api_utils::api_base;

/// Pull the error body the server attaches to non-2xx responses, falling
/// back to the HTTP status when there is none.
async fn error_text(response: Response, what: &str) -> String {
    let status = response.status();
    match response.json::<ApiErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => format!("Failed to {what}: {status}"),
    }
}

/// Fetch the full product catalog
pub async fn fetch_products() -> Result<Vec<Product>, String> {
    let response = Request::get(&format!("{}/api/products", api_base()))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_text(response, "fetch products").await);
    }

    let data: ProductListResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;
    Ok(data.products)
}

/// Fetch a single product record
pub async fn fetch_product(id: ProductId) -> Result<Product, String> {
    let response = Request::get(&format!("{}/api/products/{}", api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_text(response, "fetch product").await);
    }

    let data: ProductResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;
    Ok(data.product)
}

/// Create (no id) or update (id present) a product record.
///
/// Returns the saved record so callers get the server-assigned id on create.
pub async fn save_product(
    id: Option<ProductId>,
    body: &SaveProductRequest,
) -> Result<Product, String> {
    let builder = match id {
        Some(id) => Request::put(&format!("{}/api/products/{}", api_base(), id)),
        None => Request::post(&format!("{}/api/products", api_base())),
    };

    let response = builder
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_text(response, "save product").await);
    }

    let data: ProductResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;
    Ok(data.product)
}

/// Delete a product record
pub async fn delete_product(id: ProductId) -> Result<(), String> {
    let response = Request::delete(&format!("{}/api/products/{}", api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_text(response, "delete product").await);
    }

    Ok(())
}

/// Upload the product image as multipart form data (field `image`).
pub async fn upload_image(id: ProductId, file: &web_sys::File) -> Result<(), String> {
    let form_data = web_sys::FormData::new().map_err(|e| format!("{e:?}"))?;
    form_data
        .append_with_blob("image", file)
        .map_err(|e| format!("{e:?}"))?;

    let response = Request::post(&format!("{}/api/products/{}/upload", api_base(), id))
        .body(form_data)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_text(response, "upload image").await);
    }

    Ok(())
}

/// Trigger the server-side metadata scrape for a product.
pub async fn scrape_product(id: ProductId) -> Result<ScrapeResponse, String> {
    let response = Request::post(&format!("{}/api/products/{}/scrape", api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_text(response, "scrape product").await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// URL a stored product image is served from.
pub fn image_url(product: &Product) -> Option<String> {
    product
        .image_file_name()
        .map(|name| format!("/uploads/{}", urlencoding::encode(name)))
}
