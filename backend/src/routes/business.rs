//! Business routes: registration (multipart, optional image) and listing

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::repositories::NewBusiness;
use crate::services::{BusinessService, UploadedImage};
use crate::state::AppState;
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use marketplace_shared::{BusinessListResponse, RegisterBusinessResponse};

pub fn business_routes() -> Router<AppState> {
    Router::new()
        .route("/register-business", post(register_business))
        .route("/businesses", get(list_businesses))
}

/// Register the caller's business
///
/// POST /register-business (multipart/form-data)
///
/// Text fields: name, description, category, contact, address.
/// Optional file field: image.
async fn register_business(
    State(state): State<AppState>,
    auth_user: AuthUser,
    multipart: Multipart,
) -> ApiResult<(StatusCode, Json<RegisterBusinessResponse>)> {
    let (input, image) = parse_business_form(multipart).await?;

    let business = BusinessService::register(
        &state.db,
        state.images(),
        auth_user.user_id(),
        input,
        image,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterBusinessResponse { business }),
    ))
}

/// List all businesses
///
/// GET /businesses
async fn list_businesses(State(state): State<AppState>) -> ApiResult<Json<BusinessListResponse>> {
    let businesses = BusinessService::list_all(&state.db).await?;
    Ok(Json(BusinessListResponse { businesses }))
}

/// Pull the business fields and optional image out of a multipart form
async fn parse_business_form(
    mut multipart: Multipart,
) -> ApiResult<(NewBusiness, Option<UploadedImage>)> {
    let mut input = NewBusiness {
        name: String::new(),
        description: String::new(),
        category: String::new(),
        contact: String::new(),
        address: String::new(),
        image_path: String::new(),
    };
    let mut image = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Malformed form data: {}", e)))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        match name.as_str() {
            "image" => {
                let filename = field.file_name().unwrap_or("upload").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Malformed upload: {}", e)))?;
                // An empty file input submits a zero-byte part; treat it
                // as no image.
                if !bytes.is_empty() {
                    image = Some(UploadedImage {
                        filename,
                        bytes: bytes.to_vec(),
                    });
                }
            }
            _ => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Malformed form data: {}", e)))?;
                match name.as_str() {
                    "name" => input.name = value,
                    "description" => input.description = value,
                    "category" => input.category = value,
                    "contact" => input.contact = value,
                    "address" => input.address = value,
                    // Unknown fields are ignored, as form posts often
                    // carry extras like submit buttons.
                    _ => {}
                }
            }
        }
    }

    Ok((input, image))
}
