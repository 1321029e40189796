use crate::db::HotelStore;
use crate::error::ApiError;
use crate::query::{self, HotelQuery};
use actix_web::{web, HttpRequest, HttpResponse};

/// Shared per-worker state for the hotel handlers.
#[derive(Debug, Clone)]
pub struct HotelState {
    pub store: HotelStore,
    pub image_url: String,
}

pub async fn get_hotels(
    state: web::Data<HotelState>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let params = HotelQuery::from_query(req.query_string())?;
    let hotels = state.store.load().await?;
    let page = query::process(hotels, &params, &state.image_url);

    Ok(HttpResponse::Ok().json(page))
}
