//! Filtering, sorting and paging of hotel listings.

use std::cmp::Ordering;

use actix_web::error::QueryPayloadError;
use actix_web::web;
use serde::Deserialize;

use crate::models::hotel::Hotel;

pub const DEFAULT_PAGE_NUMBER: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 9;
pub const DEFAULT_SORT_OPTION: &str = "name";

/// Query string of `GET /api/hotel/getHotels`.
///
/// Keys are matched case-insensitively, see [`HotelQuery::from_query`].
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase", default)]
pub struct HotelQuery {
    /// 1-based page index.
    pub page_number: i64,
    pub page_size: i64,
    /// Case-insensitive substring matched against name or location.
    pub filter_text: Option<String>,
    pub min_rating: f64,
    /// `"rating"` sorts by rating descending, anything else by name ascending.
    pub sort_option: String,
}

impl Default for HotelQuery {
    fn default() -> Self {
        Self {
            page_number: DEFAULT_PAGE_NUMBER,
            page_size: DEFAULT_PAGE_SIZE,
            filter_text: None,
            min_rating: 0.0,
            sort_option: DEFAULT_SORT_OPTION.to_string(),
        }
    }
}

impl HotelQuery {
    /// Parses a raw query string, so `PageNumber`, `pageNumber` and
    /// `pagenumber` all bind to the same field.
    pub fn from_query(raw: &str) -> Result<Self, QueryPayloadError> {
        let normalized = raw
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| match pair.split_once('=') {
                Some((key, value)) => format!("{}={}", key.to_lowercase(), value),
                None => pair.to_lowercase(),
            })
            .collect::<Vec<_>>()
            .join("&");

        web::Query::<HotelQuery>::from_query(&normalized).map(web::Query::into_inner)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    RatingDesc,
    NameAsc,
}

impl SortOrder {
    pub fn parse(option: &str) -> Self {
        if option.eq_ignore_ascii_case("rating") {
            SortOrder::RatingDesc
        } else {
            SortOrder::NameAsc
        }
    }
}

/// Runs the listing pipeline: text filter, rating threshold, sort, page,
/// then prefixes the image paths of the returned page with `image_url`.
pub fn process(hotels: Vec<Hotel>, query: &HotelQuery, image_url: &str) -> Vec<Hotel> {
    let needle = query
        .filter_text
        .as_deref()
        .filter(|text| !text.trim().is_empty())
        .map(str::to_lowercase);

    let mut hotels: Vec<Hotel> = hotels
        .into_iter()
        .filter(|h| match &needle {
            Some(needle) => {
                h.name.to_lowercase().contains(needle.as_str())
                    || h.location.to_lowercase().contains(needle.as_str())
            }
            None => true,
        })
        .filter(|h| h.rating >= query.min_rating)
        .collect();

    match SortOrder::parse(&query.sort_option) {
        SortOrder::RatingDesc => hotels.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortOrder::NameAsc => hotels.sort_by(|a, b| compare_names(&a.name, &b.name)),
    }

    let (skip, take) = page_bounds(query.page_number, query.page_size);

    hotels
        .into_iter()
        .skip(skip)
        .take(take)
        .map(|mut hotel| {
            hotel.images = hotel
                .images
                .iter()
                .map(|img| format!("{}{}", image_url, img))
                .collect();
            hotel
        })
        .collect()
}

// Case-insensitive first so "alpine" sorts before "Beach"; the raw name
// keeps the order total.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

// Negative skip counts clamp to zero; a non-positive page size takes nothing.
fn page_bounds(page_number: i64, page_size: i64) -> (usize, usize) {
    let skip = page_number.saturating_sub(1).saturating_mul(page_size).max(0);
    let take = page_size.max(0);
    (
        usize::try_from(skip).unwrap_or(usize::MAX),
        usize::try_from(take).unwrap_or(usize::MAX),
    )
}
