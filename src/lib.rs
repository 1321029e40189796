//! Read-only hotel listing service.
//!
//! `GET /api/hotel/getHotels` reads `Hotels.json` on every request, then
//! filters, sorts and pages the records according to the query string.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod query;

use std::path::Path;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::web;

use crate::handlers::hotels::HotelState;

/// Registers the hotel routes and their state on an `App`.
pub fn configure(state: HotelState) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(web::Data::new(state)).service(
            web::scope("/api/hotel")
                .route("/getHotels", web::get().to(handlers::hotels::get_hotels)),
        );
    }
}

/// Allows any origin, method and header, answering with a wildcard origin.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600)
}

/// Serves `dir` under `/Resources`. `None` registers nothing.
pub fn resources(dir: Option<&Path>) -> impl FnOnce(&mut web::ServiceConfig) + '_ {
    move |cfg: &mut web::ServiceConfig| {
        if let Some(dir) = dir {
            cfg.service(Files::new("/Resources", dir));
        }
    }
}
