use actix_web::{middleware, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;

use hotel_api::config::Settings;
use hotel_api::db::HotelStore;
use hotel_api::handlers::hotels::HotelState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger and environment
    dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let store = match HotelStore::new(&settings.data_path) {
        Ok(store) => store,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };
    log::info!("Serving hotels from {}", store.path().display());

    let state = HotelState {
        store,
        image_url: settings.image_url.clone(),
    };

    let resources_dir = if settings.resources_dir.is_dir() {
        Some(settings.resources_dir.clone())
    } else {
        log::warn!(
            "Resources directory {} not found, static files disabled",
            settings.resources_dir.display()
        );
        None
    };

    log::info!("Starting server at http://{}:{}", settings.host, settings.port);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .wrap(hotel_api::cors())
            .configure(hotel_api::configure(state.clone()))
            .configure(hotel_api::resources(resources_dir.as_deref()))
    })
    .bind((settings.host.as_str(), settings.port))?
    .run()
    .await
}
