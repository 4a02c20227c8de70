#[cfg(unix)]
use std::collections::HashSet;

use rocket::config::Shutdown;
use rocket::{catchers, routes, Build, Rocket};

pub mod catchers;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod processor;
pub mod render;
pub mod routes;
pub mod store;
pub mod trace;

pub use config::Config;
pub use error::{ApiError, BackendError};
pub use store::CatStore;

/// Opens (or seeds) the data file and builds the server around it.
pub fn bootstrap(config: &Config) -> Result<Rocket<Build>, BackendError> {
    let store = CatStore::open(&config.data_path, config.sort_by_votes)?;
    Ok(build_rocket(config, store))
}

pub fn build_rocket(config: &Config, store: CatStore) -> Rocket<Build> {
    // Signals are handled by `lifecycle::serve`, not by Rocket itself.
    let shutdown = Shutdown {
        ctrlc: false,
        #[cfg(unix)]
        signals: HashSet::new(),
        grace: config.shutdown_grace,
        mercy: config.shutdown_mercy,
        ..Shutdown::default()
    };

    let figment = rocket::Config::figment()
        .merge(("address", config.address))
        .merge(("port", config.port))
        .merge(("shutdown", shutdown));

    rocket::custom(figment)
        .attach(trace::RequestTrace)
        .attach(catchers::UnroutableMethods)
        .manage(store)
        .mount(
            "/",
            routes![
                routes::index,
                routes::vote,
                routes::stylesheet,
                routes::reject_put,
                routes::reject_patch,
                routes::reject_delete,
                routes::reject_options
            ],
        )
        .register(
            "/",
            catchers![
                catchers::bad_request,
                catchers::not_found,
                catchers::method_not_allowed,
                catchers::internal_error
            ],
        )
}
