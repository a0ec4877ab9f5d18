pub mod routes;
pub mod store;
pub mod cors;
pub mod error;
pub mod utils;
pub mod catchers;
pub mod config;
pub use shared::{models::*, error::*, validation::*};

use rocket::{Build, Rocket, routes, catchers, fairing::AdHoc, figment::Figment};
use crate::{
    routes::{all_options, cast_vote, create_poll, get_poll, index, AppState},
    cors::CORS,
    catchers::{bad_request, internal_error, not_found},
    config::PollsConfig,
};

/// Assembles the server from Rocket's default configuration sources.
pub fn build_rocket(state: AppState) -> Rocket<Build> {
    build_rocket_with(rocket::Config::figment(), state)
}

pub fn build_rocket_with(figment: Figment, state: AppState) -> Rocket<Build> {
    rocket::custom(figment)
        .attach(AdHoc::config::<PollsConfig>())
        .attach(CORS)
        .manage(state)
        .mount(
            "/",
            routes![
                index,
                create_poll,
                get_poll,
                cast_vote,
                all_options
            ],
        )
        .register(
            "/",
            catchers![
                bad_request,
                not_found,
                internal_error
            ],
        )
}
