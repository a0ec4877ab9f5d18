use std::io;
use rocket::{State, get, post, http::Status, response::content::RawHtml};
use rocket::serde::json::{self, Json, Value};
use tracing::{debug, info, instrument, warn, Span};
use include_dir::{include_dir, Dir};
use shared::{models::*, validation::{validate_poll_request, ValidationError}};
use crate::{
    error::ApiError,
    store::{lock_poll, PollStore},
    utils::generate_poll_id,
};

static STATIC_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/static");

const FALLBACK_INDEX: &str = "<h1>Polling API</h1>";

#[derive(Debug, Default)]
pub struct AppState {
    pub store: PollStore,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            store: PollStore::new(),
        }
    }
}

#[get("/")]
pub async fn index() -> RawHtml<&'static str> {
    RawHtml(
        STATIC_DIR
            .get_file("index.html")
            .and_then(|file| file.contents_utf8())
            .unwrap_or(FALLBACK_INDEX),
    )
}

#[rocket::options("/<_..>")]
pub async fn all_options() -> Status {
    Status::Ok
}

#[instrument(skip(state, body), fields(poll_id))]
#[post("/poll", data = "<body>")]
pub async fn create_poll(
    state: &State<AppState>,
    body: Result<Json<Value>, json::Error<'_>>,
) -> Result<(Status, Json<CreatePollResponse>), ApiError> {
    let body = match body {
        Ok(Json(value)) => Some(value),
        // Rocket reports a body cut off at the `json` limit as an early EOF.
        Err(json::Error::Io(e)) if e.kind() == io::ErrorKind::UnexpectedEof => {
            warn!("Rejected poll: body exceeds the json limit");
            return Err(ValidationError::BodyTooLarge.into());
        }
        Err(e) => {
            debug!("Could not decode poll body: {}", e);
            None
        }
    };

    let request = validate_poll_request(body.as_ref()).map_err(|e| {
        warn!("Rejected poll: {}", e);
        e
    })?;

    let poll = Poll::new(generate_poll_id(), request);
    Span::current().record("poll_id", poll.id());

    let response = CreatePollResponse::new(&poll);
    state.store.put(poll)?;
    info!("🗳️ Created poll with {} options", response.poll_data.options.len());

    Ok((Status::Created, Json(response)))
}

#[instrument(skip(state))]
#[get("/poll/<poll_id>")]
pub async fn get_poll(
    state: &State<AppState>,
    poll_id: &str,
) -> Result<Json<PollResultsResponse>, ApiError> {
    let poll = state.store.get(poll_id)?.ok_or(ApiError::NotFound)?;
    let poll = lock_poll(&poll)?;
    debug!("Serving results, {} votes so far", poll.total_votes());
    Ok(Json(PollResultsResponse::new(&poll)))
}

#[instrument(skip(state))]
#[post("/poll/<poll_id>/vote/<option_id>")]
pub async fn cast_vote(
    state: &State<AppState>,
    poll_id: &str,
    option_id: &str,
) -> Result<Json<VoteResponse>, ApiError> {
    let poll = state.store.get(poll_id)?.ok_or(ApiError::NotFound)?;
    let count = lock_poll(&poll)?.record_vote(option_id).map_err(|e| {
        warn!("Rejected vote: {}", e);
        e
    })?;
    info!("✓ Vote recorded, option now at {}", count);
    Ok(Json(VoteResponse::new(poll_id, option_id)))
}
