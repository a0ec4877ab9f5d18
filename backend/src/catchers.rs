use rocket::{Request, catch, serde::json::Json};
use serde::Serialize;

/// Body for failures raised by Rocket itself, before a handler could answer.
#[derive(Serialize)]
pub struct ErrorMessage {
    error: String,
    status: u16,
}

fn message(error: &str, status: u16) -> Json<ErrorMessage> {
    Json(ErrorMessage {
        error: error.into(),
        status,
    })
}

#[catch(400)]
pub fn bad_request(_req: &Request) -> Json<ErrorMessage> {
    message("Bad request to the polling API.", 400)
}

#[catch(404)]
pub fn not_found(_req: &Request) -> Json<ErrorMessage> {
    message("Poll or route not found.", 404)
}

#[catch(500)]
pub fn internal_error(_req: &Request) -> Json<ErrorMessage> {
    message("The polling API failed to handle the request.", 500)
}
