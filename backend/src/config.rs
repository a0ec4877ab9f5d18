use rocket::serde::Deserialize;

pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:8080";

/// Application settings read from Rocket's figment (`Rocket.toml` or
/// `ROCKET_ALLOWED_ORIGIN`) next to Rocket's own keys.
#[derive(Debug, Clone, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct PollsConfig {
    /// The one origin, compared exactly, that receives CORS headers.
    #[serde(default = "default_allowed_origin")]
    pub allowed_origin: String,
}

impl Default for PollsConfig {
    fn default() -> Self {
        Self {
            allowed_origin: default_allowed_origin(),
        }
    }
}

fn default_allowed_origin() -> String {
    DEFAULT_ALLOWED_ORIGIN.into()
}
