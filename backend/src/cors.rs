use rocket::fairing::{Fairing, Info, Kind};
use rocket::{Request, Response};
use rocket::http::Header;
use crate::config::{PollsConfig, DEFAULT_ALLOWED_ORIGIN};

pub struct CORS;

#[rocket::async_trait]
impl Fairing for CORS {
    fn info(&self) -> Info {
        Info {
            name: "CORS",
            kind: Kind::Response
        }
    }

    async fn on_response<'r>(&self, req: &'r Request<'_>, res: &mut Response<'r>) {
        let allowed = req.rocket()
            .state::<PollsConfig>()
            .map(|config| config.allowed_origin.as_str())
            .unwrap_or(DEFAULT_ALLOWED_ORIGIN);

        let Some(origin) = req.headers().get_one("Origin") else { return };

        if origin == allowed {
            res.set_header(Header::new("Access-Control-Allow-Origin", origin.to_string()));
            res.set_header(Header::new("Access-Control-Allow-Methods", "POST, GET, OPTIONS"));
            res.set_header(Header::new("Access-Control-Allow-Headers", "Content-Type"));
            res.set_header(Header::new("Access-Control-Max-Age", "86400"));
        }
    }
}
