use rocket::fairing::{Fairing, Info, Kind};
use rocket::{Data, Request, Response};
use tracing::debug;

/// Logs every request on arrival and once its response is ready.
pub struct RequestTrace;

#[rocket::async_trait]
impl Fairing for RequestTrace {
    fn info(&self) -> Info {
        Info {
            name: "Request trace",
            kind: Kind::Request | Kind::Response,
        }
    }

    async fn on_request(&self, req: &mut Request<'_>, _data: &mut Data<'_>) {
        debug!(method = %req.method(), path = %req.uri().path(), "handling request");
    }

    async fn on_response<'r>(&self, req: &'r Request<'_>, res: &mut Response<'r>) {
        debug!(
            method = %req.method(),
            path = %req.uri().path(),
            status = %res.status(),
            "request processed"
        );
    }
}
