use std::io::Cursor;

use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{ContentType, Method, Status};
use rocket::{catch, Request, Response};

const METHOD_NOT_ALLOWED: &str = "Method Not Allowed";

#[catch(400)]
pub fn bad_request(_req: &Request) -> &'static str {
    "Bad Request"
}

#[catch(404)]
pub fn not_found(_req: &Request) -> &'static str {
    "Not Found"
}

#[catch(405)]
pub fn method_not_allowed(_req: &Request) -> &'static str {
    METHOD_NOT_ALLOWED
}

#[catch(500)]
pub fn internal_error(_req: &Request) -> &'static str {
    "Internal Server Error"
}

/// Answers 405 for TRACE and CONNECT on `/`.
///
/// Rocket routes cannot be declared for those methods, so without this they
/// would fall through to the 404 catcher.
pub struct UnroutableMethods;

#[rocket::async_trait]
impl Fairing for UnroutableMethods {
    fn info(&self) -> Info {
        Info {
            name: "Unroutable methods",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, req: &'r Request<'_>, res: &mut Response<'r>) {
        if matches!(req.method(), Method::Trace | Method::Connect) && req.uri().path().as_str() == "/" {
            res.set_status(Status::MethodNotAllowed);
            res.set_header(ContentType::Plain);
            res.set_sized_body(METHOD_NOT_ALLOWED.len(), Cursor::new(METHOD_NOT_ALLOWED));
        }
    }
}
