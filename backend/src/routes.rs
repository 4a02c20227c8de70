use include_dir::{include_dir, Dir};
use rocket::form::Form;
use rocket::http::{ContentType, Status};
use rocket::response::{content::RawHtml, Redirect};
use rocket::{delete, get, options, patch, post, put, uri, FromForm, State};
use tracing::{error, instrument, warn};

use crate::{error::ApiError, processor::VoteProcessor, render::render_index, store::CatStore};

static STATIC_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/static");

#[derive(Debug, FromForm)]
pub struct VoteForm {
    pub cat: Option<String>,
}

#[get("/")]
pub fn index(store: &State<CatStore>) -> Result<RawHtml<String>, ApiError> {
    let cats = store.snapshot()?;
    render_index(&cats).map(RawHtml).map_err(|e| {
        error!("Failed to render cat listing: {}", e);
        ApiError::Render
    })
}

/// Redirects after a vote so a browser refresh repeats the GET, not the vote.
#[instrument(skip_all)]
#[post("/", data = "<form>")]
pub fn vote(store: &State<CatStore>, form: Option<Form<VoteForm>>) -> Result<Redirect, ApiError> {
    let Some(raw_index) = form.and_then(|f| f.into_inner().cat) else {
        warn!("Vote request without a cat field");
        return Err(ApiError::MissingIndex);
    };

    VoteProcessor::cast_vote(store, &raw_index)?;
    Ok(Redirect::to(uri!(index())))
}

#[get("/style.css")]
pub fn stylesheet() -> Option<(ContentType, &'static [u8])> {
    STATIC_DIR
        .get_file("style.css")
        .map(|file| (ContentType::CSS, file.contents()))
}

#[put("/")]
pub fn reject_put() -> Status {
    Status::MethodNotAllowed
}

#[patch("/")]
pub fn reject_patch() -> Status {
    Status::MethodNotAllowed
}

#[delete("/")]
pub fn reject_delete() -> Status {
    Status::MethodNotAllowed
}

#[options("/")]
pub fn reject_options() -> Status {
    Status::MethodNotAllowed
}
