/// GET / — the date-of-birth form.
use super::{html_response, HttpResponse};
use crate::page::INDEX_HTML;

pub fn handle() -> HttpResponse {
    html_response(INDEX_HTML)
}
