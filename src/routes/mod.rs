pub mod css;
pub mod fragment;
pub mod listing;
pub mod search;

use maud::Render;
use rouille::{router, Request, Response};

use crate::{catalog::Catalog, error::AppError};

pub struct State {
    pub catalog: Catalog,
    pub per_page: usize,
}

pub fn error_response(err: &AppError) -> Response {
    Response::html(err.render().into_string()).with_status_code(err.status_code())
}

fn respond(result: Result<Response, AppError>) -> Response {
    result.unwrap_or_else(|err| {
        if let AppError::Internal(message) = &err {
            log::error!("{}", message);
        }
        error_response(&err)
    })
}

pub fn handle(state: &State, request: &Request) -> Response {
    let response = router!(request,
        (GET) (/) => {
            respond(listing::listing(state, 1))
        },
        (GET) (/page/{page: u32}) => {
            respond(listing::listing(state, page))
        },
        (GET) (/search) => {
            search::search_form(request)
        },
        (GET) (/search/{keyword: String}/page/{page: u32}) => {
            respond(search::search(state, &keyword, page))
        },
        (POST) (/fragment/pagenav) => {
            respond(fragment::pagenav(request))
        },
        _ => {
            /* router! has no syntax for dotted segments */
            if request.method() == "GET" && request.url() == "/main.css" {
                css::style_sheet()
            } else {
                error_response(&AppError::not_found())
            }
        }
    );

    log::info!(
        "{} {} -> {}",
        request.method(),
        request.raw_url(),
        response.status_code
    );
    response
}
