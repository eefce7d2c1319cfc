use rouille::{Request, Response};

use crate::{
    catalog::paginate,
    error::AppError,
    get_param_or_str,
    render::{document::document, listing::render_results, nav::page_href},
};

use super::State;

/// Turns the `?q=` form submission into a result page path.
pub fn search_form(request: &Request) -> Response {
    let q = get_param_or_str!(request, "q", "");
    Response::redirect_303(page_href(1, Some(q.trim())))
}

pub fn search(state: &State, keyword: &str, page: u32) -> Result<Response, AppError> {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return Ok(Response::redirect_303(page_href(page, None)));
    }

    let items = state.catalog.search(Some(keyword));
    let page = paginate(&items, page, state.per_page).ok_or_else(AppError::not_found)?;

    let heading = format!("Results for \"{}\"", keyword);
    let title = format!("{} - page {}", keyword, page.number);
    let document = document(&title, render_results(&heading, Some(keyword), &page));

    Ok(Response::html(document.into_string()))
}
