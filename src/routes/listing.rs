use crate::{
    catalog::paginate,
    error::AppError,
    render::{document::document, listing::render_results},
};

use super::State;

pub fn listing(state: &State, page: u32) -> Result<rouille::Response, AppError> {
    let items = state.catalog.search(None);
    let page = paginate(&items, page, state.per_page).ok_or_else(AppError::not_found)?;

    let title = format!("All items - page {}", page.number);
    let document = document(&title, render_results("All items", None, &page));

    Ok(rouille::Response::html(document.into_string()))
}
