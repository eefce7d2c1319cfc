use maud::Render;
use rouille::{Request, Response};

use crate::{error::AppError, render::nav::PageNavOptions};

/// Largest `totalPages` the fragment endpoint renders. Every page is one
/// link in the response.
pub const MAX_FRAGMENT_PAGES: u32 = 1000;

/// Renders a bare pagenav block from a JSON option object such as
/// `{"totalPages": 5, "currentPage": 3, "searchKeyword": "phone"}`.
pub fn pagenav(request: &Request) -> Result<Response, AppError> {
    let options: PageNavOptions = rouille::input::json_input(request)
        .map_err(|err| AppError::External(400, err.to_string().into()))?;

    if options.total_pages > MAX_FRAGMENT_PAGES {
        return Err(AppError::External(
            400,
            format!("totalPages may not exceed {}", MAX_FRAGMENT_PAGES).into(),
        ));
    }

    Ok(Response::html(options.nav().render().into_string()))
}
