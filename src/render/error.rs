use maud::html;

use crate::error::AppError;

use super::document::document;

impl maud::Render for AppError {
    fn render(&self) -> maud::Markup {
        render_error(self.status_code(), self.message())
    }
}

pub fn render_error(code: u16, message: &str) -> maud::Markup {
    let title = format!("{}", code);

    document(
        &title,
        html! {
            h1 { (&title) }
            p { (message) }
            p { a href="/" { "Go home" } }
        },
    )
}
