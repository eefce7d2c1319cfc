use maud::{html, Markup};

pub fn chevron_left() -> Markup {
    html! {
        svg viewBox="0 0 20 20" aria-hidden="true" { path fill-rule="evenodd" d="M12.79 5.23a.75.75 0 01-.02 1.06L8.83 10l3.94 3.71a.75.75 0 11-1.04 1.08l-4.5-4.25a.75.75 0 010-1.08l4.5-4.25a.75.75 0 011.06.02z" fill="currentColor" {} }
    }
}

pub fn chevron_right() -> Markup {
    html! {
        svg viewBox="0 0 20 20" aria-hidden="true" { path fill-rule="evenodd" d="M7.21 14.77a.75.75 0 01.02-1.06L11.17 10 7.23 6.29a.75.75 0 111.04-1.08l4.5 4.25a.75.75 0 010 1.08l-4.5 4.25a.75.75 0 01-1.06-.02z" fill="currentColor" {} }
    }
}
