use maud::{html, Markup, Render};

use crate::{
    catalog::{Item, Page},
    render::nav::PageNav,
};

impl Render for Item {
    fn render(&self) -> Markup {
        html! {
            li {
                span.items__id { "#" (self.id) }
                (self.title)
            }
        }
    }
}

pub fn render_search_form(keyword: &str) -> Markup {
    html! {
        form.search action="/search" method="get" {
            input type="text" name="q" placeholder="Keywords..." value=(keyword);
            button type="submit" { "Search" }
        }
    }
}

pub fn render_results(heading: &str, keyword: Option<&str>, page: &Page) -> Markup {
    html! {
        h1 { (heading) }
        (render_search_form(keyword.unwrap_or_default()))
        p.count {
            @match page.total_items {
                0 => "No items",
                1 => "1 item",
                n => (format!("{} items", n)),
            }
        }
        ul.items {
            @for item in page.items {
                (item)
            }
        }
        (PageNav::new(page.total_pages, page.number, keyword))
    }
}
