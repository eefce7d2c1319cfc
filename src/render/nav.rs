use maud::{html, Markup, Render};
use serde::Deserialize;

use crate::{
    render::{style::LinkStyle, svg},
    util,
};

/// Target of a disabled control. Activating it does not navigate.
pub const PLACEHOLDER_HREF: &str = "#";

/// Listing path for `page`, or the search results path when a keyword is given.
pub fn page_href(page: u32, keyword: Option<&str>) -> String {
    match keyword.filter(|keyword| !keyword.is_empty()) {
        Some(keyword) => format!("/search/{}/page/{}", util::encode_segment(keyword), page),
        None => format!("/page/{}", page),
    }
}

/// Option object accepted by the pagenav fragment endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageNavOptions {
    pub total_pages: u32,
    pub current_page: u32,
    #[serde(default)]
    pub search_keyword: Option<String>,
}

impl PageNavOptions {
    pub fn nav(&self) -> PageNav<'_> {
        PageNav::new(
            self.total_pages,
            self.current_page,
            self.search_keyword.as_deref(),
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub href: String,
    pub style: LinkStyle,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageLink {
    pub number: u32,
    pub link: NavLink,
}

/// Previous/next and numbered page links for a paginated list.
///
/// `current_page` is taken as given. Callers keep it within
/// `1..=total_pages`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageNav<'a> {
    total_pages: u32,
    current_page: u32,
    keyword: Option<&'a str>,
}

impl<'a> PageNav<'a> {
    pub fn new(total_pages: u32, current_page: u32, keyword: Option<&'a str>) -> Self {
        Self {
            total_pages,
            current_page,
            keyword: keyword.filter(|keyword| !keyword.is_empty()),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.total_pages > 1
    }

    fn link(&self, page: u32, is_current: bool, is_disabled: bool) -> NavLink {
        let style = LinkStyle::select(is_current, is_disabled);
        let href = if style.is_navigable() {
            page_href(page, self.keyword)
        } else {
            PLACEHOLDER_HREF.to_owned()
        };
        NavLink { href, style }
    }

    pub fn previous(&self) -> NavLink {
        let is_disabled = self.current_page <= 1;
        self.link(self.current_page.saturating_sub(1), false, is_disabled)
    }

    pub fn next(&self) -> NavLink {
        let is_disabled = self.current_page >= self.total_pages;
        self.link(self.current_page.saturating_add(1), false, is_disabled)
    }

    pub fn pages(&self) -> impl Iterator<Item = PageLink> + 'a {
        let nav = *self;
        (1..=nav.total_pages).map(move |number| PageLink {
            number,
            link: nav.link(number, number == nav.current_page, false),
        })
    }
}

fn render_link(link: &NavLink, content: Markup) -> Markup {
    html! {
        @if link.style.is_navigable() {
            @let current = (link.style == LinkStyle::Current).then_some("page");
            a class=(link.style.class()) href=(link.href) aria-current=[current] { (content) }
        } @else {
            a class=(link.style.class()) href=(link.href) aria-disabled="true" tabindex="-1" { (content) }
        }
    }
}

impl Render for PageNav<'_> {
    fn render(&self) -> Markup {
        if !self.is_visible() {
            return html! {};
        }

        let previous = self.previous();
        let next = self.next();

        html! {
            nav.pagenav aria-label="Pagination" {
                p.pagenav__summary {
                    "Page " strong { (self.current_page) } " of " strong { (self.total_pages) }
                }
                div.pagenav__compact {
                    (render_link(&previous, html! { "Previous" }))
                    (render_link(&next, html! { "Next" }))
                }
                div.pagenav__wide {
                    div.pagenav__pager {
                        (render_link(&previous, html! {
                            span.pagenav__sr { "Previous" }
                            (svg::chevron_left())
                        }))
                        @for page in self.pages() {
                            (render_link(&page.link, html! { (page.number) }))
                        }
                        (render_link(&next, html! {
                            span.pagenav__sr { "Next" }
                            (svg::chevron_right())
                        }))
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hrefs(nav: &PageNav) -> Vec<String> {
        nav.pages().map(|page| page.link.href).collect()
    }

    #[test]
    fn single_page_renders_nothing() {
        let nav = PageNav::new(1, 1, None);
        assert!(!nav.is_visible());
        assert!(nav.render().into_string().is_empty());
    }

    #[test]
    fn zero_pages_renders_nothing() {
        let nav = PageNav::new(0, 1, Some("phone"));
        assert!(nav.render().into_string().is_empty());
    }

    #[test]
    fn href_without_keyword() {
        assert_eq!(page_href(3, None), "/page/3");
        assert_eq!(page_href(3, Some("")), "/page/3");
    }

    #[test]
    fn href_with_keyword() {
        assert_eq!(page_href(2, Some("phone")), "/search/phone/page/2");
        assert_eq!(page_href(1, Some("red shoes")), "/search/red%20shoes/page/1");
    }

    #[test]
    fn middle_page_without_keyword() {
        let nav = PageNav::new(5, 3, Some(""));

        let numbers: Vec<u32> = nav.pages().map(|page| page.number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
        assert_eq!(
            hrefs(&nav),
            vec!["/page/1", "/page/2", "/page/3", "/page/4", "/page/5"]
        );

        let current: Vec<u32> = nav
            .pages()
            .filter(|page| page.link.style == LinkStyle::Current)
            .map(|page| page.number)
            .collect();
        assert_eq!(current, vec![3]);

        assert_eq!(nav.previous().href, "/page/2");
        assert_eq!(nav.previous().style, LinkStyle::Default);
        assert_eq!(nav.next().href, "/page/4");
        assert_eq!(nav.next().style, LinkStyle::Default);
    }

    #[test]
    fn first_page_with_keyword() {
        let nav = PageNav::new(4, 1, Some("shoes"));

        let previous = nav.previous();
        assert_eq!(previous.style, LinkStyle::Disabled);
        assert_eq!(previous.href, PLACEHOLDER_HREF);

        assert_eq!(nav.next().href, "/search/shoes/page/2");
        assert_eq!(
            hrefs(&nav),
            vec![
                "/search/shoes/page/1",
                "/search/shoes/page/2",
                "/search/shoes/page/3",
                "/search/shoes/page/4",
            ]
        );
    }

    #[test]
    fn last_page_disables_next() {
        let nav = PageNav::new(4, 4, None);
        assert_eq!(nav.next().style, LinkStyle::Disabled);
        assert_eq!(nav.next().href, PLACEHOLDER_HREF);
        assert_eq!(nav.previous().href, "/page/3");
    }

    #[test]
    fn every_position_has_one_current_link() {
        for total in 2..=12 {
            for current in 1..=total {
                let nav = PageNav::new(total, current, Some("phone"));
                let pages: Vec<PageLink> = nav.pages().collect();
                assert_eq!(pages.len(), total as usize);

                let highlighted: Vec<&PageLink> = pages
                    .iter()
                    .filter(|page| page.link.style == LinkStyle::Current)
                    .collect();
                assert_eq!(highlighted.len(), 1);
                assert_eq!(highlighted[0].number, current);

                for page in &pages {
                    assert_eq!(
                        page.link.href,
                        format!("/search/phone/page/{}", page.number)
                    );
                }

                assert_eq!(nav.previous().style.is_navigable(), current > 1);
                assert_eq!(nav.next().style.is_navigable(), current < total);
            }
        }
    }

    #[test]
    fn render_marks_current_once() {
        let html = PageNav::new(5, 3, None).render().into_string();

        assert_eq!(html.matches("aria-current=\"page\"").count(), 1);
        assert!(html.contains("aria-current=\"page\">3</a>"));
        for page in 1..=5 {
            assert!(html.contains(&format!("href=\"/page/{}\"", page)));
        }
        assert!(!html.contains("aria-disabled"));
        assert!(html.contains("Page <strong>3</strong> of <strong>5</strong>"));
    }

    #[test]
    fn render_first_page_disables_both_previous_controls() {
        let html = PageNav::new(4, 1, Some("shoes")).render().into_string();

        /* compact and wide previous */
        assert_eq!(html.matches("aria-disabled=\"true\"").count(), 2);
        assert_eq!(html.matches("href=\"#\"").count(), 2);
        /* compact next, numbered 2 and wide next */
        assert_eq!(html.matches("href=\"/search/shoes/page/2\"").count(), 3);
        assert!(html.contains("pagenav__link--disabled"));
    }

    #[test]
    fn render_last_page_disables_both_next_controls() {
        let html = PageNav::new(3, 3, None).render().into_string();

        assert_eq!(html.matches("aria-disabled=\"true\"").count(), 2);
        assert_eq!(html.matches("href=\"/page/2\"").count(), 3);
    }

    #[test]
    fn summary_is_outside_both_layouts() {
        let html = PageNav::new(5, 2, None).render().into_string();

        let summary = html.find("pagenav__summary").unwrap();
        let compact = html.find("pagenav__compact").unwrap();
        let wide = html.find("pagenav__wide").unwrap();
        assert!(summary < compact);
        assert!(summary < wide);
        assert_eq!(html.matches("pagenav__summary").count(), 1);
    }

    #[test]
    fn options_deserialize_from_camel_case() {
        let options: PageNavOptions =
            serde_json::from_str(r#"{"totalPages":4,"currentPage":2,"searchKeyword":"phone"}"#)
                .unwrap();
        assert_eq!(options.total_pages, 4);
        assert_eq!(options.current_page, 2);
        assert_eq!(options.nav(), PageNav::new(4, 2, Some("phone")));

        let options: PageNavOptions =
            serde_json::from_str(r#"{"totalPages":4,"currentPage":2}"#).unwrap();
        assert_eq!(options.search_keyword, None);
        assert_eq!(options.nav().next().href, "/page/3");
    }
}
