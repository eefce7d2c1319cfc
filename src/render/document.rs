use maud::html;

pub fn document(title: &str, content: maud::Markup) -> maud::Markup {
    html! {
        (maud::DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (title) }
                link rel="stylesheet" href="/main.css";
                meta name="viewport" content="width=device-width, initial-scale=1";
            }
            body {
                main { (content) }
                footer { div { a href="/" { "Home" } " - " a href="/search?q=" { "Search" } } }
            }
        }
    }
}
