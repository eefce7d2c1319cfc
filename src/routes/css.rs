const CSS: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/main.css"));

pub fn style_sheet() -> rouille::Response {
    rouille::Response::from_data("text/css; charset=utf-8", CSS).with_public_cache(365 * 24 * 60 * 60)
}
