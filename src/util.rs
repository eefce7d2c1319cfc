use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

/// Encodes `s` so it can stand in for a single path segment.
pub fn encode_segment(s: &str) -> String {
    utf8_percent_encode(s, NON_ALPHANUMERIC).to_string()
}

#[macro_export]
macro_rules! get_param_or_str {
    ($request:expr, $name:expr, $default:expr) => {{
        let option = $request.get_param($name);
        match option {
            Some(value) => std::borrow::Cow::from(value),
            None => std::borrow::Cow::from($default),
        }
    }};
}
