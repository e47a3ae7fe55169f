use reqwest::Url;

/// Checks the length of the value in characters, not bytes.
pub fn is_length_between(value: &str, min: usize, max: usize) -> bool {
    let length = value.chars().count();
    length >= min && length <= max
}

/// Accepts only absolute URLs with a host, e.g. `https://example.com/a.png`.
pub fn is_url_valid(value: &str) -> bool {
    match Url::parse(value) {
        Ok(url) => url.has_host(),
        Err(_) => false,
    }
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
