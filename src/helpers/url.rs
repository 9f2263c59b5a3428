//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left as-is in a query value
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Page showing the full post
pub const POST_PAGE: &str = "post.html";
/// Page listing all posts
pub const INDEX_PAGE: &str = "index.html";

/// Link to the single-post page for `id`
///
/// # Examples
/// ```ignore
/// post_url("p1") // -> "post.html?id=p1"
/// ```
pub fn post_url(id: &str) -> String {
    format!("{}?id={}", POST_PAGE, encode_query_value(id))
}

/// Encode a value for use inside a query string
pub fn encode_query_value(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_url() {
        assert_eq!(post_url("p1"), "post.html?id=p1");
        assert_eq!(post_url("tax-law_2024.v2"), "post.html?id=tax-law_2024.v2");
    }

    #[test]
    fn test_post_url_encodes() {
        assert_eq!(post_url("a b&c"), "post.html?id=a%20b%26c");
        assert_eq!(post_url("налог"), "post.html?id=%D0%BD%D0%B0%D0%BB%D0%BE%D0%B3");
    }
}
