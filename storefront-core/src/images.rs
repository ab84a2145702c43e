//! Image reference resolution with a fallback placeholder.

use reqwest::Url;

/// Resolve an optional image reference to something the browser can load.
///
/// Absolute `http(s)` URLs and root-relative paths pass through. Anything
/// else (missing, blank, `javascript:`, `data:`, malformed) becomes `fallback`.
pub fn resolve<'a>(reference: Option<&'a str>, fallback: &'a str) -> &'a str {
    match reference.map(str::trim) {
        Some(r) if is_loadable(r) => r,
        _ => fallback,
    }
}

fn is_loadable(reference: &str) -> bool {
    if reference.is_empty() {
        return false;
    }
    if reference.starts_with('/') {
        return !reference.starts_with("//") && !reference.contains(char::is_whitespace);
    }
    match Url::parse(reference) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.host_str().is_some(),
        Err(_) => false,
    }
}

/// Inline `onerror` handler that swaps a failed image to the fallback once.
pub fn onerror_handler(fallback: &str) -> String {
    let escaped = fallback.replace('\\', "\\\\").replace('\'', "\\'");
    format!("this.onerror=null;this.src='{}';", escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FALLBACK: &str = "/static/img/placeholder.png";

    #[test]
    fn test_valid_references_pass_through() {
        assert_eq!(
            resolve(Some("https://cdn.example.com/a.webp"), FALLBACK),
            "https://cdn.example.com/a.webp"
        );
        assert_eq!(resolve(Some("/static/img/a.png"), FALLBACK), "/static/img/a.png");
    }

    #[test]
    fn test_broken_references_use_fallback() {
        for broken in [
            None,
            Some(""),
            Some("   "),
            Some("not a url"),
            Some("javascript:alert(1)"),
            Some("data:image/png;base64,AAAA"),
            Some("ftp://example.com/a.png"),
            Some("//cdn.example.com/a.png"),
            Some("https://"),
        ] {
            assert_eq!(resolve(broken, FALLBACK), FALLBACK, "reference {:?}", broken);
        }
    }

    #[test]
    fn test_onerror_handler_quotes_fallback() {
        assert_eq!(
            onerror_handler("/img/it's.png"),
            "this.onerror=null;this.src='/img/it\\'s.png';"
        );
    }
}
