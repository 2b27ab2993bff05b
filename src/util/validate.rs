use url::Url;

use crate::error::RegistryError;

const ALLOWED_API_CLASSES: [&str; 3] = ["substrate", "ethereum", "aptos"];
const ALLOWED_SCHEMES: [&str; 4] = ["http", "https", "ws", "wss"];

/// Test that an api_class string is one of the supported protocol families.
pub fn is_valid_api_class(api_class: &str) -> bool {
    ALLOWED_API_CLASSES.contains(&api_class)
}

/// Test that a url is well formed, e.g. only http(s) and ws(s) with a host.
/// A string that does not parse is simply invalid, never an error.
pub fn is_valid_url(url: &str) -> bool {
    match Url::parse(url) {
        Ok(parsed) => {
            ALLOWED_SCHEMES.contains(&parsed.scheme())
                && parsed.host_str().map_or(false, |host| !host.is_empty())
        }
        Err(_) => false,
    }
}

/// Build a full url from the 'protocol' and 'address' request parameters.
pub fn compose_url(
    protocol: Option<&str>,
    address: Option<&str>,
) -> Result<String, RegistryError> {
    match (protocol, address) {
        (Some(protocol), Some(address)) => Ok(format!("{protocol}://{address}")),
        _ => Err(RegistryError::MissingParameter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_supported_api_classes() {
        assert!(is_valid_api_class("substrate"));
        assert!(is_valid_api_class("ethereum"));
        assert!(is_valid_api_class("aptos"));
    }

    #[test]
    fn rejects_unknown_api_classes() {
        assert!(!is_valid_api_class("bitcoin"));
        assert!(!is_valid_api_class("Ethereum"));
        assert!(!is_valid_api_class(""));
    }

    #[test]
    fn accepts_http_and_ws_urls() {
        assert!(is_valid_url("https://a.b"));
        assert!(is_valid_url("http://chain5.com"));
        assert!(is_valid_url("wss://x:9000"));
        assert!(is_valid_url("ws://node.local/path"));
    }

    #[test]
    fn rejects_bad_scheme_or_missing_host() {
        assert!(!is_valid_url("ftp://x"));
        assert!(!is_valid_url("nohost"));
        assert!(!is_valid_url("https://"));
        assert!(!is_valid_url(""));
    }

    #[test]
    fn composes_url_from_parts() {
        assert_eq!(
            compose_url(Some("http"), Some("chain5.com")).unwrap(),
            "http://chain5.com"
        );
    }

    #[test]
    fn compose_url_requires_both_parts() {
        assert!(matches!(
            compose_url(None, Some("chain5.com")),
            Err(RegistryError::MissingParameter)
        ));
        assert!(matches!(
            compose_url(Some("http"), None),
            Err(RegistryError::MissingParameter)
        ));
        assert!(matches!(
            compose_url(None, None),
            Err(RegistryError::MissingParameter)
        ));
    }
}
