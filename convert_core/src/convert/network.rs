// cURL command to `fetch` call. Only the URL is carried over; the emitted call always uses
// `GET` with a JSON content type, whatever `-X`/`-H` flags the command had.
use regex::Regex;
use std::sync::OnceLock;

use crate::config::ConvertConfig;
use crate::convert::helpers::escape_single_quotes;
use crate::error::ConversionResult;

/// Builds a `fetch` call around the first quoted token of a `curl` command.
///
/// # Example
/// ```
/// use convert_core::ConvertConfig;
/// use convert_core::convert::network::curl_to_fetch;
/// let js = curl_to_fetch(r#"curl -X POST "https://x.test/api""#, &ConvertConfig::default())?;
/// assert!(js.starts_with("fetch('https://x.test/api', {\n  method: 'GET',"));
/// # Ok::<(), convert_core::ConvertError>(())
/// ```
pub fn curl_to_fetch(input: &str, config: &ConvertConfig) -> ConversionResult {
    let url = first_quoted(input).unwrap_or(&config.placeholder_url);
    Ok(format!(
        "fetch('{}', {{\n  method: 'GET',\n  headers: {{\n    'Content-Type': 'application/json'\n  }}\n}})\n  .then(response => response.json())\n  .then(data => console.log(data))\n  .catch(error => console.error('Error:', error));",
        escape_single_quotes(url)
    ))
}

/// Returns the contents of the first single- or double-quoted token.
fn first_quoted(input: &str) -> Option<&str> {
    let caps = regex_quoted().captures(input)?;
    caps.get(1).or_else(|| caps.get(2)).map(|m| m.as_str())
}

fn regex_quoted() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"'([^']*)'|"([^"]*)""#).unwrap())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_quoted_token_wins() {
        let js = curl_to_fetch(
            r#"curl 'https://a.test/one' -H "Authorization: Bearer x""#,
            &ConvertConfig::default(),
        )
        .unwrap();
        assert!(js.contains("fetch('https://a.test/one',"));
        assert!(!js.contains("Authorization"));
    }

    #[test]
    fn header_before_url_is_taken_as_url() {
        let js = curl_to_fetch(
            r#"curl -H "Accept: text/plain" 'https://a.test'"#,
            &ConvertConfig::default(),
        )
        .unwrap();
        assert!(js.starts_with("fetch('Accept: text/plain',"));
    }

    #[test]
    fn missing_quotes_fall_back_to_placeholder() {
        let js = curl_to_fetch("curl https://a.test", &ConvertConfig::default()).unwrap();
        assert!(js.starts_with("fetch('https://api.example.com/data',"));
        assert!(js.contains("'Content-Type': 'application/json'"));
        assert!(js.ends_with(".catch(error => console.error('Error:', error));"));
    }

    #[test]
    fn double_quoted_url_escapes_single_quotes() {
        let js = curl_to_fetch(r#"curl "https://a.test/?q=it's""#, &ConvertConfig::default())
            .unwrap();
        assert!(js.contains(r"fetch('https://a.test/?q=it\'s',"));
    }
}
