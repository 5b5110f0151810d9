//! OAuth 1.0a HMAC-SHA1 signature construction (RFC 5849, section 3.4).
//!
//! The signature covers the HTTP method, the base URI and every query and
//! `oauth_*` parameter. JSON request bodies are not part of it.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use sha1::Sha1;
use url::Url;

use crate::errors::{TwitterError, TwitterResult};

type HmacSha1 = Hmac<Sha1>;

/// Signature method advertised in `oauth_signature_method`.
pub const SIGNATURE_METHOD: &str = "HMAC-SHA1";

/// Protocol version advertised in `oauth_version`.
pub const OAUTH_VERSION: &str = "1.0";

/// Everything except the RFC 3986 unreserved characters.
const OAUTH_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encodes a value the way OAuth 1.0a requires.
///
/// # Examples
///
/// ```
/// use integrations_twitter::auth::percent_encode;
///
/// assert_eq!(percent_encode("Ladies + Gentlemen"), "Ladies%20%2B%20Gentlemen");
/// assert_eq!(percent_encode("a-b.c_d~e"), "a-b.c_d~e");
/// ```
pub fn percent_encode(input: &str) -> String {
    utf8_percent_encode(input, OAUTH_ENCODE_SET).to_string()
}

/// Base URI of a request: scheme, host, non-default port and path.
pub fn base_uri(url: &Url) -> String {
    let mut base = url.clone();
    base.set_query(None);
    base.set_fragment(None);
    base.to_string()
}

/// Builds the normalized parameter string from already-decoded pairs.
pub fn parameter_string(params: &[(String, String)]) -> String {
    let mut encoded: Vec<(String, String)> = params
        .iter()
        .map(|(k, v)| (percent_encode(k), percent_encode(v)))
        .collect();
    encoded.sort();

    encoded
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&")
}

/// Builds the signature base string.
pub fn signature_base_string(method: &str, url: &Url, oauth_params: &[(String, String)]) -> String {
    let mut params: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    params.extend(oauth_params.iter().cloned());

    format!(
        "{}&{}&{}",
        method.to_ascii_uppercase(),
        percent_encode(&base_uri(url)),
        percent_encode(&parameter_string(&params))
    )
}

/// Builds the HMAC key from the consumer secret and token secret.
pub fn signing_key(consumer_secret: &str, token_secret: &str) -> String {
    format!(
        "{}&{}",
        percent_encode(consumer_secret),
        percent_encode(token_secret)
    )
}

/// Computes the base64 HMAC-SHA1 signature of `base_string`.
pub fn sign(key: &str, base_string: &str) -> TwitterResult<String> {
    let mut mac = HmacSha1::new_from_slice(key.as_bytes()).map_err(|e| TwitterError::Signing {
        message: e.to_string(),
    })?;
    mac.update(base_string.as_bytes());
    Ok(STANDARD.encode(mac.finalize().into_bytes()))
}

/// Renders the `Authorization` header value from the signed parameters.
pub fn authorization_header(oauth_params: &[(String, String)]) -> String {
    let mut sorted: Vec<&(String, String)> = oauth_params.iter().collect();
    sorted.sort();

    let parts = sorted
        .iter()
        .map(|(k, v)| format!("{}=\"{}\"", percent_encode(k), percent_encode(v)))
        .collect::<Vec<_>>()
        .join(", ");

    format!("OAuth {}", parts)
}
