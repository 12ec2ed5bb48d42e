//! OAuth 1.0a request signing (HMAC-SHA1)
//!
//! Only the `oauth_*` parameters and any query parameters are signed. JSON
//! request bodies are not part of the signature base string.

use super::credentials::XCredentials;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use hmac::{Hmac, Mac};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use rand::Rng;
use rand::distributions::Alphanumeric;
use sha1::Sha1;

type HmacSha1 = Hmac<Sha1>;

/// RFC 3986 unreserved characters stay as-is
const RFC3986: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

const NONCE_LEN: usize = 32;

pub fn encode(value: &str) -> String {
    utf8_percent_encode(value, RFC3986).to_string()
}

/// `METHOD&url&params` with parameters sorted by encoded key then value
pub fn signature_base_string(method: &str, url: &str, params: &[(String, String)]) -> String {
    let mut encoded: Vec<(String, String)> = params
        .iter()
        .map(|(k, v)| (encode(k), encode(v)))
        .collect();
    encoded.sort();

    let param_string = encoded
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");

    format!(
        "{}&{}&{}",
        method.to_ascii_uppercase(),
        encode(url),
        encode(&param_string)
    )
}

/// Base64 HMAC-SHA1 of `base_string` keyed by both secrets
pub fn sign(base_string: &str, consumer_secret: &str, token_secret: &str) -> String {
    let key = format!("{}&{}", encode(consumer_secret), encode(token_secret));
    let mut mac =
        HmacSha1::new_from_slice(key.as_bytes()).expect("HMAC accepts keys of any length");
    mac.update(base_string.as_bytes());
    STANDARD.encode(mac.finalize().into_bytes())
}

/// Signs requests for one set of user credentials
#[derive(Debug, Clone)]
pub struct OAuthSigner {
    credentials: XCredentials,
}

impl OAuthSigner {
    pub fn new(credentials: XCredentials) -> Self {
        Self { credentials }
    }

    /// `Authorization` header value with a fresh nonce and timestamp
    pub fn authorization(&self, method: &str, url: &str) -> String {
        let nonce: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(NONCE_LEN)
            .map(char::from)
            .collect();
        let timestamp = chrono::Utc::now().timestamp().to_string();
        self.authorization_with(method, url, &[], &nonce, &timestamp)
    }

    /// `Authorization` header value for a fixed nonce and timestamp.
    ///
    /// `request_params` are query or form parameters that take part in the
    /// signature but are not placed in the header.
    pub fn authorization_with(
        &self,
        method: &str,
        url: &str,
        request_params: &[(&str, &str)],
        nonce: &str,
        timestamp: &str,
    ) -> String {
        let creds = &self.credentials;
        let oauth_params = [
            ("oauth_consumer_key", creds.api_key.as_str()),
            ("oauth_nonce", nonce),
            ("oauth_signature_method", "HMAC-SHA1"),
            ("oauth_timestamp", timestamp),
            ("oauth_token", creds.access_token.as_str()),
            ("oauth_version", "1.0"),
        ];

        let all_params: Vec<(String, String)> = oauth_params
            .iter()
            .chain(request_params.iter())
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let base = signature_base_string(method, url, &all_params);
        let signature = sign(&base, &creds.api_secret, &creds.access_secret);

        let mut header_params: Vec<(&str, String)> = oauth_params
            .iter()
            .map(|(k, v)| (*k, v.to_string()))
            .collect();
        header_params.push(("oauth_signature", signature));
        header_params.sort_by(|a, b| a.0.cmp(b.0));

        let fields = header_params
            .iter()
            .map(|(k, v)| format!("{}=\"{}\"", encode(k), encode(v)))
            .collect::<Vec<_>>()
            .join(", ");
        format!("OAuth {}", fields)
    }
}
