//! Messaging deep links.
//!
//! A link has the form `{base}?phone={digits}&text={percent-encoded text}`.
//! The text is encoded with `urlencoding`, so spaces become `%20` and
//! newlines `%0A`; multi-byte characters are encoded byte by byte.

use order_link_core::PhoneNumber;
use url::Url;

use crate::error::LinkError;

/// Default deep-link base: WhatsApp's click-to-chat endpoint.
pub const WHATSAPP_BASE_URL: &str = "https://api.whatsapp.com/send";

/// A deep-link base bound to a destination phone number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepLink {
    base: String,
    phone_number: PhoneNumber,
}

impl DeepLink {
    /// Create a link from a custom base such as `whatsapp://send`.
    ///
    /// # Errors
    ///
    /// Returns `LinkError` if `base` is not an absolute URL or already
    /// contains a query string or fragment.
    pub fn new(base: &str, phone_number: PhoneNumber) -> Result<Self, LinkError> {
        let url = Url::parse(base.trim())?;
        if url.query().is_some() || url.fragment().is_some() {
            return Err(LinkError::UnexpectedQuery(url.into()));
        }

        Ok(Self {
            base: url.into(),
            phone_number,
        })
    }

    /// Link through [`WHATSAPP_BASE_URL`].
    #[must_use]
    pub fn whatsapp(phone_number: PhoneNumber) -> Self {
        Self {
            base: WHATSAPP_BASE_URL.to_string(),
            phone_number,
        }
    }

    /// The normalized base URL.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// The destination phone number.
    #[must_use]
    pub const fn phone_number(&self) -> &PhoneNumber {
        &self.phone_number
    }

    /// Build the full link carrying `text`.
    #[must_use]
    pub fn for_text(&self, text: &str) -> String {
        format!(
            "{}?phone={}&text={}",
            self.base,
            self.phone_number,
            urlencoding::encode(text)
        )
    }
}

/// Recover the decoded `text` parameter from a link built by [`DeepLink::for_text`].
///
/// Returns `None` if `link` is not a URL or has no `text` parameter.
#[must_use]
pub fn decode_text(link: &str) -> Option<String> {
    let url = Url::parse(link).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == "text")
        .map(|(_, value)| value.into_owned())
}
