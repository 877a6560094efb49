use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use hmac::{Hmac, Mac, digest::InvalidLength};
use sha2::Sha256;
use std::fmt;

type HmacSha256 = Hmac<Sha256>;

/// Appends an HMAC-SHA256 tag to cookie values so clients cannot forge
/// session ids: `value.base64url(tag)`.
#[derive(Clone)]
pub struct CookieSigner {
    mac: HmacSha256,
}

impl CookieSigner {
    pub fn new(secret: &[u8]) -> Result<Self, InvalidLength> {
        Ok(Self {
            mac: HmacSha256::new_from_slice(secret)?,
        })
    }

    pub fn sign(&self, value: &str) -> String {
        let mut mac = self.mac.clone();
        mac.update(value.as_bytes());
        let tag = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());
        format!("{value}.{tag}")
    }

    /// Return the original value when the tag matches, `None` otherwise.
    pub fn verify<'a>(&self, signed: &'a str) -> Option<&'a str> {
        let (value, tag) = signed.rsplit_once('.')?;
        let tag = URL_SAFE_NO_PAD.decode(tag).ok()?;

        let mut mac = self.mac.clone();
        mac.update(value.as_bytes());
        mac.verify_slice(&tag).ok()?;
        Some(value)
    }
}

impl fmt::Debug for CookieSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CookieSigner").finish_non_exhaustive()
    }
}
