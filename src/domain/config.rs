use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gateway environment the merchant site talks to.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "UPPERCASE")]
pub enum CtxMode {
    Test,
    Production,
}

impl CtxMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Test => "TEST",
            Self::Production => "PRODUCTION",
        }
    }
}

impl fmt::Display for CtxMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CtxMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "TEST" => Ok(Self::Test),
            "PRODUCTION" => Ok(Self::Production),
            other => Err(format!("unknown context mode '{other}'")),
        }
    }
}

/// Merchant-side settings shared by every request and callback check.
///
/// Built once by the host application and then only borrowed. Unset values
/// are sent to the gateway as null fields; an unset certificate signs with
/// the empty string.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Shop identifier issued by the gateway.
    pub site_id: Option<String>,
    /// Shared secret appended to every signed payload.
    pub certificate: Option<String>,
    pub ctx_mode: Option<CtxMode>,
    /// Free-form tag naming the integrating application.
    pub contrib: Option<String>,
    pub shop_url: Option<String>,
    pub shop_name: Option<String>,
}

impl GatewayConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_site_id(mut self, site_id: impl Into<String>) -> Self {
        self.site_id = Some(site_id.into());
        self
    }

    pub fn with_certificate(mut self, certificate: impl Into<String>) -> Self {
        self.certificate = Some(certificate.into());
        self
    }

    pub fn with_ctx_mode(mut self, ctx_mode: CtxMode) -> Self {
        self.ctx_mode = Some(ctx_mode);
        self
    }

    pub fn with_contrib(mut self, contrib: impl Into<String>) -> Self {
        self.contrib = Some(contrib.into());
        self
    }

    pub fn with_shop_url(mut self, shop_url: impl Into<String>) -> Self {
        self.shop_url = Some(shop_url.into());
        self
    }

    pub fn with_shop_name(mut self, shop_name: impl Into<String>) -> Self {
        self.shop_name = Some(shop_name.into());
        self
    }

    /// Secret used for signing, empty when no certificate is configured.
    pub fn secret(&self) -> &str {
        self.certificate.as_deref().unwrap_or_default()
    }
}
