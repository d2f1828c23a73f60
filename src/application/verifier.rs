use super::signature;
use crate::domain::config::GatewayConfig;
use crate::domain::params::Params;
use subtle::ConstantTimeEq;
use tracing::warn;

/// Checks that a callback's parameters were signed with the merchant certificate.
pub struct SignatureVerifier<'a> {
    config: &'a GatewayConfig,
}

impl<'a> SignatureVerifier<'a> {
    pub fn new(config: &'a GatewayConfig) -> Self {
        Self { config }
    }

    /// Returns `true` iff the received `signature` field matches the digest
    /// recomputed over the other fields.
    ///
    /// A missing or tampered signature yields `false`; it is never an error.
    pub fn valid_signature(&self, received: &Params) -> bool {
        let Some(claimed) = received.signature() else {
            warn!("Callback parameters carry no signature");
            return false;
        };

        let expected = signature::compute(received, self.config.secret());
        let valid: bool = expected.as_bytes().ct_eq(claimed.as_bytes()).into();
        if !valid {
            warn!(claimed, "Callback signature mismatch");
        }
        valid
    }
}

/// Shorthand for [`SignatureVerifier::valid_signature`].
pub fn valid_signature(config: &GatewayConfig, received: &Params) -> bool {
    SignatureVerifier::new(config).valid_signature(received)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn callback(signature: &str) -> Params {
        let json = format!(
            r#"{{"vads_payment_config":"SINGLE","vads_ctx_mode":null,"vads_contrib":"Rspec","vads_action_mode":"INTERACTIVE","vads_page_action":"PAYMENT","vads_validation_mode":"1","vads_shop_url":"","vads_trans_id":"000002","vads_site_id":null,"signature":"{signature}","vads_return_mode":"POST","vads_currency":"978","vads_shop_name":"","vads_amount":100,"vads_version":"V2","vads_trans_date":"20120420121326"}}"#
        );
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn test_valid_params() {
        let config = GatewayConfig::new().with_contrib("Rspec");
        assert!(valid_signature(
            &config,
            &callback("f5bec689b57ebefa81c84d184f4bca05e7e8e106")
        ));
    }

    #[test]
    fn test_altered_signature() {
        let config = GatewayConfig::new().with_contrib("Rspec");
        assert!(!valid_signature(
            &config,
            &callback("f6bec689b57ebefa81c84d184f4bca05e7e8e106")
        ));
    }

    #[test]
    fn test_wrong_certificate() {
        let config = GatewayConfig::new().with_certificate("1234194862125022");
        assert!(!valid_signature(
            &config,
            &callback("f5bec689b57ebefa81c84d184f4bca05e7e8e106")
        ));
    }

    #[test]
    fn test_certificate_signed_callback() {
        let config = GatewayConfig::new().with_certificate("8877665544332211");
        assert!(valid_signature(
            &config,
            &callback("8c9ef6e199bb59c0cc0d713d14cbf7297b157cad")
        ));
    }

    #[test]
    fn test_missing_signature() {
        let mut params = callback("");
        params.insert("signature", None);
        assert!(!valid_signature(&GatewayConfig::new(), &params));
    }

    #[test]
    fn test_truncated_signature() {
        let config = GatewayConfig::new();
        assert!(!valid_signature(&config, &callback("f5bec689")));
    }

    #[test]
    fn test_input_not_mutated() {
        let params = callback("f5bec689b57ebefa81c84d184f4bca05e7e8e106");
        let before = params.clone();
        valid_signature(&GatewayConfig::new(), &params);
        assert_eq!(params, before);
    }
}
