use crate::domain::fields::SIGNED_FIELDS;
use crate::domain::params::Params;
use sha1::{Digest, Sha1};

const SEPARATOR: char = '+';

/// Builds the exact string the gateway hashes.
///
/// Values are taken in [`SIGNED_FIELDS`] order. Null fields contribute an empty
/// segment, absent fields contribute nothing, and the secret is always last.
pub fn signing_payload(fields: &Params, secret: &str) -> String {
    let mut payload = String::new();
    for value in SIGNED_FIELDS
        .iter()
        .filter_map(|field| fields.rendered(field))
    {
        payload.push_str(&value);
        payload.push(SEPARATOR);
    }
    payload.push_str(secret);
    payload
}

/// Computes the lowercase hex SHA-1 signature of `fields` under `secret`.
pub fn compute(fields: &Params, secret: &str) -> String {
    let digest = Sha1::digest(signing_payload(fields, secret).as_bytes());
    hex::encode(digest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::params::ParamValue;

    fn fixture() -> Params {
        [
            ("vads_payment_config", Some("SINGLE".into())),
            ("vads_ctx_mode", None),
            ("vads_contrib", Some("Rspec".into())),
            ("vads_action_mode", Some("INTERACTIVE".into())),
            ("vads_page_action", Some("PAYMENT".into())),
            ("vads_validation_mode", Some("1".into())),
            ("vads_shop_url", Some("".into())),
            ("vads_trans_id", Some("000002".into())),
            ("vads_site_id", None),
            ("vads_return_mode", Some("POST".into())),
            ("vads_currency", Some("978".into())),
            ("vads_shop_name", Some("".into())),
            ("vads_amount", Some(ParamValue::Int(100))),
            ("vads_version", Some("V2".into())),
            ("vads_trans_date", Some("20120420121326".into())),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_payload_follows_gateway_order() {
        assert_eq!(
            signing_payload(&fixture(), "secret"),
            "INTERACTIVE+100+Rspec++978+PAYMENT+SINGLE+POST++++20120420121326+000002+1+V2+secret"
        );
    }

    #[test]
    fn test_known_digest_without_certificate() {
        assert_eq!(
            compute(&fixture(), ""),
            "f5bec689b57ebefa81c84d184f4bca05e7e8e106"
        );
    }

    #[test]
    fn test_known_digest_with_certificate() {
        assert_eq!(
            compute(&fixture(), "8877665544332211"),
            "8c9ef6e199bb59c0cc0d713d14cbf7297b157cad"
        );
    }

    #[test]
    fn test_signature_field_is_ignored() {
        let mut params = fixture();
        let before = compute(&params, "8877665544332211");
        params.insert("signature", Some("anything".into()));
        assert_eq!(compute(&params, "8877665544332211"), before);
    }

    #[test]
    fn test_leading_zeros_change_digest() {
        let mut params = fixture();
        params.insert("vads_trans_id", Some("2".into()));
        assert_ne!(
            compute(&params, ""),
            "f5bec689b57ebefa81c84d184f4bca05e7e8e106"
        );
    }

    #[test]
    fn test_null_differs_from_absent() {
        let params = fixture();
        let without_site_id: Params = params
            .iter()
            .filter(|(field, _)| *field != "vads_site_id")
            .map(|(field, value)| (field, value.cloned()))
            .collect();
        assert_ne!(compute(&without_site_id, ""), compute(&params, ""));
    }

    #[test]
    fn test_integer_and_text_render_alike() {
        let mut params = fixture();
        params.insert("vads_amount", Some("100".into()));
        assert_eq!(
            compute(&params, ""),
            "f5bec689b57ebefa81c84d184f4bca05e7e8e106"
        );
    }
}
