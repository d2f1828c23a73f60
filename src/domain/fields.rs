//! Wire names of the gateway form fields.

pub const SITE_ID: &str = "vads_site_id";
pub const CTX_MODE: &str = "vads_ctx_mode";
pub const CONTRIB: &str = "vads_contrib";
pub const ACTION_MODE: &str = "vads_action_mode";
pub const PAGE_ACTION: &str = "vads_page_action";
pub const VALIDATION_MODE: &str = "vads_validation_mode";
pub const SHOP_URL: &str = "vads_shop_url";
pub const TRANS_ID: &str = "vads_trans_id";
pub const CURRENCY: &str = "vads_currency";
pub const PAYMENT_CONFIG: &str = "vads_payment_config";
pub const RETURN_MODE: &str = "vads_return_mode";
pub const SHOP_NAME: &str = "vads_shop_name";
pub const AMOUNT: &str = "vads_amount";
pub const VERSION: &str = "vads_version";
pub const TRANS_DATE: &str = "vads_trans_date";
pub const IDENTIFIER: &str = "vads_identifier";
pub const SIGNATURE: &str = "signature";

/// Order in which the gateway concatenates field values before hashing.
///
/// This list is part of the gateway contract. It must never be replaced by the
/// iteration order of a map, even a sorted one.
pub const SIGNED_FIELDS: [&str; 16] = [
    ACTION_MODE,
    AMOUNT,
    CONTRIB,
    CTX_MODE,
    CURRENCY,
    IDENTIFIER,
    PAGE_ACTION,
    PAYMENT_CONFIG,
    RETURN_MODE,
    SHOP_NAME,
    SHOP_URL,
    SITE_ID,
    TRANS_DATE,
    TRANS_ID,
    VALIDATION_MODE,
    VERSION,
];

pub const ACTION_MODE_INTERACTIVE: &str = "INTERACTIVE";
pub const VALIDATION_MODE_DEFAULT: &str = "1";
pub const RETURN_MODE_POST: &str = "POST";
pub const PROTOCOL_VERSION: &str = "V2";
pub const PAGE_ACTION_PAYMENT: &str = "PAYMENT";
/// ISO 4217 numeric code for EUR.
pub const CURRENCY_EUR: &str = "978";
pub const PAYMENT_CONFIG_SINGLE: &str = "SINGLE";
