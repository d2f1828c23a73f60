use super::fields::PAGE_ACTION_PAYMENT;
use crate::error::ConstructionError;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fmt;

const TRANS_ID_WIDTH: usize = 6;
const TRANS_DATE_FORMAT: &str = "%Y%m%d%H%M%S";

/// Per-day transaction number, left-padded with zeros to six digits.
///
/// Values already six digits or longer are kept verbatim.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct TransId(String);

impl TransId {
    pub fn parse(raw: &str) -> Result<Self, ConstructionError> {
        let digits = raw.trim();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ConstructionError::InvalidField {
                field: "trans_id",
                reason: format!("'{raw}' is not a numeric transaction id"),
            });
        }
        Ok(Self(format!("{digits:0>TRANS_ID_WIDTH$}")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for TransId {
    fn from(value: u64) -> Self {
        Self(format!("{value:0>TRANS_ID_WIDTH$}"))
    }
}

impl fmt::Display for TransId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Transaction timestamp in the gateway's `YYYYMMDDHHMMSS` form.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct TransDate(String);

impl TransDate {
    pub fn parse(raw: &str) -> Result<Self, ConstructionError> {
        if raw.len() != 14 || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ConstructionError::InvalidField {
                field: "trans_date",
                reason: format!("'{raw}' is not a YYYYMMDDHHMMSS timestamp"),
            });
        }
        Ok(Self(raw.to_string()))
    }

    pub fn from_datetime(at: DateTime<Utc>) -> Self {
        Self(at.format(TRANS_DATE_FORMAT).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Transaction id as received from callers: JSON number or digit string.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone)]
#[serde(untagged)]
pub enum TransIdInput {
    Number(u64),
    Digits(String),
}

impl TryFrom<TransIdInput> for TransId {
    type Error = ConstructionError;

    fn try_from(input: TransIdInput) -> Result<Self, Self::Error> {
        match input {
            TransIdInput::Number(value) => Ok(value.into()),
            TransIdInput::Digits(raw) => Self::parse(&raw),
        }
    }
}

/// Loose caller input; the request variant is inferred from which fields are set.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Default)]
#[serde(default)]
pub struct TransactionAttributes {
    #[serde(alias = "vads_amount")]
    pub amount: Option<u64>,
    #[serde(alias = "vads_trans_id")]
    pub trans_id: Option<TransIdInput>,
    #[serde(alias = "vads_trans_date")]
    pub trans_date: Option<String>,
    #[serde(alias = "vads_page_action")]
    pub page_action: Option<String>,
    #[serde(alias = "vads_identifier")]
    pub identifier: Option<String>,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct PaymentRequest {
    /// Amount in minor currency units.
    pub amount: u64,
    pub trans_id: TransId,
    pub page_action: String,
    pub trans_date: Option<TransDate>,
    /// Stored card alias, for actions such as `REGISTER_PAY`.
    pub identifier: Option<String>,
}

impl PaymentRequest {
    pub fn new(amount: u64, trans_id: impl Into<TransId>) -> Self {
        Self {
            amount,
            trans_id: trans_id.into(),
            page_action: PAGE_ACTION_PAYMENT.to_string(),
            trans_date: None,
            identifier: None,
        }
    }

    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    pub fn with_trans_date(mut self, trans_date: TransDate) -> Self {
        self.trans_date = Some(trans_date);
        self
    }

    pub fn with_page_action(mut self, page_action: impl Into<String>) -> Self {
        self.page_action = page_action.into();
        self
    }
}

/// Non-payment operation on something the gateway issued earlier,
/// e.g. `REGISTER_UPDATE` on a stored card alias.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ManagementRequest {
    pub identifier: String,
    pub page_action: String,
    pub trans_date: Option<TransDate>,
}

impl ManagementRequest {
    pub fn new(identifier: impl Into<String>, page_action: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            page_action: page_action.into(),
            trans_date: None,
        }
    }

    pub fn with_trans_date(mut self, trans_date: TransDate) -> Self {
        self.trans_date = Some(trans_date);
        self
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum TransactionRequest {
    Payment(PaymentRequest),
    Management(ManagementRequest),
}

impl TransactionRequest {
    pub fn page_action(&self) -> &str {
        match self {
            Self::Payment(payment) => &payment.page_action,
            Self::Management(management) => &management.page_action,
        }
    }

    pub fn trans_date(&self) -> Option<&TransDate> {
        match self {
            Self::Payment(payment) => payment.trans_date.as_ref(),
            Self::Management(management) => management.trans_date.as_ref(),
        }
    }
}

impl From<PaymentRequest> for TransactionRequest {
    fn from(request: PaymentRequest) -> Self {
        Self::Payment(request)
    }
}

impl From<ManagementRequest> for TransactionRequest {
    fn from(request: ManagementRequest) -> Self {
        Self::Management(request)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl TryFrom<TransactionAttributes> for TransactionRequest {
    type Error = ConstructionError;

    fn try_from(attrs: TransactionAttributes) -> Result<Self, Self::Error> {
        let trans_date = attrs
            .trans_date
            .as_deref()
            .map(TransDate::parse)
            .transpose()?;
        let page_action = non_blank(attrs.page_action);

        if attrs.amount.is_some() || attrs.trans_id.is_some() {
            let amount = attrs
                .amount
                .ok_or(ConstructionError::MissingRequiredField("amount"))?;
            let trans_id = attrs
                .trans_id
                .ok_or(ConstructionError::MissingRequiredField("trans_id"))?
                .try_into()?;
            return Ok(Self::Payment(PaymentRequest {
                amount,
                trans_id,
                page_action: page_action.unwrap_or_else(|| PAGE_ACTION_PAYMENT.to_string()),
                trans_date,
                identifier: non_blank(attrs.identifier),
            }));
        }

        let identifier = non_blank(attrs.identifier)
            .ok_or(ConstructionError::MissingRequiredField("identifier"))?;
        let page_action =
            page_action.ok_or(ConstructionError::MissingRequiredField("page_action"))?;
        Ok(Self::Management(ManagementRequest {
            identifier,
            page_action,
            trans_date,
        }))
    }
}
