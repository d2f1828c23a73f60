use super::signature;
use crate::domain::config::GatewayConfig;
use crate::domain::fields::*;
use crate::domain::params::{ParamValue, Params};
use crate::domain::ports::ClockBox;
use crate::domain::request::{TransDate, TransactionAttributes, TransactionRequest};
use crate::error::ConstructionError;
use crate::infrastructure::clock::SystemClock;
use tracing::debug;

/// Turns transaction requests into signed gateway parameter sets.
///
/// `RequestBuilder` borrows the merchant configuration, so every request built
/// from it sees the same site id, mode and certificate. Apart from asking the
/// clock for a default `vads_trans_date`, building is pure.
pub struct RequestBuilder<'a> {
    config: &'a GatewayConfig,
    clock: ClockBox,
}

impl<'a> RequestBuilder<'a> {
    /// Creates a builder stamping undated requests with the system clock.
    pub fn new(config: &'a GatewayConfig) -> Self {
        Self::with_clock(config, Box::new(SystemClock::new()))
    }

    pub fn with_clock(config: &'a GatewayConfig, clock: ClockBox) -> Self {
        Self { config, clock }
    }

    /// Infers the request kind from `attributes`, then builds and signs it.
    ///
    /// Fails with [`ConstructionError::MissingRequiredField`] when the fields
    /// required by the inferred kind are not all present.
    pub fn build(&self, attributes: TransactionAttributes) -> Result<Params, ConstructionError> {
        let request = TransactionRequest::try_from(attributes)?;
        Ok(self.build_request(&request))
    }

    /// Builds the signed parameter set for an already validated request.
    pub fn build_request(&self, request: &TransactionRequest) -> Params {
        let mut params = self.base_params(request);

        match request {
            TransactionRequest::Payment(payment) => {
                params.insert(AMOUNT, Some(payment.amount.into()));
                params.insert(TRANS_ID, Some(payment.trans_id.as_str().into()));
                params.insert(CURRENCY, Some(CURRENCY_EUR.into()));
                params.insert(PAYMENT_CONFIG, Some(PAYMENT_CONFIG_SINGLE.into()));
                if let Some(identifier) = &payment.identifier {
                    params.insert(IDENTIFIER, Some(identifier.as_str().into()));
                }
            }
            TransactionRequest::Management(management) => {
                params.insert(AMOUNT, None);
                params.insert(TRANS_ID, None);
                params.insert(CURRENCY, None);
                params.insert(PAYMENT_CONFIG, None);
                params.insert(IDENTIFIER, Some(management.identifier.as_str().into()));
            }
        }

        let signature = signature::compute(&params, self.config.secret());
        debug!(
            page_action = request.page_action(),
            trans_id = ?params.get(TRANS_ID),
            "Built gateway request"
        );
        params.insert(SIGNATURE, Some(signature.into()));
        params
    }

    fn base_params(&self, request: &TransactionRequest) -> Params {
        let config = self.config;
        let trans_date = request
            .trans_date()
            .cloned()
            .unwrap_or_else(|| TransDate::from_datetime(self.clock.now()));

        let mut params = Params::new();
        params.insert(SITE_ID, config.site_id.clone().map(ParamValue::from));
        params.insert(CTX_MODE, config.ctx_mode.map(|mode| mode.as_str().into()));
        params.insert(CONTRIB, config.contrib.clone().map(ParamValue::from));
        params.insert(ACTION_MODE, Some(ACTION_MODE_INTERACTIVE.into()));
        params.insert(PAGE_ACTION, Some(request.page_action().into()));
        params.insert(VALIDATION_MODE, Some(VALIDATION_MODE_DEFAULT.into()));
        params.insert(
            SHOP_URL,
            Some(config.shop_url.clone().unwrap_or_default().into()),
        );
        params.insert(RETURN_MODE, Some(RETURN_MODE_POST.into()));
        params.insert(
            SHOP_NAME,
            Some(config.shop_name.clone().unwrap_or_default().into()),
        );
        params.insert(VERSION, Some(PROTOCOL_VERSION.into()));
        params.insert(TRANS_DATE, Some(trans_date.as_str().into()));
        params
    }
}
