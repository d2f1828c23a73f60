//! Application layer: signing outbound requests and checking inbound callbacks.
//!
//! [`builder::RequestBuilder`] assembles and signs the form fields sent to the
//! gateway, [`verifier::SignatureVerifier`] checks the fields it posts back.
//! Both delegate hashing to [`signature`].

pub mod builder;
pub mod signature;
pub mod verifier;
