use chrono::{DateTime, Utc};

/// Source of "now" for requests that do not carry their own date.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

pub type ClockBox = Box<dyn Clock>;
