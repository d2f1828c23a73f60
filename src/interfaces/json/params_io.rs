use crate::domain::config::GatewayConfig;
use crate::domain::params::Params;
use crate::domain::request::TransactionAttributes;
use crate::error::Result;
use std::io::{Read, Write};

/// Reads a JSON object of transaction attributes.
pub fn read_attributes<R: Read>(source: R) -> Result<TransactionAttributes> {
    Ok(serde_json::from_reader(source)?)
}

/// Reads the JSON object of fields posted back by the gateway.
pub fn read_params<R: Read>(source: R) -> Result<Params> {
    Ok(serde_json::from_reader(source)?)
}

pub fn read_config<R: Read>(source: R) -> Result<GatewayConfig> {
    Ok(serde_json::from_reader(source)?)
}

/// Writes parameter sets as JSON, one object per line.
pub struct ParamsWriter<W: Write> {
    writer: W,
}

impl<W: Write> ParamsWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_params(&mut self, params: &Params) -> Result<()> {
        serde_json::to_writer(&mut self.writer, params)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::params::ParamValue;

    #[test]
    fn test_write_one_object_per_line() {
        let params: Params = [
            ("vads_amount", Some(ParamValue::Int(100))),
            ("vads_site_id", None),
        ]
        .into_iter()
        .collect();

        let mut buffer = Vec::new();
        let mut writer = ParamsWriter::new(&mut buffer);
        writer.write_params(&params).unwrap();
        writer.write_params(&params).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], r#"{"vads_amount":100,"vads_site_id":null}"#);
    }

    #[test]
    fn test_read_params_rejects_non_object() {
        assert!(read_params("[1, 2]".as_bytes()).is_err());
    }

    #[test]
    fn test_read_attributes() {
        let attrs = read_attributes(r#"{"amount": 100, "trans_id": 2}"#.as_bytes()).unwrap();
        assert_eq!(attrs.amount, Some(100));
    }
}
