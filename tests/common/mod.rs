#![allow(dead_code)]

use std::io::{Error, Write};
use std::path::PathBuf;
use tempfile::TempDir;

pub const FIXTURE_SIGNATURE: &str = "f5bec689b57ebefa81c84d184f4bca05e7e8e106";

/// Callback fields for a 1.00 EUR payment, signed with an empty certificate
/// and the `Rspec` contribution tag.
pub fn callback_json(signature: &str) -> String {
    format!(
        r#"{{"vads_payment_config":"SINGLE","vads_ctx_mode":null,"vads_contrib":"Rspec","vads_action_mode":"INTERACTIVE","vads_page_action":"PAYMENT","vads_validation_mode":"1","vads_shop_url":"","vads_trans_id":"000002","vads_site_id":null,"signature":"{signature}","vads_return_mode":"POST","vads_currency":"978","vads_shop_name":"","vads_amount":100,"vads_version":"V2","vads_trans_date":"20120420121326"}}"#
    )
}

pub fn write_file(dir: &TempDir, name: &str, contents: &str) -> Result<PathBuf, Error> {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path)?;
    file.write_all(contents.as_bytes())?;
    Ok(path)
}

pub fn generate_batch_csv(dir: &TempDir, rows: usize) -> Result<PathBuf, Error> {
    let path = dir.path().join("batch.csv");
    let mut wtr = csv::WriterBuilder::new().from_path(&path)?;
    wtr.write_record(["amount", "trans_id", "trans_date", "page_action", "identifier"])?;

    for i in 1..=rows {
        wtr.write_record([
            (i * 100).to_string().as_str(),
            i.to_string().as_str(),
            "20120420121326",
            "",
            "",
        ])?;
    }

    wtr.flush()?;
    Ok(path)
}
