use clap::{Args, Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use systempay::application::builder::RequestBuilder;
use systempay::application::verifier::SignatureVerifier;
use systempay::domain::config::{CtxMode, GatewayConfig};
use systempay::interfaces::csv::request_reader::RequestReader;
use systempay::interfaces::json::params_io::{
    ParamsWriter, read_attributes, read_config, read_params,
};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    config: ConfigArgs,

    #[command(subcommand)]
    command: Command,
}

/// Merchant settings. Flags override values loaded from `--config`.
#[derive(Args)]
struct ConfigArgs {
    /// JSON file holding the merchant configuration
    #[arg(long, global = true, env = "SYSTEMPAY_CONFIG")]
    config: Option<PathBuf>,

    #[arg(long, global = true, env = "SYSTEMPAY_SITE_ID")]
    site_id: Option<String>,

    /// Shared secret used to sign and verify parameters
    #[arg(long, global = true, env = "SYSTEMPAY_CERTIFICATE", hide_env_values = true)]
    certificate: Option<String>,

    /// TEST or PRODUCTION
    #[arg(long, global = true, env = "SYSTEMPAY_CTX_MODE")]
    ctx_mode: Option<CtxMode>,

    /// Contribution tag naming the integrating application
    #[arg(long, global = true, env = "SYSTEMPAY_CONTRIB")]
    contrib: Option<String>,

    #[arg(long, global = true, env = "SYSTEMPAY_SHOP_URL")]
    shop_url: Option<String>,

    #[arg(long, global = true, env = "SYSTEMPAY_SHOP_NAME")]
    shop_name: Option<String>,
}

impl ConfigArgs {
    fn load(self) -> Result<GatewayConfig> {
        let mut config = match &self.config {
            Some(path) => read_config(open(path)?).into_diagnostic()?,
            None => GatewayConfig::default(),
        };

        if self.site_id.is_some() {
            config.site_id = self.site_id;
        }
        if self.certificate.is_some() {
            config.certificate = self.certificate;
        }
        if self.ctx_mode.is_some() {
            config.ctx_mode = self.ctx_mode;
        }
        if self.contrib.is_some() {
            config.contrib = self.contrib;
        }
        if self.shop_url.is_some() {
            config.shop_url = self.shop_url;
        }
        if self.shop_name.is_some() {
            config.shop_name = self.shop_name;
        }
        Ok(config)
    }
}

#[derive(Subcommand)]
enum Command {
    /// Build and sign the form fields for one transaction (JSON attributes)
    Sign { input: PathBuf },
    /// Build and sign one request per CSV row, printing JSON lines
    SignBatch { input: PathBuf },
    /// Check the signature of callback parameters (JSON object)
    ///
    /// Prints `valid` and exits 0, or prints `invalid` and exits 2. Unreadable
    /// input exits 1.
    Verify { input: PathBuf },
}

/// Exit status of `verify` for a well-formed callback with a bad signature.
const INVALID_SIGNATURE_EXIT: u8 = 2;

fn open(path: &Path) -> Result<File> {
    File::open(path).into_diagnostic()
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config.load()?;

    match cli.command {
        Command::Sign { input } => {
            let attributes = read_attributes(open(&input)?).into_diagnostic()?;
            let params = RequestBuilder::new(&config)
                .build(attributes)
                .into_diagnostic()?;

            let stdout = io::stdout();
            let mut writer = ParamsWriter::new(stdout.lock());
            writer.write_params(&params).into_diagnostic()?;
            writer.flush().into_diagnostic()?;
        }
        Command::SignBatch { input } => {
            let builder = RequestBuilder::new(&config);
            let reader = RequestReader::new(open(&input)?);

            let stdout = io::stdout();
            let mut writer = ParamsWriter::new(stdout.lock());
            for (row, attributes) in reader.requests().enumerate() {
                match attributes {
                    Ok(attributes) => match builder.build(attributes) {
                        Ok(params) => writer.write_params(&params).into_diagnostic()?,
                        Err(e) => error!(row = row + 1, "Error building request: {e}"),
                    },
                    Err(e) => error!(row = row + 1, "Error reading request: {e}"),
                }
            }
            writer.flush().into_diagnostic()?;
        }
        Command::Verify { input } => {
            let params = read_params(open(&input)?).into_diagnostic()?;
            if SignatureVerifier::new(&config).valid_signature(&params) {
                println!("valid");
            } else {
                println!("invalid");
                return Ok(ExitCode::from(INVALID_SIGNATURE_EXIT));
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
