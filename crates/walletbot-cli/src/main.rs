/*
[INPUT]:  CLI arguments, optional YAML configuration file, environment variables
[OUTPUT]: Issued tokens, decoded tokens, webhook signatures and verdicts on stdout
[POS]:    Binary entry point
[UPDATE]: When changing CLI subcommands, flags, or startup flow
*/

mod config;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, anyhow};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use walletbot_auth::http::{Method, Url};
use walletbot_auth::{
    RequestAuthorizer, TokenIssuer, WebhookVerifier, compute_signature, decode_unverified,
};

use crate::config::CliConfig;

#[derive(Parser, Debug)]
#[command(name = "walletbot", version, about = "Wallet bot credential issuance and webhook verification")]
struct Cli {
    #[arg(long = "config", value_name = "PATH", global = true)]
    config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn", global = true)]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Issue a bearer token bound to METHOD and URL
    Token {
        #[arg(long, default_value = "GET")]
        method: String,
        #[arg(long)]
        url: String,
        /// Sign with the wallet secret instead of the API key
        #[arg(long)]
        wallet: bool,
    },
    /// Decode a token's header and payload without verifying it
    Inspect {
        #[arg(long)]
        token: String,
    },
    /// Compute the v0 signature for a webhook body
    SignWebhook {
        #[arg(long)]
        timestamp: String,
        #[command(flatten)]
        body: BodyArgs,
    },
    /// Verify a captured webhook; exits non-zero when invalid
    VerifyWebhook {
        #[arg(long)]
        timestamp: Option<String>,
        #[arg(long)]
        signature: Option<String>,
        /// Epoch seconds to verify against (defaults to now)
        #[arg(long)]
        now: Option<i64>,
        #[command(flatten)]
        body: BodyArgs,
    },
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct BodyArgs {
    /// Read the raw body from a file
    #[arg(long = "body-file", value_name = "PATH")]
    body_file: Option<PathBuf>,
    /// Raw body given inline
    #[arg(long = "body")]
    body: Option<String>,
}

impl BodyArgs {
    fn read(&self) -> Result<Vec<u8>> {
        match (&self.body_file, &self.body) {
            (Some(path), _) => std::fs::read(path)
                .with_context(|| format!("read body file {}", path.display())),
            (None, Some(body)) => Ok(body.as_bytes().to_vec()),
            (None, None) => Err(anyhow!("either --body-file or --body is required")),
        }
    }
}

fn main() -> Result<ExitCode> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let config = CliConfig::load(args.config_path.as_deref()).context("load config")?;
    debug!(
        config_path = ?args.config_path,
        has_wallet_secret = config.wallet_secret.is_some(),
        "configuration loaded"
    );

    match args.command {
        Command::Token { method, url, wallet } => {
            let token = issue_token(&config, &method, &url, wallet)?;
            println!("{token}");
        }
        Command::Inspect { token } => {
            let (header, claims) = decode_unverified(&token).context("decode token")?;
            let rendered = serde_json::to_string_pretty(&serde_json::json!({
                "header": header,
                "payload": claims,
            }))
            .context("render token")?;
            println!("{rendered}");
        }
        Command::SignWebhook { timestamp, body } => {
            let secret = config.signing_secret()?;
            let body = body.read()?;
            let signature = compute_signature(secret.as_bytes(), &timestamp, &body)
                .context("compute webhook signature")?;
            println!("{signature}");
        }
        Command::VerifyWebhook {
            timestamp,
            signature,
            now,
            body,
        } => {
            let verifier = WebhookVerifier::new(config.signing_secret()?);
            let body = body.read()?;
            let now = now.unwrap_or_else(|| chrono::Utc::now().timestamp());

            if verifier.verify(signature.as_deref(), timestamp.as_deref(), &body, now) {
                info!("webhook signature valid");
                println!("valid");
            } else {
                warn!("webhook signature invalid");
                println!("invalid");
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn issue_token(config: &CliConfig, method: &str, url: &str, wallet: bool) -> Result<String> {
    let url = Url::parse(url).with_context(|| format!("invalid url {url}"))?;
    let method = method
        .parse::<Method>()
        .with_context(|| format!("invalid method {method}"))?;

    let authorizer = RequestAuthorizer::new(
        TokenIssuer::new(config.issuer.clone()),
        config.credentials()?,
    );

    let token = if wallet {
        authorizer
            .wallet_token(&method, &url)?
            .ok_or_else(|| anyhow!("--wallet requires a wallet secret"))?
    } else {
        authorizer.bearer_token(&method, &url)?
    };
    info!(method = %method, url = %url, wallet, "token issued");
    Ok(token)
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
