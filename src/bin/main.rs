//! Walletgate CLI - inspect and drive the relay from a terminal
//!
//!   walletgate session <url-or-query>   → Resolve the session id
//!   walletgate terms                    → Fetch the terms, show text + hex
//!   walletgate relay --session <id> --address <a> --key <k> --signature <s>
//!                                       → POST an already-signed credential
//!   walletgate config                   → Show the effective endpoints
//!
//! Configuration:
//!   WALLETGATE_TERMS_URL, WALLETGATE_BACKEND_URL (environment or .env)
//!
//! Output format:
//!   --json     Output raw JSON (default for non-tty)
//!   --pretty   Pretty-print JSON (default for tty)

use anyhow::{anyhow, bail, Context, Result};
use serde_json::{json, Value};
use std::env;
use std::io::IsTerminal;
use tracing::debug;

use walletgate::logging::init_logging;
use walletgate::{
    resolve_session_id, AuthorizeError, AuthorizePayload, DataSignature, GateConfig, HttpClient,
    ReqwestClient, SessionId,
};

fn main() {
    init_logging();

    let args: Vec<String> = env::args().collect();
    let opts = ParsedArgs::parse(&args[1..]);

    if opts.help {
        print_usage();
        return;
    }

    if opts.version {
        println!("walletgate {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    let result = match opts.command.as_deref() {
        Some("session") => cmd_session(&opts),
        Some("config") => cmd_config(),
        Some("terms") => run_async(cmd_terms()),
        Some("relay") => run_async(cmd_relay(&opts)),
        Some(cmd) => Err(anyhow!("Unknown command: {}", cmd)),
        None => {
            print_usage();
            return;
        }
    };

    let pretty = !opts.json && (opts.pretty || std::io::stdout().is_terminal());
    match result {
        Ok(output) => println!("{}", format_json(&output, pretty)),
        Err(e) => {
            eprintln!("{}", format_json(&json!({"error": format!("{e:#}")}), pretty));
            std::process::exit(1);
        }
    }
}

fn format_json(value: &Value, pretty: bool) -> String {
    let formatted = if pretty { serde_json::to_string_pretty(value) } else { serde_json::to_string(value) };
    formatted.unwrap_or_else(|_| value.to_string())
}

fn run_async<F: std::future::Future<Output = Result<Value>>>(fut: F) -> Result<Value> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("start runtime")?;
    rt.block_on(fut)
}

#[derive(Default)]
struct ParsedArgs {
    command: Option<String>,
    target: Option<String>,
    // Relay options
    session: Option<String>,
    address: Option<String>,
    key: Option<String>,
    signature: Option<String>,
    // Output options
    json: bool,
    pretty: bool,
    help: bool,
    version: bool,
}

impl ParsedArgs {
    fn parse(args: &[String]) -> Self {
        let mut opts = ParsedArgs::default();
        let mut positional = Vec::new();
        let mut i = 0;

        while i < args.len() {
            let arg = &args[i];
            let mut value = || {
                i += 1;
                args.get(i).cloned()
            };
            match arg.as_str() {
                "--help" | "-h" => opts.help = true,
                "--version" | "-V" => opts.version = true,
                "--json" => opts.json = true,
                "--pretty" => opts.pretty = true,
                "--session" | "-s" => opts.session = value(),
                "--address" | "-a" => opts.address = value(),
                "--key" | "-k" => opts.key = value(),
                "--signature" => opts.signature = value(),
                _ => positional.push(arg.clone()),
            }
            i += 1;
        }

        let mut positional = positional.into_iter();
        opts.command = positional.next();
        opts.target = positional.next();
        opts
    }
}

fn print_usage() {
    println!(
        "walletgate - wallet sign-in relay

Usage:
  walletgate session <url-or-query>
  walletgate terms
  walletgate relay --session <id> --address <addr> --key <pubkey> --signature <sig>
  walletgate config

Options:
  --json        Output raw JSON
  --pretty      Pretty-print JSON
  -h, --help    Show this help
  -V, --version Show version

Environment:
  WALLETGATE_TERMS_URL     Terms & Conditions endpoint
  WALLETGATE_BACKEND_URL   Authorization relay endpoint
  WALLETGATE_LOG_JSON=1    JSON log lines on stderr"
    );
}

fn cmd_session(opts: &ParsedArgs) -> Result<Value> {
    let input = opts.target.as_deref().ok_or_else(|| anyhow!("session needs a URL or query string"))?;
    let id = resolve_session_id(input).ok_or_else(|| anyhow!("no 'session_id' found in {input}"))?;
    Ok(json!({"sessionId": id.as_str()}))
}

fn cmd_config() -> Result<Value> {
    let config = GateConfig::from_env()?;
    Ok(json!({"termsUrl": config.terms_url, "backendUrl": config.backend_url}))
}

async fn cmd_terms() -> Result<Value> {
    let config = GateConfig::from_env()?;
    let response = ReqwestClient::new().get_text(&config.terms_url).await?;
    if !response.is_success() {
        bail!(AuthorizeError::TermsUnavailable);
    }
    Ok(json!({
        "status": response.status,
        "text": response.body,
        "hex": hex::encode(response.body.as_bytes()),
    }))
}

async fn cmd_relay(opts: &ParsedArgs) -> Result<Value> {
    let config = GateConfig::from_env()?;
    let session = opts
        .session
        .clone()
        .and_then(SessionId::new)
        .ok_or_else(|| anyhow!("--session is required"))?;
    let address = opts.address.clone().ok_or_else(|| anyhow!("--address is required"))?;
    let signed = DataSignature {
        key: opts.key.clone().ok_or_else(|| anyhow!("--key is required"))?,
        signature: opts.signature.clone().ok_or_else(|| anyhow!("--signature is required"))?,
    };

    let body = serde_json::to_value(AuthorizePayload::new(&session, address, signed))?;
    debug!(backend = %config.backend_url, "relaying credentials");

    let response = ReqwestClient::new().post_json(&config.backend_url, &body).await?;
    if !response.is_success() {
        bail!(AuthorizeError::Backend { status: response.status, body: response.body });
    }
    Ok(json!({"success": true, "status": response.status, "payload": body}))
}
