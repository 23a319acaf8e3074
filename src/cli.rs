// SPDX-FileCopyrightText: 2026 sdwan-status contributors
//
// SPDX-License-Identifier: GPL-3.0-only

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use console::Term;

use crate::connect::{self, Auth};
use crate::{alarms, appliances, export, info};

/// Check SD-WAN EdgeConnect appliance status via the orchestrator REST API.
#[derive(Debug, Parser)]
#[command(name = "sdwan-status", version, about)]
pub struct Args {
    /// Orchestrator URL (e.g. orchestrator.example.com)
    #[arg(long, env = "SDWAN_ORCH_URL")]
    pub url: String,

    /// Admin username
    #[arg(long)]
    pub username: Option<String>,

    /// Admin password (prompted for when omitted)
    #[arg(long)]
    pub password: Option<String>,

    /// API key for authentication (alternative to username/password)
    #[arg(long, env = "SDWAN_ORCH_API_KEY")]
    pub api_key: Option<String>,

    /// Show detailed appliance information
    #[arg(long)]
    pub detailed: bool,

    /// Disable SSL certificate verification
    #[arg(long)]
    pub no_verify_ssl: bool,

    /// Export appliance data to a JSON file
    #[arg(long, value_name = "FILE")]
    pub export: Option<PathBuf>,

    /// Check for active alarms on appliances
    #[arg(long)]
    pub check_alarms: bool,
}

/// Run the fixed connect → info → appliances → alarms → export sequence.
/// Fetch-level failures inside the steps degrade to empty results; anything
/// returned as `Err` here is fatal and maps to exit code 1.
pub fn run(args: Args) -> Result<()> {
    let auth = resolve_auth(&args)?;

    let orch = connect::connect(&args.url, &auth, !args.no_verify_ssl)?;

    info::fetch(&orch);

    let appliances = appliances::fetch(&orch, args.detailed);

    if args.check_alarms {
        for appliance in &appliances {
            let ne_pk = appliance.ne_pk.as_deref().unwrap_or_default();
            if !ne_pk.is_empty() {
                alarms::fetch(&orch, ne_pk);
                println!();
            }
        }
    }

    if let Some(path) = &args.export {
        export::to_json(&appliances, path);
    }

    if let Auth::Credentials { .. } = auth {
        orch.logout()?;
        println!("\n✓ Logged out from Orchestrator");
    }

    Ok(())
}

/// Pick the auth method before any network activity. An API key wins over
/// credentials; neither is a usage error.
fn resolve_auth(args: &Args) -> Result<Auth> {
    if let Some(key) = &args.api_key {
        return Ok(Auth::ApiKey(key.clone()));
    }
    match &args.username {
        Some(username) => {
            let password = match &args.password {
                Some(password) => password.clone(),
                None => prompt_password()?,
            };
            Ok(Auth::Credentials {
                username: username.clone(),
                password,
            })
        }
        None => Args::command()
            .error(
                ErrorKind::MissingRequiredArgument,
                "either --username or --api-key must be provided",
            )
            .exit(),
    }
}

fn prompt_password() -> io::Result<String> {
    let term = Term::stderr();
    term.write_str("Enter password: ")?;
    term.read_secure_line()
}
