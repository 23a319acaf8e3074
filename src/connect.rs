// SPDX-FileCopyrightText: 2026 sdwan-status contributors
//
// SPDX-License-Identifier: GPL-3.0-only

use anyhow::Result;
use orch_client::Orchestrator;

/// Exactly one auth method, resolved by the caller before connecting.
pub enum Auth {
    ApiKey(String),
    Credentials { username: String, password: String },
}

/// Establish an authenticated session. An API key is attached to the handle
/// without a network round trip; credentials perform a login call whose
/// failure aborts the program.
pub fn connect(url: &str, auth: &Auth, verify_ssl: bool) -> Result<Orchestrator> {
    println!("Connecting to Orchestrator: {}", url);

    let mut orch = Orchestrator::new(url, verify_ssl)?;

    match auth {
        Auth::ApiKey(key) => {
            println!("Authenticating with API key...");
            orch.api_key = Some(key.clone());
        }
        Auth::Credentials { username, password } => {
            println!("Logging in as user: {}", username);
            orch.login(username, password)?;
        }
    }

    println!("✓ Successfully connected to Orchestrator\n");
    Ok(orch)
}
