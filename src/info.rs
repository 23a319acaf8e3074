// SPDX-FileCopyrightText: 2026 sdwan-status contributors
//
// SPDX-License-Identifier: GPL-3.0-only

use orch_client::{Orchestrator, ServerInfo};

use crate::or_na;

/// Fetch and print orchestrator server metadata. Failures degrade to `None`
/// and never abort the run.
pub fn fetch(orch: &Orchestrator) -> Option<ServerInfo> {
    match orch.get_orchestrator_server_info() {
        Ok(info) => {
            println!("=== Orchestrator Information ===");
            println!("Version: {}", or_na(&info.version));
            println!("Release Date: {}", or_na(&info.release_date));
            println!("Server Name: {}", or_na(&info.server_name));
            println!();
            Some(info)
        }
        Err(err) => {
            println!("Error getting orchestrator info: {}", err);
            None
        }
    }
}
