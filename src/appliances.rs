// SPDX-FileCopyrightText: 2026 sdwan-status contributors
//
// SPDX-License-Identifier: GPL-3.0-only

use orch_client::{Appliance, Orchestrator};

use crate::or_na;

/// Fetch the appliance inventory and print one status block per record, in
/// the orchestrator's order. Failures degrade to an empty list.
pub fn fetch(orch: &Orchestrator, detailed: bool) -> Vec<Appliance> {
    println!("=== Retrieving EdgeConnect Appliances ===");

    let appliances = match orch.get_appliances() {
        Ok(appliances) => appliances,
        Err(err) => {
            println!("Error retrieving appliances: {}", err);
            return Vec::new();
        }
    };

    if appliances.is_empty() {
        println!("No appliances found.");
        return appliances;
    }

    println!("Found {} appliance(s)\n", appliances.len());

    for (idx, appliance) in appliances.iter().enumerate() {
        println!("{}\n", status_block(idx, appliance, detailed));
    }

    appliances
}

fn status_block(idx: usize, appliance: &Appliance, detailed: bool) -> String {
    let mut lines = vec![
        format!("--- Appliance {} ---", idx + 1),
        format!("Hostname: {}", or_na(&appliance.host_name)),
        format!("NE ID: {}", or_na(&appliance.ne_pk)),
        format!("Model: {}", or_na(&appliance.model)),
        format!("Serial Number: {}", or_na(&appliance.serial)),
        format!("State: {}", or_na(&appliance.state)),
        format!("Reachability: {}", or_na(&appliance.reachability)),
        format!("Software Version: {}", or_na(&appliance.software_version)),
        format!("Site: {}", or_na(&appliance.site)),
        format!("Group: {}", or_na(&appliance.group)),
    ];

    if detailed {
        lines.push(format!("Platform: {}", or_na(&appliance.platform)));
        lines.push(format!("Deployment Mode: {}", or_na(&appliance.mode)));
        lines.push(format!("Management IP: {}", or_na(&appliance.management_ip)));
    }

    lines.join("\n")
}
