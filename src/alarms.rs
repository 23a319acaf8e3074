// SPDX-FileCopyrightText: 2026 sdwan-status contributors
//
// SPDX-License-Identifier: GPL-3.0-only

use orch_client::{Alarm, Orchestrator};

use crate::or_na;

/// Fetch and print active alarms for one appliance. Failures degrade to an
/// empty list.
pub fn fetch(orch: &Orchestrator, ne_pk: &str) -> Vec<Alarm> {
    println!("=== Alarms for Appliance {} ===", ne_pk);

    let alarms = match orch.get_appliance_alarms(ne_pk) {
        Ok(alarms) => alarms,
        Err(err) => {
            println!("Error retrieving alarms: {}", err);
            return Vec::new();
        }
    };

    if alarms.is_empty() {
        println!("No active alarms.");
        return alarms;
    }

    println!("Found {} active alarm(s)", alarms.len());
    for alarm in &alarms {
        println!(
            "  - {}: {}",
            or_na(&alarm.severity),
            or_na(&alarm.description)
        );
    }

    alarms
}
