// SPDX-FileCopyrightText: 2026 sdwan-status contributors
//
// SPDX-License-Identifier: GPL-3.0-only

use std::fs::File;
use std::path::Path;

use orch_client::Appliance;

/// Serialize the appliance list to `path` as pretty JSON. Failures are
/// reported on stdout and never change the exit code.
pub fn to_json(appliances: &[Appliance], path: &Path) {
    match write(appliances, path) {
        Ok(()) => println!("\n✓ Data exported to {}", path.display()),
        Err(err) => println!("Error exporting to JSON: {}", err),
    }
}

fn write(appliances: &[Appliance], path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, appliances)?;
    Ok(())
}
