// SPDX-FileCopyrightText: 2026 sdwan-status contributors
//
// SPDX-License-Identifier: GPL-3.0-only

pub mod alarms;
pub mod appliances;
pub mod cli;
pub mod connect;
pub mod export;
pub mod info;

/// Placeholder for fields the orchestrator omitted.
pub(crate) fn or_na(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or("N/A")
}
