// SPDX-FileCopyrightText: 2026 sdwan-status contributors
//
// SPDX-License-Identifier: MPL-2.0

use once_cell::sync::Lazy;
use std::fs;

const DEFAULT_REST_BASE_PATH: &str = "/gms/rest";
const CONF_PATH: &str = "/etc/sdwan-status.conf";

#[derive(Default, serde::Deserialize)]
pub struct OrchConf {
    rest_base_path: Option<String>,
    /// Per-request timeout in seconds; transport default when unset.
    pub request_timeout: Option<u64>,
}

impl OrchConf {
    pub fn rest_base_path(&self) -> &str {
        self.rest_base_path
            .as_deref()
            .unwrap_or(DEFAULT_REST_BASE_PATH)
    }
}

pub fn orch_conf() -> &'static OrchConf {
    static CONF: Lazy<OrchConf> = Lazy::new(|| {
        let bytes = match fs::read(CONF_PATH) {
            Ok(bytes) => bytes,
            Err(_) => {
                return OrchConf::default();
            }
        };
        toml::from_slice(&bytes).unwrap_or_else(|err| {
            eprintln!("Failed to parse `{}`: {}", CONF_PATH, err);
            OrchConf::default()
        })
    });
    &CONF
}
