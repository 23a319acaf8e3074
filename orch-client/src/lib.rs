// SPDX-FileCopyrightText: 2026 sdwan-status contributors
//
// SPDX-License-Identifier: MPL-2.0

//! Blocking client for the SD-WAN orchestrator REST API.
//!
//! [`Orchestrator`] is an authenticated session handle. Credential sessions
//! ride on the cookie the orchestrator sets at login and are closed with
//! [`Orchestrator::logout`]; API-key sessions attach the key as a request
//! header instead and need no explicit teardown.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, Response};
use tracing::debug;

pub mod conf;
mod error;
mod types;

pub use error::{ApiError, Error};
pub use types::{Alarm, Appliance, ServerInfo};

const API_KEY_HEADER: &str = "X-Auth-Token";

/// Session handle to an orchestrator.
pub struct Orchestrator {
    client: Client,
    base_url: String,
    /// API key sent with every request in place of a session cookie.
    pub api_key: Option<String>,
}

impl Orchestrator {
    /// Build a handle targeting `url`, which may be a bare host name or a
    /// full `http(s)://` URL. No network traffic until the first call.
    pub fn new(url: &str, verify_ssl: bool) -> Result<Self, Error> {
        let mut builder = Client::builder()
            .cookie_store(true)
            .danger_accept_invalid_certs(!verify_ssl);
        if let Some(secs) = conf::orch_conf().request_timeout {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self {
            client: builder.build()?,
            base_url: base_url(url),
            api_key: None,
        })
    }

    /// Open a credential session. The session cookie from the response is
    /// retained by the handle and sent on subsequent calls.
    pub fn login(&self, user: &str, password: &str) -> Result<(), Error> {
        #[derive(serde::Serialize)]
        struct LoginRequest<'a> {
            user: &'a str,
            password: &'a str,
            token: bool,
        }

        debug!(user, "logging in");
        let resp = self
            .client
            .post(self.url("authentication/login"))
            .json(&LoginRequest {
                user,
                password,
                token: false,
            })
            .send()?;
        err_from_response("authentication/login", resp)?;
        Ok(())
    }

    /// Close a credential session. Not meaningful for API-key sessions.
    pub fn logout(&self) -> Result<(), Error> {
        self.get("authentication/logout")?;
        Ok(())
    }

    pub fn get_orchestrator_server_info(&self) -> Result<ServerInfo, Error> {
        Ok(self.get("gmsserver/info")?.json()?)
    }

    /// Full appliance inventory, in the orchestrator's order.
    pub fn get_appliances(&self) -> Result<Vec<Appliance>, Error> {
        Ok(self.get("appliance")?.json()?)
    }

    /// Active alarms for the appliance identified by `ne_pk`.
    pub fn get_appliance_alarms(&self, ne_pk: &str) -> Result<Vec<Alarm>, Error> {
        Ok(self.get(&format!("alarm/appliance/{}", ne_pk))?.json()?)
    }

    fn get(&self, endpoint: &str) -> Result<Response, Error> {
        debug!(endpoint, "GET");
        let resp = self.auth(self.client.get(self.url(endpoint))).send()?;
        err_from_response(endpoint, resp)
    }

    fn auth(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => req.header(API_KEY_HEADER, key),
            None => req,
        }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }
}

fn base_url(url: &str) -> String {
    let url = url.trim_end_matches('/');
    let base_path = conf::orch_conf().rest_base_path();
    if url.starts_with("http://") || url.starts_with("https://") {
        format!("{}{}", url, base_path)
    } else {
        format!("https://{}{}", url, base_path)
    }
}

fn err_from_response(endpoint: &str, resp: Response) -> Result<Response, Error> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    Err(Error::Api(ApiError {
        endpoint: endpoint.to_string(),
        code: status.as_u16(),
        canonical_reason: status.canonical_reason().map(str::to_string),
        message: resp.text().ok().filter(|body| !body.is_empty()),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_accepts_bare_host() {
        assert_eq!(
            base_url("orchestrator.example.com"),
            "https://orchestrator.example.com/gms/rest"
        );
    }

    #[test]
    fn base_url_keeps_explicit_scheme() {
        assert_eq!(
            base_url("http://10.1.1.1/"),
            "http://10.1.1.1/gms/rest"
        );
        assert_eq!(
            base_url("https://orchestrator.example.com"),
            "https://orchestrator.example.com/gms/rest"
        );
    }

    #[test]
    fn api_key_defaults_to_none() {
        let orch = Orchestrator::new("orchestrator.example.com", true).unwrap();
        assert!(orch.api_key.is_none());
    }
}
