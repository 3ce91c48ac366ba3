//! HTTP catalogue source.
//!
//! `GET {base_url}/programs` returning the catalogue as JSON. No auth.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::catalogue::payload::parse_programs;
use crate::catalogue::{ProgramSource, SourceError};
use crate::core::program::Program;

pub struct HttpSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SourceError::Config(e.to_string()))?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn programs_url(&self) -> String {
        format!("{}/programs", self.base_url)
    }
}

#[async_trait]
impl ProgramSource for HttpSource {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch_programs(&self) -> Result<Vec<Program>, SourceError> {
        let url = self.programs_url();
        info!("Fetching programs from {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        debug!("Catalogue response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Catalogue API error: {} - {}", status, err_body);
            return Err(SourceError::Api {
                status,
                message: err_body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;
        parse_programs(&body)
    }
}
