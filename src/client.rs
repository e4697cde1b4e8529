//! The blocking HTTP client that asks the plot service for a rendered plot
//! and turns the reply into a decoded raster image.

use crate::config::Config;
use crate::error::FetchError;
use crate::protocol::{PlotReply, PlotRequest};
use image::DynamicImage;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, info};

/// One client per run: a single request, a single reply
pub struct PlotClient {
    http: reqwest::blocking::Client,
    config: Config,
}

impl PlotClient {
    pub fn new(config: Config) -> Result<Self, FetchError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(PlotClient { http, config })
    }

    /// POST the configured region pair and decode the returned plot.
    pub fn fetch_plot(&self) -> Result<DynamicImage, FetchError> {
        let request = PlotRequest::new(self.config.sido.clone(), self.config.sigungu.clone());
        let body = serde_json::to_string(&request)?;
        debug!("request body: {body}");

        let response = self
            .http
            .post(&self.config.server_url)
            .header(CONTENT_TYPE, "application/json; utf-8")
            .header(ACCEPT, "application/json")
            .body(body)
            .send()?;

        let status = response.status();
        let text = response.text()?;
        info!("plot server answered with status {status}");

        if status != StatusCode::OK {
            return Err(FetchError::Status { status, body: text });
        }

        match PlotReply::parse(&text)? {
            PlotReply::Plot(b64) => {
                let bytes = b64.decode()?;
                debug!("decoded {} image bytes", bytes.len());
                Ok(image::load_from_memory(&bytes)?)
            }
            PlotReply::Failure(message) => Err(FetchError::Server(message)),
        }
    }
}
