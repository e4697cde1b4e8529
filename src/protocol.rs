//! Typed request and response structures for the plot service. The service
//! speaks JSON: a region pair goes out, and either a base64 image or an
//! error message comes back.

use crate::error::FetchError;
use base64::{engine::general_purpose, Engine as _};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// The request body for `generate_plot`
#[derive(Debug, Clone, Serialize)]
pub struct PlotRequest {
    pub sido: String,
    pub sigungu: String,
}

impl PlotRequest {
    pub fn new(sido: impl Into<String>, sigungu: impl Into<String>) -> Self {
        PlotRequest {
            sido: sido.into(),
            sigungu: sigungu.into(),
        }
    }
}

/// A base 64 image as carried on the wire
#[derive(Clone, Deserialize)]
pub struct B64Image {
    pub image: String,
}

impl Debug for B64Image {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "B64Image {{ image: <{} bytes> }}", self.image.len())
    }
}

impl B64Image {
    /// Decode the base64 payload into raw image bytes
    pub fn decode(&self) -> Result<Vec<u8>, base64::DecodeError> {
        general_purpose::STANDARD.decode(&self.image)
    }
}

/// The raw JSON shape the service answers with. Success carries `image`;
/// failure carries `message`, or `error` when the server hit an internal
/// exception.
#[derive(Debug, Deserialize)]
struct RawReply {
    success: bool,
    image: Option<String>,
    message: Option<String>,
    error: Option<String>,
}

/// A parsed service reply
#[derive(Debug)]
pub enum PlotReply {
    Plot(B64Image),
    Failure(String),
}

impl PlotReply {
    /// Parse a response body. A `success: true` reply without an image field
    /// is a malformed payload, not a panic or a garbage substring.
    pub fn parse(body: &str) -> Result<Self, FetchError> {
        let raw: RawReply = serde_json::from_str(body)?;
        if raw.success {
            match raw.image {
                Some(image) => Ok(PlotReply::Plot(B64Image { image })),
                None => Err(FetchError::MissingImage),
            }
        } else {
            let message = raw
                .message
                .or(raw.error)
                .unwrap_or_else(|| "unspecified server error".into());
            Ok(PlotReply::Failure(message))
        }
    }
}
