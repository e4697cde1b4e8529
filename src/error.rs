//! Failure taxonomy for the plot fetch path. Every way a fetch can go wrong
//! gets its own variant; `main` decides what to log and how to exit.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    /// Connection refused, DNS failure, or the request timed out
    #[error("transport error talking to the plot server: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-200 status
    #[error("plot server returned status {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// The server answered 200 but reported `success: false`
    #[error("plot server reported an error: {0}")]
    Server(String),

    /// The response body was not the JSON shape we expect
    #[error("malformed plot server response: {0}")]
    Payload(#[from] serde_json::Error),

    /// `success: true` but no image field in the payload
    #[error("plot server response is missing the image payload")]
    MissingImage,

    /// The image field was not valid base64
    #[error("invalid base64 image data: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The decoded bytes were not a readable raster image
    #[error("could not decode the plot image: {0}")]
    Image(#[from] image::ImageError),
}
