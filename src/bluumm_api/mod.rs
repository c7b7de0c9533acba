mod client;

pub use self::client::BluummApiClient;

#[cfg(test)]
pub(crate) use self::client::test_server;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Request body for the start-worker endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartWorkerRequest {
    /// Base64 encoded source image.
    pub origin_img: String,
    pub hashtags: Vec<String>,

    /// Piece dimensions the worker should cut the mosaic into. The service
    /// picks a default that matches the source image when this is omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub piece_size: Option<(u32, u32)>,
}

/// Request body for attaching a post to a running worker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddPostRequest {
    /// Base64 encoded post image.
    pub image: String,
    pub user_name: String,
    pub hashtag: String,
}

/// Internal representation of what the art endpoints return, before we've
/// decoded the image out of it. Only `mosaic_art` is guaranteed; the other
/// fields appeared in later service revisions.
#[derive(Debug, Deserialize)]
pub struct MosaicArtResponse {
    /// Base64 encoded image bytes.
    pub mosaic_art: String,

    #[serde(default)]
    pub piece_posts: Vec<PiecePost>,

    #[serde(default)]
    pub insta_hashtags: Vec<String>,
}

/// One source post the service stitched into the mosaic.
#[derive(Debug, Clone, Deserialize)]
pub struct PiecePost {
    pub post_id: String,
    pub user_name: String,
}

/// A fetched mosaic with its image decoded back into raw bytes.
#[derive(Debug)]
pub struct MosaicArt {
    pub image: Vec<u8>,
    pub piece_posts: Vec<PiecePost>,
    pub insta_hashtags: Vec<String>,
}

#[derive(Debug, Error)]
pub enum BluummApiError {
    #[error("Bluumm API HTTP error")]
    Http {
        #[from]
        source: reqwest::Error,
    },

    #[error("Bluumm API returned success, but had malformed JSON response: {body}")]
    BadResponseJson {
        body: String,
        source: serde_json::Error,
    },

    #[error("Bluumm API returned HTTP {status} with body: {body}")]
    ResponseError { status: StatusCode, body: String },

    #[error("mosaic art payload is not valid base64")]
    BadImageData {
        #[from]
        source: base64::DecodeError,
    },

    #[error("failed to parse worker id from start-worker response")]
    MalformedWorkerId {
        #[from]
        source: std::num::ParseIntError,
    },
}

/// Encode raw image bytes the way the service expects them in every request
/// and response body.
pub fn encode_image(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode an image field back into raw bytes.
pub fn decode_image(encoded: &str) -> Result<Vec<u8>, BluummApiError> {
    Ok(STANDARD.decode(encoded)?)
}

/// The `origin_img` value shipped by the superseded uploader: the encoded
/// text wrapped in byte-string quoting, which no base64 decoder accepts.
/// `start-worker-legacy` keeps sending this shape on purpose.
pub fn legacy_image_repr(encoded: &str) -> String {
    format!("b'{}'", encoded)
}
