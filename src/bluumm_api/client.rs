use log::debug;
use reqwest::{
    blocking::{Client, Response},
    StatusCode,
};

use super::{
    decode_image, legacy_image_repr, AddPostRequest, BluummApiError, MosaicArt, MosaicArtResponse,
    StartWorkerRequest,
};

/// Client for the handful of HTTP endpoints the mosaic service exposes. Every
/// method performs exactly one request; nothing is retried.
pub struct BluummApiClient {
    client: Client,
}

impl BluummApiClient {
    pub fn new() -> Result<Self, BluummApiError> {
        // Requests run without a timeout. Rendering a mosaic can take a
        // while, so a stalled server stalls the command.
        let client = Client::builder().timeout(None).build()?;

        Ok(Self { client })
    }

    /// Fetch a finished mosaic art document and decode the image out of it.
    pub fn get_art(&self, url: &str) -> Result<MosaicArt, BluummApiError> {
        debug!("GET {}", url);

        let response = self.client.get(url).send()?;

        art_from_response(response)
    }

    /// Fetch the mosaic art for a worker id. The endpoint is addressed as
    /// `<host>/<id>` and answers to an empty-body POST.
    pub fn get_art_by_id(&self, host: &str, id: u64) -> Result<MosaicArt, BluummApiError> {
        let url = format!("{}/{}", host, id);
        debug!("POST {}", url);

        let response = self.client.post(&url).send()?;

        art_from_response(response)
    }

    /// Start a mosaic worker, returning the id the service assigned to it.
    pub fn start_worker(
        &self,
        url: &str,
        request: &StartWorkerRequest,
    ) -> Result<u64, BluummApiError> {
        debug!("POST {}", url);

        let response = self.client.post(url).json(request).send()?;

        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            return Err(BluummApiError::ResponseError { status, body });
        }

        let worker_id = body.trim().parse()?;
        Ok(worker_id)
    }

    /// Start a mosaic worker the way the superseded uploader did: the
    /// `origin_img` value carries byte-string quoting the service cannot
    /// decode, and the JSON text is shipped without a content type. The
    /// response is not inspected beyond its status.
    pub fn start_worker_legacy(
        &self,
        url: &str,
        origin_img: &str,
        hashtag: &str,
    ) -> Result<StatusCode, BluummApiError> {
        debug!("POST {}", url);

        let payload = serde_json::json!({
            "origin_img": legacy_image_repr(origin_img),
            "hashtags": [hashtag],
        });

        let response = self.client.post(url).body(payload.to_string()).send()?;

        Ok(response.status())
    }

    /// Stop a running worker. Returns the service's confirmation line.
    pub fn stop_worker(&self, host: &str, id: u64) -> Result<String, BluummApiError> {
        let url = format!("{}/worker/{}", host, id);
        debug!("DELETE {}", url);

        let response = self.client.delete(&url).send()?;

        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            return Err(BluummApiError::ResponseError { status, body });
        }

        Ok(body)
    }

    /// Attach a post image to a running worker as an extra mosaic piece.
    pub fn add_post(
        &self,
        host: &str,
        worker_id: u64,
        request: &AddPostRequest,
    ) -> Result<(), BluummApiError> {
        let url = format!("{}/worker/{}/bluumm_post", host, worker_id);
        debug!("POST {}", url);

        let response = self.client.post(&url).json(request).send()?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text()?;
            return Err(BluummApiError::ResponseError { status, body });
        }

        Ok(())
    }
}

fn art_from_response(response: Response) -> Result<MosaicArt, BluummApiError> {
    let status = response.status();
    let body = response.text()?;

    // Some errors are reported through HTTP status codes, handled here.
    if !status.is_success() {
        return Err(BluummApiError::ResponseError { status, body });
    }

    parse_art(&body)
}

fn parse_art(body: &str) -> Result<MosaicArt, BluummApiError> {
    let response: MosaicArtResponse = match serde_json::from_str(body) {
        Ok(response) => response,
        Err(source) => {
            return Err(BluummApiError::BadResponseJson {
                body: body.to_owned(),
                source,
            })
        }
    };

    let image = decode_image(&response.mosaic_art)?;

    Ok(MosaicArt {
        image,
        piece_posts: response.piece_posts,
        insta_hashtags: response.insta_hashtags,
    })
}
