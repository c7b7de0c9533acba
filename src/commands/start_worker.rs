use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use fs_err as fs;
use image::GenericImageView;
use log::{debug, info};

use crate::bluumm_api::{encode_image, BluummApiClient, StartWorkerRequest};
use crate::options::Global;

#[derive(Debug, Args)]
pub struct StartWorkerOptions {
    /// The URL of the start-worker endpoint.
    pub url: String,

    /// The path to the image the mosaic will be generated from.
    pub path: PathBuf,

    /// The hashtag the service should collect piece images from.
    pub hashtag: String,

    /// The size of the mosaic pieces, in WxH format (e.g. 50x50). The service
    /// picks a default that matches the source image when omitted.
    #[clap(long, value_parser(clap::builder::ValueParser::new(parse_piece_size)))]
    pub piece_size: Option<(u32, u32)>,
}

fn parse_piece_size(value: &str) -> Result<(u32, u32)> {
    if let Some((width, height)) = value
        .split_once('x')
        .map(|(w, h)| (w.parse::<u32>(), h.parse::<u32>()))
    {
        Ok((width?, height?))
    } else {
        bail!("invalid dimensions passed - please pass your dimensions in the WxH format (e.g. 30x30, 50x50, etc)")
    }
}

pub fn start_worker(_: Global, options: StartWorkerOptions) -> Result<()> {
    info!("Reading image file {}", options.path.display());
    let image_data = fs::read(&options.path)?;

    log_dimensions(&image_data);

    let request = StartWorkerRequest {
        origin_img: encode_image(&image_data),
        hashtags: vec![options.hashtag],
        piece_size: options.piece_size,
    };
    debug!("Encoded image into base64 ({} bytes)", request.origin_img.len());

    let client = BluummApiClient::new()?;
    let worker_id = client.start_worker(&options.url, &request)?;

    info!("Worker started successfully!");
    info!("Worker id: {}", worker_id);

    Ok(())
}

/// The service only renders a few fixed origin sizes, so the dimensions are
/// worth having in the log when an upload comes back rejected. The bytes are
/// sent untouched either way.
fn log_dimensions(image_data: &[u8]) {
    match image::load_from_memory(image_data) {
        Ok(img) => debug!("read image with dimensions {:?}", img.dimensions()),
        Err(err) => debug!("could not read image dimensions: {}", err),
    }
}
