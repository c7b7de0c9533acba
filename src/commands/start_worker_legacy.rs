use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use fs_err as fs;
use log::{debug, info};

use crate::bluumm_api::{encode_image, BluummApiClient};
use crate::options::Global;

#[derive(Debug, Args)]
pub struct StartWorkerLegacyOptions {
    /// The URL of the start-worker endpoint.
    pub url: String,

    /// The path to the image the mosaic will be generated from.
    pub path: PathBuf,

    /// The hashtag the service should collect piece images from.
    pub hashtag: String,
}

pub fn start_worker_legacy(_: Global, options: StartWorkerLegacyOptions) -> Result<()> {
    info!("Reading image file {}", options.path.display());
    let image_data = fs::read(&options.path)?;

    let origin_img = encode_image(&image_data);
    debug!("Encoded image into base64 ({} bytes)", origin_img.len());

    let client = BluummApiClient::new()?;
    let status = client.start_worker_legacy(&options.url, &origin_img, &options.hashtag)?;

    // The superseded uploader never reported anything but the status.
    info!("Response: {}", status);

    Ok(())
}
