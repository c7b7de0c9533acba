use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use fs_err as fs;
use log::{debug, info};

use crate::bluumm_api::BluummApiClient;
use crate::options::Global;

#[derive(Debug, Args)]
pub struct GetImageOptions {
    /// The URL to fetch the mosaic art document from.
    pub url: String,

    /// The path to write the decoded image to.
    pub output: PathBuf,
}

pub fn get_image(_: Global, options: GetImageOptions) -> Result<()> {
    let client = BluummApiClient::new()?;

    let art = client.get_art(&options.url)?;

    if !art.piece_posts.is_empty() {
        debug!("mosaic is stitched from {} post(s)", art.piece_posts.len());
    }

    info!("Writing image into {}", options.output.display());
    fs::write(&options.output, art.image)?;

    Ok(())
}
