use anyhow::Result;
use clap::Args;
use fs_err as fs;
use log::info;

use crate::bluumm_api::BluummApiClient;
use crate::options::Global;

#[derive(Debug, Args)]
pub struct GetImageByIdOptions {
    /// Base URL of the mosaic service.
    pub host: String,

    /// The id of the worker whose mosaic art to fetch.
    pub img_id: u64,
}

pub fn get_image_by_id(_: Global, options: GetImageByIdOptions) -> Result<()> {
    let client = BluummApiClient::new()?;

    let art = client.get_art_by_id(&options.host, options.img_id)?;

    let output = format!("{}.png", options.img_id);
    info!("Writing image into {}", output);
    fs::write(&output, art.image)?;

    Ok(())
}
