use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use fs_err as fs;
use log::{debug, info};

use crate::bluumm_api::{encode_image, AddPostRequest, BluummApiClient};
use crate::options::Global;

#[derive(Debug, Args)]
pub struct AddPostOptions {
    /// Base URL of the mosaic service.
    pub host: String,

    /// The id of the worker to attach the post to.
    pub worker_id: u64,

    /// The path to the post's image.
    pub path: PathBuf,

    /// The name of the user the post belongs to.
    #[clap(long)]
    pub user_name: String,

    /// The hashtag the post was published under.
    #[clap(long)]
    pub hashtag: String,
}

pub fn add_post(_: Global, options: AddPostOptions) -> Result<()> {
    info!("Reading image file {}", options.path.display());
    let image_data = fs::read(&options.path)?;

    let request = AddPostRequest {
        image: encode_image(&image_data),
        user_name: options.user_name,
        hashtag: options.hashtag,
    };
    debug!("Encoded image into base64 ({} bytes)", request.image.len());

    let client = BluummApiClient::new()?;
    client.add_post(&options.host, options.worker_id, &request)?;

    info!("Post accepted by worker {}", options.worker_id);

    Ok(())
}
