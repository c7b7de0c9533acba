use anyhow::Result;
use clap::Args;
use log::info;

use crate::bluumm_api::BluummApiClient;
use crate::options::Global;

#[derive(Debug, Args)]
pub struct StopWorkerOptions {
    /// Base URL of the mosaic service.
    pub host: String,

    /// The id of the worker to stop.
    pub worker_id: u64,
}

pub fn stop_worker(_: Global, options: StopWorkerOptions) -> Result<()> {
    let client = BluummApiClient::new()?;

    let message = client.stop_worker(&options.host, options.worker_id)?;

    info!("{}", message);

    Ok(())
}
