mod add_post;
mod get_image;
mod get_image_by_id;
mod start_worker;
mod start_worker_legacy;
mod stop_worker;

use clap::Subcommand;

pub use add_post::*;
pub use get_image::*;
pub use get_image_by_id::*;
pub use start_worker::*;
pub use start_worker_legacy::*;
pub use stop_worker::*;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch a finished mosaic art document from a URL and write the decoded
    /// image to a local file.
    GetImage(GetImageOptions),

    /// Fetch the mosaic art for a worker id and save it as `<id>.png` in the
    /// current directory.
    GetImageById(GetImageByIdOptions),

    /// Upload a source image and a hashtag to start a mosaic worker. Prints
    /// the id of the new worker on success.
    StartWorker(StartWorkerOptions),

    /// Upload a source image using the request shape of the superseded
    /// uploader. Kept for servers that still expect it; prefer start-worker.
    StartWorkerLegacy(StartWorkerLegacyOptions),

    /// Stop a running mosaic worker.
    StopWorker(StopWorkerOptions),

    /// Attach a post image to a running worker as an extra mosaic piece.
    AddPost(AddPostOptions),
}
