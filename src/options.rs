use crate::commands::Command;
use clap::Parser;

#[derive(Debug, Parser)]
#[clap(about = env!("CARGO_PKG_DESCRIPTION"))]
pub struct Options {
    #[command(flatten)]
    pub global: Global,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Parser)]
pub struct Global {
    /// Sets verbosity level. Can be specified multiple times to increase the verbosity
    /// of this program.
    #[clap(long = "verbose", short, global(true), action(clap::ArgAction::Count))]
    pub verbosity: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    // A parse failure means clap bails with a usage message before any
    // command runs, so no request is sent and no file is touched.

    #[test]
    fn get_image_requires_url_and_output() {
        assert!(Options::try_parse_from(["bluumm-cli", "get-image"]).is_err());
        assert!(Options::try_parse_from(["bluumm-cli", "get-image", "http://h/1"]).is_err());
        assert!(Options::try_parse_from(["bluumm-cli", "get-image", "http://h/1", "out.png"]).is_ok());
        assert!(Options::try_parse_from([
            "bluumm-cli",
            "get-image",
            "http://h/1",
            "out.png",
            "extra"
        ])
        .is_err());
    }

    #[test]
    fn get_image_by_id_requires_host_and_numeric_id() {
        assert!(Options::try_parse_from(["bluumm-cli", "get-image-by-id", "http://h"]).is_err());
        assert!(
            Options::try_parse_from(["bluumm-cli", "get-image-by-id", "http://h", "42"]).is_ok()
        );
        assert!(
            Options::try_parse_from(["bluumm-cli", "get-image-by-id", "http://h", "rose"]).is_err()
        );
    }

    #[test]
    fn start_worker_requires_url_image_and_hashtag() {
        assert!(Options::try_parse_from(["bluumm-cli", "start-worker", "http://h", "in.png"])
            .is_err());
        assert!(Options::try_parse_from([
            "bluumm-cli",
            "start-worker",
            "http://h",
            "in.png",
            "sunset"
        ])
        .is_ok());
    }

    #[test]
    fn start_worker_accepts_piece_size() {
        assert!(Options::try_parse_from([
            "bluumm-cli",
            "start-worker",
            "http://h",
            "in.png",
            "sunset",
            "--piece-size",
            "50x50"
        ])
        .is_ok());
        assert!(Options::try_parse_from([
            "bluumm-cli",
            "start-worker",
            "http://h",
            "in.png",
            "sunset",
            "--piece-size",
            "50"
        ])
        .is_err());
    }

    #[test]
    fn legacy_start_worker_has_no_piece_size() {
        assert!(Options::try_parse_from([
            "bluumm-cli",
            "start-worker-legacy",
            "http://h",
            "in.png",
            "sunset"
        ])
        .is_ok());
        assert!(Options::try_parse_from([
            "bluumm-cli",
            "start-worker-legacy",
            "http://h",
            "in.png",
            "sunset",
            "--piece-size",
            "50x50"
        ])
        .is_err());
    }

    #[test]
    fn stop_worker_requires_host_and_id() {
        assert!(Options::try_parse_from(["bluumm-cli", "stop-worker", "http://h"]).is_err());
        assert!(Options::try_parse_from(["bluumm-cli", "stop-worker", "http://h", "7"]).is_ok());
    }

    #[test]
    fn add_post_requires_user_name_and_hashtag_flags() {
        assert!(
            Options::try_parse_from(["bluumm-cli", "add-post", "http://h", "7", "in.png"]).is_err()
        );
        assert!(Options::try_parse_from([
            "bluumm-cli",
            "add-post",
            "http://h",
            "7",
            "in.png",
            "--user-name",
            "ana",
            "--hashtag",
            "sunset"
        ])
        .is_ok());
    }

    #[test]
    fn verbosity_accumulates() {
        let options =
            Options::try_parse_from(["bluumm-cli", "-v", "-v", "stop-worker", "http://h", "7"])
                .unwrap();
        assert_eq!(options.global.verbosity, 2);
    }
}
