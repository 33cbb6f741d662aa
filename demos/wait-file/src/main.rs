#[macro_use]
extern crate log;

use clap::Parser;

use pollwait::Poller;
use std::fs;
use std::path::{Path, PathBuf};

/// Waits for a file to appear and prints its contents
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path of the file to wait for
    path: PathBuf,

    /// Time to wait in milliseconds before giving up
    #[clap(short, long, default_value_t = 10_000)]
    timeout: i64,

    /// Pause between two reads in milliseconds
    #[clap(short, long, default_value_t = 50)]
    interval: i64,

    /// Only accept the file once its contents contain this text
    #[clap(short, long)]
    contains: Option<String>,

    /// Print `<none>` instead of failing when the file never shows up
    #[clap(short, long)]
    safe: bool,
}

fn main() -> pollwait::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("RUST_LOG", "info")).init();

    let Args {
        path,
        timeout,
        interval,
        contains,
        safe,
    } = Args::parse();

    let poller = Poller::new(timeout, interval);

    info!(
        "waiting up to {}ms for {} (checking every {}ms)",
        poller.timeout(),
        path.display(),
        poller.interval()
    );

    let read = || read_file(&path);
    let accept = |content: &Option<String>| match (content, &contains) {
        (Some(content), Some(needle)) => content.contains(needle.as_str()),
        (Some(_), None) => true,
        (None, _) => false,
    };

    let content = if safe {
        poller.poll_safe_until(read, accept)
    } else {
        poller.poll_until(read, accept)?
    };

    match content {
        Some(content) => print!("{content}"),
        None => println!("<none>"),
    }

    Ok(())
}

fn read_file(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(err) => {
            trace!("{} not readable yet: {}", path.display(), err);
            None
        }
    }
}
