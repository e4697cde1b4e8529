use plotview::client::PlotClient;
use plotview::config::Config;
use plotview::viewer;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;
use std::{env, process, thread};

use tracing::{error, info};
use tracing_subscriber;

const USAGE: &str = "usage: ./plotview [config.toml]";

fn get_args() -> Option<PathBuf> {
    let args: Vec<String> = env::args().collect();
    match args.len() - 1 {
        0 => None,
        1 => Some(PathBuf::from(&args[1])),
        _ => {
            println!("{USAGE}");
            process::exit(1);
        }
    }
}

#[show_image::main]
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config_path = get_args();
    let config = match Config::load(config_path.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            error!("failed to load configuration: {err}");
            show_image::exit(1);
        }
    };
    info!(
        "requesting plot for {} {} from {}",
        config.sido, config.sigungu, config.server_url
    );

    // Fetch on a background thread so the GUI event loop never blocks on
    // the network. The HTTP client enforces its own timeout; the channel
    // wait is one second longer so a wedged transport still terminates.
    let client = PlotClient::new(config.clone())?;
    let wait = Duration::from_secs(config.request_timeout_secs + 1);
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let _ = tx.send(client.fetch_plot());
    });

    let image = match rx.recv_timeout(wait) {
        Ok(Ok(image)) => image,
        Ok(Err(err)) => {
            error!("failed to fetch plot: {err}");
            show_image::exit(1);
        }
        Err(_) => {
            error!(
                "no response from the plot server after {}s",
                wait.as_secs()
            );
            show_image::exit(1);
        }
    };

    viewer::display(image)
}
