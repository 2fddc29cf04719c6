use crate::snapshot::SnapshotClient;
use crate::state::DashboardState;
use astra::Server;
use log::{error, info};
use std::net::SocketAddr;
use std::sync::Arc;

mod domain;
mod errors;
mod responses;
mod router;
mod snapshot;
mod spreadsheets;
mod state;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let base_url = std::env::var("DATA_BASE_URL")
        .unwrap_or_else(|_| snapshot::DEFAULT_DATA_URL.to_string());

    let client = match SnapshotClient::new(&base_url) {
        Ok(client) => client,
        Err(e) => {
            error!("Snapshot client init failed: {e}");
            std::process::exit(1);
        }
    };

    // One load per process; the snapshots fully define the served state.
    let snapshots = match client.load_all() {
        Ok(snapshots) => snapshots,
        Err(e) => {
            error!("Snapshot load failed: {e}");
            std::process::exit(1);
        }
    };

    let state = Arc::new(DashboardState::new(snapshots));

    let addr: SocketAddr = "127.0.0.1:3000".parse().unwrap();
    info!("Starting dashboard at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    let result = server.serve(move |req, _info| match router::handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => responses::html_error_response(err),
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}
