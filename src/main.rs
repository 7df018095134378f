#[tokio::main]
async fn main() {
    if let Err(e) = season_tracker_be::start_server().await {
        tracing::error!("Season tracker server stopped: {}", e);
        std::process::exit(1);
    }
}
