#[tokio::main]
async fn main() {
    if let Err(e) = league_site::start_server().await {
        tracing::error!("Failed to start server: {}", e);
        std::process::exit(1);
    }
}
