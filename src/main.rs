#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    creative_portfolio::server::run().await
}

#[cfg(target_arch = "wasm32")]
fn main() {
    creative_portfolio::frontend::run();
}
