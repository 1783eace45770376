#[tokio::main]
async fn main() -> anyhow::Result<()> {
    powertips::run().await
}
