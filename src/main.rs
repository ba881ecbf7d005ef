#[tokio::main]
async fn main() -> anyhow::Result<()> {
    bloglist::cli::run().await
}
