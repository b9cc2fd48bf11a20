#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pass_slip::run().await
}
