#[tokio::main]
async fn main() {
    forklock_backend::run().await;
}
