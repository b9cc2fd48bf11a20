use std::time::Duration;

use async_trait::async_trait;

/// Pause between accepting a submission and rendering it.
#[async_trait]
pub trait SubmitDelay {
    async fn wait(&self);
}

/// Sleeps on the tokio timer.
#[derive(Debug, Clone, Copy)]
pub struct TokioDelay(pub Duration);

#[async_trait]
impl SubmitDelay for TokioDelay {
    async fn wait(&self) {
        tokio::time::sleep(self.0).await;
    }
}

/// Returns immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

#[async_trait]
impl SubmitDelay for NoDelay {
    async fn wait(&self) {}
}
