use std::time::Duration;

use crate::domain::{PaymentMethod, PaymentStatus};

/// Stand-in for a mobile wallet gateway.
///
/// Waits a fixed delay for effect and then always reports the payment as
/// settled. There is no failure branch and no retry.
#[derive(Debug, Clone)]
pub struct SimulatedGateway {
    delay: Duration,
}

impl SimulatedGateway {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub async fn settle(&self, method: PaymentMethod, amount: u64) -> PaymentStatus {
        tracing::info!(
            method = method.as_str(),
            amount,
            delay_ms = self.delay.as_millis() as u64,
            "Processing simulated payment"
        );
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        PaymentStatus::Paid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn settle_waits_then_succeeds() {
        let gateway = SimulatedGateway::new(Duration::from_secs(2));
        let start = tokio::time::Instant::now();
        let status = gateway.settle(PaymentMethod::Nagad, 1310).await;
        assert_eq!(status, PaymentStatus::Paid);
        assert!(start.elapsed() >= Duration::from_secs(2));
    }
}
