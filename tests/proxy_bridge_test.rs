use async_trait::async_trait;
use pattern_recipe::bridge::{MsgSender, Notification, ServerNotification};
use pattern_recipe::proxy::{MetricsCollector, MetricsProxy};
use std::sync::{Arc, Mutex};

/// Test double standing in for a real delivery channel.
#[derive(Clone, Default)]
struct RecordingSender {
    sent: Arc<Mutex<Vec<String>>>,
}

impl RecordingSender {
    fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MsgSender for RecordingSender {
    async fn send(&self, message: &str) {
        self.sent.lock().unwrap().push(message.to_string());
    }
}

/// Real collector, proxied sender plugged into the bridge.
/// Every notification must reach the sender and be timed exactly once.
#[tokio::test]
async fn test_proxied_sender_behind_notification() {
    let (collector, metrics) = MetricsCollector::new(16);
    let collector_handle = tokio::spawn(collector.run());

    let sender = RecordingSender::default();
    let notification = ServerNotification::new(MetricsProxy::new(sender.clone(), metrics.clone()));

    notification.notify("replica lagging").await;
    notification.notify("replica recovered").await;

    assert_eq!(sender.sent(), vec!["replica lagging", "replica recovered"]);

    let snapshot = metrics.snapshot().await.unwrap();
    let stats = snapshot.get("RecordingSender:send").expect("send not recorded");
    assert_eq!(stats.calls, 2);
    assert!(stats.max <= stats.total);

    // Dropping every client lets the collector drain and exit.
    drop(notification);
    drop(metrics);
    collector_handle.await.unwrap();
}

/// Many tasks sharing one proxied sender; the collector sees every call.
#[tokio::test]
async fn test_concurrent_proxied_sends() {
    let (collector, metrics) = MetricsCollector::new(128);
    tokio::spawn(collector.run());

    let sender = RecordingSender::default();
    let proxy = Arc::new(MetricsProxy::new(sender.clone(), metrics.clone()));

    let mut handles = vec![];
    for i in 0..20 {
        let proxy = proxy.clone();
        handles.push(tokio::spawn(async move {
            proxy.send(&format!("message {i}")).await;
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(sender.sent().len(), 20);
    let snapshot = metrics.snapshot().await.unwrap();
    assert_eq!(snapshot.get("RecordingSender:send").unwrap().calls, 20);
}
