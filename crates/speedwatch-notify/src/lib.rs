//! Notification delivery backends.
//!
//! One implementation per channel; the simulation holds notifiers as
//! trait objects so a real push backend could replace the console ones
//! without touching the monitor logic.

use std::sync::{Arc, Mutex};

use speedwatch_types::{NotificationChannel, NotifyError};

/// A notification delivery backend
pub trait Notifier {
    /// The channel this backend serves
    fn channel(&self) -> NotificationChannel;

    /// Deliver one message
    fn deliver(&self, message: &str) -> Result<(), NotifyError>;
}

/// Console-backed Firebase channel
pub struct FirebaseNotifier;

impl Notifier for FirebaseNotifier {
    fn channel(&self) -> NotificationChannel {
        NotificationChannel::Firebase
    }

    fn deliver(&self, message: &str) -> Result<(), NotifyError> {
        println!("[Firebase Notification] {message}");
        Ok(())
    }
}

/// Console-backed AWS channel
pub struct AwsNotifier;

impl Notifier for AwsNotifier {
    fn channel(&self) -> NotificationChannel {
        NotificationChannel::Aws
    }

    fn deliver(&self, message: &str) -> Result<(), NotifyError> {
        println!("[AWS Notification] {message}");
        Ok(())
    }
}

/// Console notifier for the given channel
pub fn notifier_for(channel: NotificationChannel) -> Box<dyn Notifier> {
    match channel {
        NotificationChannel::Firebase => Box::new(FirebaseNotifier),
        NotificationChannel::Aws => Box::new(AwsNotifier),
    }
}

/// Test backend that records delivered messages instead of printing.
///
/// Clone the handle returned by [`CollectingNotifier::messages`] before
/// handing the notifier off; delivered lines include the channel prefix
/// so assertions match the console output byte for byte.
pub struct CollectingNotifier {
    channel: NotificationChannel,
    delivered: Arc<Mutex<Vec<String>>>,
}

impl CollectingNotifier {
    pub fn new(channel: NotificationChannel) -> Self {
        Self {
            channel,
            delivered: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Shared handle to the delivered messages
    pub fn messages(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.delivered)
    }
}

impl Notifier for CollectingNotifier {
    fn channel(&self) -> NotificationChannel {
        self.channel
    }

    fn deliver(&self, message: &str) -> Result<(), NotifyError> {
        let line = format!("[{} Notification] {message}", self.channel.label());
        self.delivered
            .lock()
            .map_err(|e| NotifyError::DeliveryFailed(e.to_string()))?
            .push(line);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_matches_channel() {
        for channel in [NotificationChannel::Firebase, NotificationChannel::Aws] {
            assert_eq!(notifier_for(channel).channel(), channel);
        }
    }

    #[test]
    fn test_console_delivery_cannot_fail() {
        assert!(FirebaseNotifier.deliver("hello").is_ok());
        assert!(AwsNotifier.deliver("hello").is_ok());
    }

    #[test]
    fn test_collector_records_prefixed_lines() {
        let collector = CollectingNotifier::new(NotificationChannel::Firebase);
        let messages = collector.messages();
        collector
            .deliver("Car ID: 101 exceeded speed limit of 80 km/h.")
            .unwrap();
        let delivered = messages.lock().unwrap();
        assert_eq!(
            delivered.as_slice(),
            ["[Firebase Notification] Car ID: 101 exceeded speed limit of 80 km/h."]
        );
    }

    #[test]
    fn test_collector_aws_prefix() {
        let collector = CollectingNotifier::new(NotificationChannel::Aws);
        let messages = collector.messages();
        collector.deliver("ping").unwrap();
        assert_eq!(messages.lock().unwrap()[0], "[AWS Notification] ping");
    }
}
