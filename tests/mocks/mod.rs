mod mock_notification_sender;

pub use mock_notification_sender::MockNotificationSender;
