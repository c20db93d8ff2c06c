//! Outbound notification port and its provider-backed implementation.

mod resend_sender;
mod traits;

pub use resend_sender::ResendSender;
pub use traits::NotificationSender;
