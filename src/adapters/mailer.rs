use crate::domain::ports::Mailer;
use crate::utils::error::Result;

/// Writes the reminder to the log instead of sending mail.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogMailer;

impl Mailer for LogMailer {
    fn send_reminder(&self, email: &str) -> Result<()> {
        tracing::info!("📧 Sending password reminder to {}", email);
        Ok(())
    }
}
