use crate::core::{Connection, Mailer, ReminderOutcome, Result};
use crate::utils::validation::validate_email;

/// Looks a user up through whatever `Connection` it is handed and mails a
/// reminder when the lookup finds something.
pub struct PasswordReminder<C: Connection, M: Mailer> {
    connection: C,
    mailer: M,
}

impl<C: Connection, M: Mailer> PasswordReminder<C, M> {
    pub fn new(connection: C, mailer: M) -> Self {
        Self { connection, mailer }
    }

    pub fn send_reminder(&mut self, email: &str) -> Result<ReminderOutcome> {
        validate_email(email)?;

        self.connection.connect()?;
        let sql = format!(
            "SELECT * FROM users WHERE email = '{}'",
            email.replace('\'', "''")
        );
        let result = self.connection.query(&sql);
        // The connection is released even when the lookup fails.
        self.connection.disconnect();

        if result?.is_empty() {
            tracing::info!("No user found for {}", email);
            return Ok(ReminderOutcome::NoMatchingUser {
                email: email.to_string(),
            });
        }

        self.mailer.send_reminder(email)?;
        Ok(ReminderOutcome::Sent {
            email: email.to_string(),
        })
    }

    pub fn connection(&self) -> &C {
        &self.connection
    }

    pub fn into_parts(self) -> (C, M) {
        (self.connection, self.mailer)
    }
}
