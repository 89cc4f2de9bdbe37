use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One charged sale. Charges are stored in cents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleRecord {
    pub created_at: NaiveDateTime,
    pub charge_cents: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: u32,
    pub title: String,
    /// Minutes.
    pub duration: u32,
}

impl Lesson {
    pub fn new(id: u32, title: impl Into<String>, duration: u32) -> Self {
        Self {
            id,
            title: title.into(),
            duration,
        }
    }
}

#[derive(Clone)]
pub struct ConnectionSettings {
    pub host: String,
    pub username: String,
    pub password: String,
    pub database: String,
}

impl ConnectionSettings {
    pub fn new(
        host: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        database: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            username: username.into(),
            password: password.into(),
            database: database.into(),
        }
    }
}

// Password stays out of logs.
impl fmt::Debug for ConnectionSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionSettings")
            .field("host", &self.host)
            .field("username", &self.username)
            .field("password", &"***")
            .field("database", &self.database)
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connected,
}

/// Opaque token returned by a successful connect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionHandle(pub String);

impl fmt::Display for ConnectionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResult {
    pub backend: String,
    pub rows: Vec<String>,
}

impl QueryResult {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// What a captain's shift produced, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShiftLog {
    pub lines: Vec<String>,
}

impl ShiftLog {
    pub fn push(&mut self, line: impl Into<String>) {
        let line = line.into();
        tracing::debug!("{}", line);
        self.lines.push(line);
    }

    pub fn extend(&mut self, lines: Vec<String>) {
        for line in lines {
            self.push(line);
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReminderOutcome {
    Sent { email: String },
    NoMatchingUser { email: String },
}

/// Who is asking. `None` is an anonymous caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub user: Option<String>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self { user: None }
    }

    pub fn authenticated(user: impl Into<String>) -> Self {
        Self {
            user: Some(user.into()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.as_deref().is_some_and(|u| !u.trim().is_empty())
    }
}
