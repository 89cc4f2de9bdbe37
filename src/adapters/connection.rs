use crate::domain::model::{ConnectionHandle, ConnectionSettings, ConnectionState, QueryResult};
use crate::domain::ports::Connection;
use crate::utils::error::{Result, SolidError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shared connect/query/disconnect bookkeeping for the simulated drivers.
#[derive(Debug, Clone)]
struct SimulatedLink {
    backend: &'static str,
    slug: &'static str,
    settings: ConnectionSettings,
    state: ConnectionState,
}

impl SimulatedLink {
    fn new(backend: &'static str, slug: &'static str, settings: ConnectionSettings) -> Self {
        Self {
            backend,
            slug,
            settings,
            state: ConnectionState::Disconnected,
        }
    }

    fn handle(&self) -> ConnectionHandle {
        ConnectionHandle(format!("{}_connection_resource", self.slug))
    }

    fn connect(&mut self) -> ConnectionHandle {
        if self.state == ConnectionState::Connected {
            tracing::debug!("{} connection already open, reusing handle", self.backend);
            return self.handle();
        }

        tracing::info!(
            "Connecting to {} database '{}' at {} as {}...",
            self.backend,
            self.settings.database,
            self.settings.host,
            self.settings.username
        );
        self.state = ConnectionState::Connected;
        self.handle()
    }

    fn query(&mut self, sql: &str) -> Result<QueryResult> {
        if self.state != ConnectionState::Connected {
            return Err(SolidError::invalid_state(format!(
                "not connected to {} database",
                self.backend
            )));
        }

        tracing::info!("Executing {} query: {}", self.backend, sql);
        Ok(QueryResult {
            backend: self.slug.to_string(),
            rows: vec![format!("{}_result", self.slug)],
        })
    }

    fn disconnect(&mut self) {
        if self.state == ConnectionState::Connected {
            tracing::info!("Disconnecting from {} database...", self.backend);
        }
        self.state = ConnectionState::Disconnected;
    }
}

#[derive(Debug, Clone)]
pub struct MySqlConnection {
    link: SimulatedLink,
}

impl MySqlConnection {
    pub fn new(settings: ConnectionSettings) -> Self {
        Self {
            link: SimulatedLink::new("MySQL", "mysql", settings),
        }
    }

    pub fn state(&self) -> ConnectionState {
        self.link.state
    }
}

impl Connection for MySqlConnection {
    fn connect(&mut self) -> Result<ConnectionHandle> {
        Ok(self.link.connect())
    }

    fn query(&mut self, sql: &str) -> Result<QueryResult> {
        self.link.query(sql)
    }

    fn disconnect(&mut self) {
        self.link.disconnect()
    }
}

#[derive(Debug, Clone)]
pub struct PostgresConnection {
    link: SimulatedLink,
}

impl PostgresConnection {
    pub fn new(settings: ConnectionSettings) -> Self {
        Self {
            link: SimulatedLink::new("PostgreSQL", "postgresql", settings),
        }
    }

    pub fn state(&self) -> ConnectionState {
        self.link.state
    }
}

impl Connection for PostgresConnection {
    fn connect(&mut self) -> Result<ConnectionHandle> {
        Ok(self.link.connect())
    }

    fn query(&mut self, sql: &str) -> Result<QueryResult> {
        self.link.query(sql)
    }

    fn disconnect(&mut self) {
        self.link.disconnect()
    }
}

/// Test double that records every statement it executes.
///
/// Follows the same state machine as the real drivers so it can stand in for
/// them anywhere.
#[derive(Debug, Clone)]
pub struct MockConnection {
    state: ConnectionState,
    rows: Vec<String>,
    queries: Vec<String>,
    connects: usize,
}

impl MockConnection {
    pub fn new() -> Self {
        Self::with_rows(vec!["mock_result".to_string()])
    }

    /// Every query answers with `rows`. An empty list simulates "no match".
    pub fn with_rows(rows: Vec<String>) -> Self {
        Self {
            state: ConnectionState::Disconnected,
            rows,
            queries: Vec::new(),
            connects: 0,
        }
    }

    pub fn queries(&self) -> &[String] {
        &self.queries
    }

    pub fn connect_count(&self) -> usize {
        self.connects
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }
}

impl Default for MockConnection {
    fn default() -> Self {
        Self::new()
    }
}

impl Connection for MockConnection {
    fn connect(&mut self) -> Result<ConnectionHandle> {
        if self.state == ConnectionState::Disconnected {
            tracing::debug!("Mock database connection established");
            self.state = ConnectionState::Connected;
            self.connects += 1;
        }
        Ok(ConnectionHandle("mock_connection".to_string()))
    }

    fn query(&mut self, sql: &str) -> Result<QueryResult> {
        if self.state != ConnectionState::Connected {
            return Err(SolidError::invalid_state("not connected to mock database"));
        }
        self.queries.push(sql.to_string());
        tracing::debug!("Mock query executed: {}", sql);
        Ok(QueryResult {
            backend: "mock".to_string(),
            rows: self.rows.clone(),
        })
    }

    fn disconnect(&mut self) {
        if self.state == ConnectionState::Connected {
            tracing::debug!("Mock database connection closed");
        }
        self.state = ConnectionState::Disconnected;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ConnectionDriver {
    #[default]
    Mysql,
    #[serde(alias = "postgresql")]
    #[cfg_attr(feature = "cli", value(alias = "postgresql"))]
    Postgres,
    Mock,
}

impl ConnectionDriver {
    pub fn into_connection(self, settings: ConnectionSettings) -> Box<dyn Connection> {
        match self {
            ConnectionDriver::Mysql => Box::new(MySqlConnection::new(settings)),
            ConnectionDriver::Postgres => Box::new(PostgresConnection::new(settings)),
            ConnectionDriver::Mock => Box::new(MockConnection::new()),
        }
    }
}

impl fmt::Display for ConnectionDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConnectionDriver::Mysql => "mysql",
            ConnectionDriver::Postgres => "postgres",
            ConnectionDriver::Mock => "mock",
        };
        f.write_str(name)
    }
}

impl FromStr for ConnectionDriver {
    type Err = SolidError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mysql" => Ok(ConnectionDriver::Mysql),
            "postgres" | "postgresql" => Ok(ConnectionDriver::Postgres),
            "mock" => Ok(ConnectionDriver::Mock),
            other => Err(SolidError::InvalidConfigValueError {
                field: "database.driver".to_string(),
                value: other.to_string(),
                reason: "Unsupported driver. Valid drivers: mysql, postgres, mock".to_string(),
            }),
        }
    }
}
