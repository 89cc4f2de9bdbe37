pub mod access;
pub mod area;
pub mod captain;
pub mod lessons;
pub mod reminder;
pub mod reporter;

pub use crate::domain::model::{
    ConnectionHandle, ConnectionSettings, ConnectionState, Lesson, QueryResult, ReminderOutcome,
    SaleRecord, Session, ShiftLog,
};
pub use crate::domain::ports::{
    AccessPolicy, Connection, LessonRepository, Mailer, Manageable, SalesOutput, SalesRepository,
    Shape, Sleepable, Workable, Worker,
};
pub use crate::utils::error::Result;
