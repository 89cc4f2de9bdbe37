use crate::domain::model::{ConnectionHandle, Lesson, QueryResult, Session};
use crate::utils::error::Result;
use chrono::NaiveDateTime;

pub trait SalesOutput {
    fn output(&self, sales: f64) -> Result<String>;
}

pub trait SalesRepository {
    /// Total sales in dollars for `start <= created_at <= end`.
    fn between(&self, start: NaiveDateTime, end: NaiveDateTime) -> Result<f64>;
}

pub trait Shape {
    fn area(&self) -> f64;
    fn name(&self) -> &'static str;
}

pub trait LessonRepository {
    /// Always a plain, insertion-ordered list, whatever the backing store.
    fn get_all(&self) -> Vec<Lesson>;
}

pub trait Workable {
    fn work(&self) -> Vec<String>;
}

pub trait Sleepable {
    fn sleep(&self) -> Vec<String>;
}

pub trait Manageable {
    fn be_managed(&self) -> Vec<String>;
}

/// Capability queries for heterogeneous crews. A worker only overrides the
/// accessors for the capabilities it actually has.
pub trait Worker {
    fn name(&self) -> &str;

    fn as_workable(&self) -> Option<&dyn Workable> {
        None
    }

    fn as_sleepable(&self) -> Option<&dyn Sleepable> {
        None
    }

    fn as_manageable(&self) -> Option<&dyn Manageable> {
        None
    }
}

/// Disconnected -> connect -> Connected -> disconnect -> Disconnected.
pub trait Connection {
    fn connect(&mut self) -> Result<ConnectionHandle>;
    fn query(&mut self, sql: &str) -> Result<QueryResult>;
    fn disconnect(&mut self);
}

pub trait Mailer {
    fn send_reminder(&self, email: &str) -> Result<()>;
}

pub trait AccessPolicy {
    fn authorize(&self, session: &Session) -> Result<()>;
}

impl<T: SalesOutput + ?Sized> SalesOutput for Box<T> {
    fn output(&self, sales: f64) -> Result<String> {
        (**self).output(sales)
    }
}

impl<T: LessonRepository + ?Sized> LessonRepository for Box<T> {
    fn get_all(&self) -> Vec<Lesson> {
        (**self).get_all()
    }
}

impl<T: Connection + ?Sized> Connection for Box<T> {
    fn connect(&mut self) -> Result<ConnectionHandle> {
        (**self).connect()
    }

    fn query(&mut self, sql: &str) -> Result<QueryResult> {
        (**self).query(sql)
    }

    fn disconnect(&mut self) {
        (**self).disconnect()
    }
}
