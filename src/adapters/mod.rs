// Adapters layer: concrete variants for each capability port.

pub mod connection;
pub mod lesson_repo;
pub mod mailer;
pub mod output;
pub mod sales_repo;
pub mod shapes;
pub mod workers;
