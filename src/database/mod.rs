pub mod manager;
pub mod models;
pub mod repository;

pub use manager::{DatabaseError, DatabaseHealth, DatabaseManager};
pub use models::{Department, User};
pub use repository::{DepartmentRepository, PgDepartmentRepository, PgUserRepository, UserRepository};
