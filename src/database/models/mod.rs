pub mod department;
pub mod user;

pub use department::Department;
pub use user::User;
