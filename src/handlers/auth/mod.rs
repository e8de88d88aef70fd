// handlers/auth/mod.rs - Token session endpoints under /api/auth

pub mod logout;  // POST /api/auth/logout
pub mod session; // GET /api/auth/session
pub mod signin;  // POST /api/auth/signin

pub use logout::logout;
pub use session::session_get;
pub use signin::sign_in;
