pub mod admin;
pub mod employee;
pub mod home;
pub mod login;
pub mod register;

pub use admin::*;
pub use employee::*;
pub use home::*;
pub use login::*;
pub use register::*;
