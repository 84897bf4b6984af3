pub mod add;
pub mod book;
pub mod business;
pub mod context;
pub mod del;
pub mod layout;
pub mod log;
pub mod notify;
pub mod validator;
