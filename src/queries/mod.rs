pub mod companies;
pub mod history;
pub mod users;
