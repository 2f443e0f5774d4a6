pub mod auth;
pub mod common;
pub mod documentary;
pub mod jury_member;
pub mod rating;
pub mod screening;
pub mod user;
