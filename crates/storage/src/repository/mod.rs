pub mod documentary;
pub mod jury_member;
pub mod rating;
pub mod screening;
pub mod user;
