mod documentary;
mod jury_member;
mod rating;
mod screening;
mod user;

pub use documentary::{Director, Documentary, Producer};
pub use jury_member::JuryMember;
pub use rating::Rating;
pub use screening::Screening;
pub use user::{AuthToken, Role, User};
