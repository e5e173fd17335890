pub mod issue;
pub mod repository;
pub mod token;
pub mod user;

pub use issue::*;
pub use repository::*;
pub use token::*;
pub use user::*;
