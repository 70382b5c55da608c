// Persistence layer: entity definitions and per-entity repositories.
// Repositories borrow the pool for one statement at a time and never cache.

pub mod models;
pub mod repositories;

pub use models::contact::{ContactEntity, NewContact};
pub use models::user::{NewUser, UserEntity};
pub use repositories::contact::ContactRepository;
pub use repositories::user::UserRepository;
