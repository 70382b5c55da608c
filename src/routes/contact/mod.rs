mod handler;
mod model;

pub use handler::{create_contact, delete_contact, find_by_id, list_contacts, update_contact};
