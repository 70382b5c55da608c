use serde::{Deserialize, Serialize};

use crate::database::ContactEntity;

#[derive(Debug, Deserialize)]
pub struct CreateContactRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateContactRequest {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Serialize)]
pub struct ContactInfo {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl From<ContactEntity> for ContactInfo {
    fn from(contact: ContactEntity) -> Self {
        Self {
            id: contact.id,
            name: contact.name,
            email: contact.email,
            phone: contact.phone,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteContactResponse {
    pub deleted: bool,
}
