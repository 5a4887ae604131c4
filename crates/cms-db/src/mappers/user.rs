//! User entity <-> model mapper

use cms_core::entities::{User, UserRole};
use cms_core::value_objects::Snowflake;

use crate::models::UserModel;

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: Snowflake::new(model.id),
            email: model.email,
            fullname: model.fullname,
            phone: model.phone,
            address: model.address,
            city: model.city,
            state: model.state,
            country: model.country,
            pincode: model.pincode,
            is_active: model.is_active,
            is_staff: model.is_staff,
            is_superuser: model.is_superuser,
            role: UserRole::from_str_or_default(&model.role),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Borrowed view of a User entity for database insertion
pub struct UserInsert<'a> {
    pub id: i64,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub fullname: &'a str,
    pub phone: Option<&'a str>,
    pub address: Option<&'a str>,
    pub city: Option<&'a str>,
    pub state: Option<&'a str>,
    pub country: Option<&'a str>,
    pub pincode: Option<i32>,
    pub is_active: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub role: &'static str,
}

impl<'a> UserInsert<'a> {
    pub fn new(user: &'a User, password_hash: &'a str) -> Self {
        Self {
            id: user.id.into_inner(),
            email: &user.email,
            password_hash,
            fullname: &user.fullname,
            phone: user.phone.as_deref(),
            address: user.address.as_deref(),
            city: user.city.as_deref(),
            state: user.state.as_deref(),
            country: user.country.as_deref(),
            pincode: user.pincode,
            is_active: user.is_active,
            is_staff: user.is_staff,
            is_superuser: user.is_superuser,
            role: user.role.as_str(),
        }
    }
}
