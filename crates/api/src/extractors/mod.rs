pub mod admin;
pub mod auth;
pub mod invitation_id;
pub mod json;
