pub mod admin;
pub mod invitation;
pub mod public;
