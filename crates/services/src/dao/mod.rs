pub mod base;
pub mod content;
pub mod invitation;
pub mod preview_token;

pub use base::BaseDao;
