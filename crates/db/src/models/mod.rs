pub mod content;
pub mod invitation;
pub mod invitation_content;
pub mod preview_token;

pub use content::*;
pub use invitation::{Invitation, InvitationFilter, InvitationPatch, InvitationStatus};
pub use invitation_content::{InvitationContent, Lineage};
pub use preview_token::PreviewToken;
