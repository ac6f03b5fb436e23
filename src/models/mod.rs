// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components

pub mod accessibility;
pub mod content;
pub mod disability;
pub mod form;
pub mod preview;
pub mod toast;

pub use accessibility::*;
pub use content::*;
pub use disability::*;
pub use form::*;
pub use preview::*;
pub use toast::*;
