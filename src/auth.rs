//! Client credentials, grant requests, and the token holder.

pub mod credentials;
pub mod grant;
pub mod token;

pub use credentials::*;
pub use grant::*;
pub use token::{cell::*, secret::*, state::*};
