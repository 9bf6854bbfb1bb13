//! Access-token models: the redacted secret, the token snapshot, and its shared cell.

pub mod cell;
pub mod secret;
pub mod state;
