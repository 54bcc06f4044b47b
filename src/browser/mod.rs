//! Browser automation layer
//!
//! This module owns everything that talks to Chrome:
//! - Session lifecycle (launch, exclusive tab handle, guaranteed teardown)
//! - Navigation and bounded element waits
//! - Scripted scrolls and synthetic pointer actions
//! - Randomized pacing between actions
//! - The connectivity probe

mod pacing;
mod probe;
mod session;

pub use pacing::Pacing;
pub use probe::run_probe;
pub use session::{Session, BODY_SELECTOR};
