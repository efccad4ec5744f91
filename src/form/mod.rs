//! Account form
//!
//! `Draft` holds the field values; `FormController` tracks which record the
//! form is open for and commits drafts through the account service.

pub mod controller;
pub mod draft;

pub use controller::{FormController, FormState, SubmitOutcome};
pub use draft::Draft;
