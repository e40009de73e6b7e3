//! Input checks shared by registration and profile updates.
//!
//! Validators never trim or case-fold; callers normalise input first.

pub mod validation_result;
pub mod validation_rules;
pub mod validators;
