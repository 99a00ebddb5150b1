//! Audit rules for langc.
//!
//! Each rule has a pure function that takes only the data it compares and
//! returns issues, plus an `*_issues` wrapper that loads that data from a
//! [`BuildContext`](crate::core::BuildContext).
//!
//! ## Module Structure
//!
//! - `unregistered`: reference keys absent from the registry
//! - `missing`: registry keys absent from every locale file

pub mod missing;
pub mod unregistered;
