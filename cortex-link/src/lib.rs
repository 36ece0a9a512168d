#![deny(missing_docs)]
//! Linked collections for manipulations, resources, and stimuli.
//!
//! Each collection starts from the local defaults in the configuration and
//! is linked exactly once before a session starts. Hosted sessions
//! substitute every entry by one call to the matching host accessor; local
//! sessions keep their defaults (lint-checking path naming). Reads before
//! linking fail with [`cortex0::error::LinkError::NotLinked`] rather than
//! silently returning defaults that linking may still replace.

mod linked;
mod manipulations;
mod paths;

pub use manipulations::Manipulations;
pub use paths::{Resources, Stimuli};
