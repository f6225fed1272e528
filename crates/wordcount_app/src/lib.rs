//! Shared plumbing for the `wc-mapper`, `wc-reducer` and `netcount` binaries.
pub mod platform;
