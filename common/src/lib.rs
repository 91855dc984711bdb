//! Types shared by the catalogue backend and the SPA.
//!
//! - `model`: wire representations of products, items and error bodies.
//! - `validation`: turning loosely typed request payloads into records and patches.
//! - `messages`: user-facing strings both sides agree on.

pub mod messages;
pub mod model;
pub mod validation;
