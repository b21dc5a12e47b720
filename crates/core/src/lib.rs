//! Domain logic for the arcsite backend.
//!
//! Pure types and state machines with no IO: the gallery draft used by the
//! admin project editor, enquiry forwarding payloads, slug generation, and
//! the shared error/type aliases the other crates build on.

pub mod enquiry;
pub mod error;
pub mod gallery;
pub mod slug;
pub mod types;
