//! Wire-format models for the guild REST API.
//!
//! Entities are deserialized as the API lists them; `Create*` structs are the
//! creation payloads the pipeline posts back. Both sides stay close to the
//! JSON shapes so serde does all the work.

pub mod channel;
pub mod emoji;
pub mod message;
pub mod role;

#[cfg(test)]
mod test;

use serde::Deserialize;

/// The part of a creation response the pipeline cares about: the id the
/// destination guild assigned to the new entity.
#[derive(Deserialize, Debug, Clone)]
pub struct Created {
    pub id: String,
}
