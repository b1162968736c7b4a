//! API resources
//!
//! Typed resource structs plus the listing and detail entry points on
//! [`Sdk`](crate::Sdk). Unknown fields are ignored and missing ones take their
//! defaults, so partial payloads still decode.

mod common;
mod generation;
mod pokemon;

pub use common::NamedLink;
pub use generation::{Generation, Names};
pub use pokemon::{
    Abilities, GameIndices, HeldItems, Moves, PastTypes, Pokemon, Sprites, Stats, Types,
    VersionDetails, VersionGroupDetails,
};
