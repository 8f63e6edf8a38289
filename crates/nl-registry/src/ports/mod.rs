//! Port traits: the seams between the registry core and its
//! collaborators.

pub mod inbound;
pub mod outbound;
