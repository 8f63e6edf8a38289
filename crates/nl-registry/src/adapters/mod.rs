//! Concrete implementations of the outbound ports.

pub mod clock;
pub mod outlet;
pub mod recovery;

pub use clock::{ManualClock, SystemClock};
pub use outlet::{RecordingOutlet, RejectingOutlet};
pub use recovery::EcdsaRecoveryAdapter;
