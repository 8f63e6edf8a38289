//! # Funds Outlet Adapters
//!
//! In-memory outlets for tests and local runs. A production deployment
//! supplies its own custody-side implementation of `FundsOutlet`.

use crate::ports::outbound::{FundsError, FundsOutlet};
use shared_types::{Address, Wei};

/// Outlet that accepts every transfer and records it.
#[derive(Clone, Debug, Default)]
pub struct RecordingOutlet {
    /// All successful transfers, in order.
    pub transfers: Vec<(Address, Wei)>,
}

impl FundsOutlet for RecordingOutlet {
    fn pay_out(&mut self, to: Address, amount: Wei) -> Result<(), FundsError> {
        self.transfers.push((to, amount));
        Ok(())
    }
}

/// Outlet that rejects every transfer, for withdraw-failure paths.
#[derive(Clone, Copy, Debug, Default)]
pub struct RejectingOutlet;

impl FundsOutlet for RejectingOutlet {
    fn pay_out(&mut self, _to: Address, _amount: Wei) -> Result<(), FundsError> {
        Err(FundsError::Rejected("outlet disabled".to_string()))
    }
}
