#![doc(test(attr(deny(warnings))))]

//! Radiology Core offers the pricing, discount, and daily ledger primitives
//! that power a radiology unit's front-desk billing CLI.

pub mod billing;
pub mod cli;
pub mod currency;
pub mod errors;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Radiology Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
