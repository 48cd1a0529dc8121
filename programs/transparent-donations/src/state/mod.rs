pub mod donor;
pub mod ledger;

pub use donor::*;
pub use ledger::*;
