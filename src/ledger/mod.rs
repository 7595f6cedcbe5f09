//! Ledger module - the append-only collection of transaction records.

mod ledger_model;
mod ledger_service;
mod ledger_traits;
mod memory_store;


pub use ledger_model::TransactionRecord;
pub use ledger_service::TransactionLedger;
pub use ledger_traits::{TransactionLedgerTrait, TransactionStore};
pub use memory_store::MemoryTransactionStore;
