use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Error enumeration for ledger failures.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("business not found")]
    BusinessNotFound,
    #[error("insufficient connects (required {required}, available {available})")]
    InsufficientConnects { required: u32, available: u32 },
    #[error("ledger unavailable: {0}")]
    Unavailable(String),
}

/// Spendable connects balance held per business.
///
/// `debit` performs the balance check and the deduction as one atomic
/// operation, so callers never race between reading a balance and spending
/// it. `credit` exists for the compensating half of debit-then-create.
pub trait ConnectsLedger: Send + Sync {
    fn balance(&self, business_id: &str) -> Result<u32, LedgerError>;

    /// Deduct `amount`, returning the remaining balance.
    fn debit(&self, business_id: &str, amount: u32) -> Result<u32, LedgerError>;

    /// Return `amount` to the balance, returning the new total.
    fn credit(&self, business_id: &str, amount: u32) -> Result<u32, LedgerError>;
}

/// Mutex-guarded ledger used by the API binary and tests.
#[derive(Default, Clone)]
pub struct InMemoryConnectsLedger {
    accounts: Arc<Mutex<HashMap<String, u32>>>,
}

impl InMemoryConnectsLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_account(&self, business_id: &str, balance: u32) {
        let mut guard = self.accounts.lock().expect("ledger mutex poisoned");
        guard.insert(business_id.to_string(), balance);
    }
}

impl ConnectsLedger for InMemoryConnectsLedger {
    fn balance(&self, business_id: &str) -> Result<u32, LedgerError> {
        let guard = self.accounts.lock().expect("ledger mutex poisoned");
        guard
            .get(business_id)
            .copied()
            .ok_or(LedgerError::BusinessNotFound)
    }

    fn debit(&self, business_id: &str, amount: u32) -> Result<u32, LedgerError> {
        let mut guard = self.accounts.lock().expect("ledger mutex poisoned");
        let balance = guard
            .get_mut(business_id)
            .ok_or(LedgerError::BusinessNotFound)?;
        if *balance < amount {
            return Err(LedgerError::InsufficientConnects {
                required: amount,
                available: *balance,
            });
        }
        *balance -= amount;
        Ok(*balance)
    }

    fn credit(&self, business_id: &str, amount: u32) -> Result<u32, LedgerError> {
        let mut guard = self.accounts.lock().expect("ledger mutex poisoned");
        let balance = guard
            .get_mut(business_id)
            .ok_or(LedgerError::BusinessNotFound)?;
        *balance = balance.saturating_add(amount);
        Ok(*balance)
    }
}
