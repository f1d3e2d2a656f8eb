multiversx_sc::imports!();

use common_structs::RecipientInfo;

use crate::storage;

/// Per depositor principal and share ledger.
#[multiversx_sc::module]
pub trait LedgerModule: storage::Storage {
    /// Ledger entry of `depositor`, zeroed when it never deposited.
    fn get_recipient(&self, depositor: &ManagedAddress) -> RecipientInfo<Self::Api> {
        let mapper = self.recipients(depositor);
        if mapper.is_empty() {
            RecipientInfo::new()
        } else {
            mapper.get()
        }
    }

    /// A fully withdrawn entry is removed rather than stored as zeros.
    fn store_recipient(&self, depositor: &ManagedAddress, info: &RecipientInfo<Self::Api>) {
        if info.is_empty() {
            self.recipients(depositor).clear();
        } else {
            self.recipients(depositor).set(info);
        }
    }
}
