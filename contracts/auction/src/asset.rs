use soroban_sdk::{contractclient, Address, Env};

/// Surface of the naming-record contract the auction sells.
#[allow(dead_code)]
#[contractclient(name = "NameRecordClient")]
pub trait NameRecordInterface {
    /// Current owner of the record.
    fn owner(env: Env) -> Address;

    /// Hand the record to `new_owner`. Requires the current owner's auth.
    fn change_owner(env: Env, new_owner: Address);
}
