use soroban_sdk::{contracttype, Address, Env, String};

use crate::Error;

pub(crate) const DAY_IN_LEDGERS: u32 = 17280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub(crate) const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Verification record for a carrier. Only verified carriers are ever stored.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CarrierRecord {
    pub company_name: String,
    pub registration_number: String,
    pub verified: bool,
    /// Ledger sequence at which the carrier was registered.
    pub verification_date: u32,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Carrier(Address),
}

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn read_admin(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(Error::NotInitialized)
}

pub fn write_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn has_carrier(env: &Env, carrier: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Carrier(carrier.clone()))
}

pub fn read_carrier(env: &Env, carrier: &Address) -> Option<CarrierRecord> {
    let key = DataKey::Carrier(carrier.clone());
    let record = env.storage().persistent().get(&key);
    if record.is_some() {
        env.storage().persistent().extend_ttl(
            &key,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );
    }
    record
}

pub fn write_carrier(env: &Env, carrier: &Address, record: &CarrierRecord) {
    let key = DataKey::Carrier(carrier.clone());
    env.storage().persistent().set(&key, record);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn remove_carrier(env: &Env, carrier: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::Carrier(carrier.clone()));
}
