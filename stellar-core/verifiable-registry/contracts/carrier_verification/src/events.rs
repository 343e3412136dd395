use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::storage::CarrierRecord;

pub const INITIALIZED: Symbol = symbol_short!("init");
pub const REGISTERED: Symbol = symbol_short!("register");
pub const REVOKED: Symbol = symbol_short!("revoke");
pub const ADMIN_TRANSFERRED: Symbol = symbol_short!("adm_xfer");

pub fn initialized(env: &Env, admin: &Address) {
    env.events().publish((INITIALIZED,), admin.clone());
}

pub fn carrier_registered(env: &Env, carrier: &Address, record: &CarrierRecord) {
    env.events()
        .publish((REGISTERED, carrier.clone()), record.clone());
}

pub fn carrier_revoked(env: &Env, carrier: &Address) {
    env.events().publish((REVOKED, carrier.clone()), ());
}

pub fn admin_transferred(env: &Env, old_admin: &Address, new_admin: &Address) {
    env.events()
        .publish((ADMIN_TRANSFERRED, old_admin.clone()), new_admin.clone());
}
