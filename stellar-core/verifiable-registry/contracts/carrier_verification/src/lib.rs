#![no_std]

//! Carrier verification registry.
//!
//! A single administrator attests to carriers by storing a verification record
//! per carrier address, and may later revoke it or hand administration over to
//! another address.
//!
//! The first successful `initialize` call claims the admin role, so deployment
//! and initialization must be submitted together in one transaction.

use soroban_sdk::{contract, contracterror, contractimpl, log, Address, Env, String};

mod events;
mod storage;

pub use storage::CarrierRecord;

#[contracterror]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotAdmin = 1,
    AlreadyRegistered = 2,
    NotFound = 3,
    AlreadyInitialized = 4,
    NotInitialized = 5,
}

#[contract]
pub struct CarrierVerification;

#[contractimpl]
impl CarrierVerification {
    /// Initialize the contract with its administrator.
    pub fn initialize(env: Env, admin: Address) -> Result<(), Error> {
        if storage::has_admin(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();

        storage::write_admin(&env, &admin);
        storage::extend_instance(&env);
        events::initialized(&env, &admin);
        Ok(())
    }

    // ========================================================================
    // Carrier Management
    // ========================================================================

    /// Record a new verified carrier. Admin only.
    pub fn register_carrier(
        env: Env,
        caller: Address,
        carrier: Address,
        company_name: String,
        registration_number: String,
    ) -> Result<bool, Error> {
        Self::require_admin(&env, &caller)?;

        if storage::has_carrier(&env, &carrier) {
            log!(&env, "carrier already registered", carrier);
            return Err(Error::AlreadyRegistered);
        }

        let record = CarrierRecord {
            company_name,
            registration_number,
            verified: true,
            verification_date: env.ledger().sequence(),
        };
        storage::write_carrier(&env, &carrier, &record);
        storage::extend_instance(&env);

        events::carrier_registered(&env, &carrier, &record);
        Ok(true)
    }

    /// Remove a carrier's verification record entirely. Admin only.
    pub fn revoke_carrier(env: Env, caller: Address, carrier: Address) -> Result<bool, Error> {
        Self::require_admin(&env, &caller)?;

        if !storage::has_carrier(&env, &carrier) {
            return Err(Error::NotFound);
        }

        storage::remove_carrier(&env, &carrier);
        storage::extend_instance(&env);

        events::carrier_revoked(&env, &carrier);
        Ok(true)
    }

    /// Whether `carrier` holds a verification record. Fails with `NotFound` otherwise.
    pub fn is_verified_carrier(env: Env, carrier: Address) -> Result<bool, Error> {
        storage::read_carrier(&env, &carrier)
            .map(|record| record.verified)
            .ok_or(Error::NotFound)
    }

    /// Get the verification record for `carrier`, if any.
    pub fn get_carrier_details(env: Env, carrier: Address) -> Option<CarrierRecord> {
        storage::read_carrier(&env, &carrier)
    }

    // ========================================================================
    // Admin Functions
    // ========================================================================

    /// Hand administration to `new_admin`. The caller loses its rights at once.
    pub fn transfer_admin(env: Env, caller: Address, new_admin: Address) -> Result<bool, Error> {
        Self::require_admin(&env, &caller)?;

        storage::write_admin(&env, &new_admin);
        storage::extend_instance(&env);

        events::admin_transferred(&env, &caller, &new_admin);
        Ok(true)
    }

    /// Get the current admin address.
    pub fn get_admin(env: Env) -> Result<Address, Error> {
        storage::read_admin(&env)
    }

    /// Contract interface version.
    pub fn version(_env: Env) -> u32 {
        1
    }

    // ========================================================================
    // Helper Functions
    // ========================================================================

    fn require_admin(env: &Env, caller: &Address) -> Result<(), Error> {
        caller.require_auth();

        let admin = storage::read_admin(env)?;
        if *caller != admin {
            log!(env, "caller is not admin", caller.clone());
            return Err(Error::NotAdmin);
        }
        Ok(())
    }
}
