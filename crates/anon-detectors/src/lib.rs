//! Leaf detectors for the text anonymizer
//!
//! Every detector module exposes `anon_tasks()`, the list of descriptors it
//! declares. [`catalog`] tells the registry where each module belongs.

pub mod lang;
pub mod validate;

use anon_core::{DetectorModule, Scope};

use lang::{any, es};

/// All detector modules, in load order
pub fn catalog() -> Vec<DetectorModule> {
    vec![
        // Language independent
        DetectorModule::new("any/bitcoin_address", Scope::Global, any::bitcoin_address::anon_tasks),
        DetectorModule::new("any/credit_card", Scope::Global, any::credit_card::anon_tasks),
        DetectorModule::new("any/email_address", Scope::Global, any::email_address::anon_tasks),
        DetectorModule::new("any/ip_address", Scope::Global, any::ip_address::anon_tasks),
        // Spanish, Spain
        DetectorModule::new(
            "es/es/bank_account",
            Scope::country("es", "es"),
            es::es::bank_account::anon_tasks,
        ),
        DetectorModule::new("es/es/gov_id", Scope::country("es", "es"), es::es::gov_id::anon_tasks),
        DetectorModule::new(
            "es/es/phone_number",
            Scope::country("es", "es"),
            es::es::phone_number::anon_tasks,
        ),
    ]
}
