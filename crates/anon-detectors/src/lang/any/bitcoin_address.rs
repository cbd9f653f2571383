//! Bitcoin addresses: P2PKH (`1...`), P2SH (`3...`) and segwit (`bc1...`)
//!
//! Candidates come from the address alphabets; each one is kept only if its
//! base58check or bech32/bech32m checksum verifies.

use anon_core::{AnonTask, Descriptor, Procedure, Result};
use regex::Regex;

use crate::validate::{self, BASE58_ALPHABET, BECH32_ALPHABET};

pub struct BitcoinAddress;

impl Procedure for BitcoinAddress {
    type State = Regex;

    fn initialize(&self) -> anyhow::Result<Regex> {
        let pattern = format!(
            "[13][{}]{{25,34}}|bc1[{}]{{8,87}}",
            BASE58_ALPHABET, BECH32_ALPHABET
        );
        Ok(Regex::new(&pattern)?)
    }

    fn candidates<'a>(
        &'a self,
        state: &'a Regex,
        text: &'a str,
    ) -> impl Iterator<Item = &'a str> + 'a {
        state.find_iter(text).map(|m| m.as_str()).filter(|address| {
            if address.starts_with("bc1") {
                validate::bech32_address(address)
            } else {
                validate::base58check(address)
            }
        })
    }
}

pub fn anon_tasks() -> Result<Vec<Descriptor>> {
    Ok(vec![Descriptor::procedural(
        AnonTask::BitcoinAddress,
        BitcoinAddress,
        "Bitcoin addresses (P2PKH, P2SH and Bech32), recognize & validate",
    )])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn redact(text: &str) -> String {
        let tasks = anon_tasks().unwrap();
        let sub = tasks[0].bind("<BITCOIN_ADDRESS>".to_string()).unwrap();
        sub.apply(text).0
    }

    #[test]
    fn test_valid_addresses() {
        assert_eq!(
            redact("BTC address: 1AGNa15ZQXAZUgFiqJ2i7Z2DPU2J6hW62i"),
            "BTC address: <BITCOIN_ADDRESS>"
        );
        assert_eq!(
            redact("pay to 3J98t1WpEZ73CNmQviecrnyiWrnqRhWNLy now"),
            "pay to <BITCOIN_ADDRESS> now"
        );
        assert_eq!(
            redact("segwit bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4"),
            "segwit <BITCOIN_ADDRESS>"
        );
    }

    #[test]
    fn test_bad_checksum_untouched() {
        assert_eq!(
            redact("BTC address: 1AGNa15ZQXAZUgFiqJ2i7Z2DPU2J6hW623"),
            "BTC address: 1AGNa15ZQXAZUgFiqJ2i7Z2DPU2J6hW623"
        );
    }
}
