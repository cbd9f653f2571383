pub mod bitcoin_address;
pub mod credit_card;
pub mod email_address;
pub mod ip_address;
