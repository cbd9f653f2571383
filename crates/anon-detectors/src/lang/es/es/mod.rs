pub mod bank_account;
pub mod gov_id;
pub mod phone_number;
