pub mod billing_portal;
pub mod checkout;
pub mod customer;
