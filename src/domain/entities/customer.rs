/// Request to register a new payer with the payment provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCustomerRequest {
    pub email: String,
    pub name: String,
    /// Caller-side user id, stored as opaque customer metadata.
    pub user_id: String,
}
