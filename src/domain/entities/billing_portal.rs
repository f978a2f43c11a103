/// Request to open a Stripe billing portal session for an existing customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillingPortalRequest {
    pub customer_external_id: String,
    pub return_url: String,
}
