/// Path appended to the caller's base URL after a completed checkout.
pub const SUCCESS_PATH: &str = "/subscription-success";

/// Path appended to the caller's base URL after an abandoned checkout.
pub const CANCEL_PATH: &str = "/subscription-fail";

/// Request to start a subscription checkout for an existing customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutRequest {
    pub price_id: String,
    pub customer_external_id: String,
    pub user_id: String,
    pub base_url: String,
}

impl CheckoutRequest {
    pub fn redirect_urls(&self) -> CheckoutUrls {
        CheckoutUrls::from_base_url(&self.base_url)
    }
}

/// URLs for checkout redirects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutUrls {
    pub success_url: String,
    pub cancel_url: String,
}

impl CheckoutUrls {
    /// The base URL is used verbatim; a trailing slash is not collapsed.
    pub fn from_base_url(base_url: &str) -> Self {
        Self {
            success_url: format!("{base_url}{SUCCESS_PATH}"),
            cancel_url: format!("{base_url}{CANCEL_PATH}"),
        }
    }
}
