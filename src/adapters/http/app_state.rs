use std::sync::Arc;

use crate::application::use_cases::billing::BillingUseCases;

#[derive(Clone)]
pub struct AppState {
    pub billing_use_cases: Arc<BillingUseCases>,
}
