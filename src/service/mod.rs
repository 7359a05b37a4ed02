use std::sync::Arc;

use crate::model::balance::AllowanceTable;
use crate::store::LeaveStore;

pub mod balance;
pub mod calendar;
pub mod lifecycle;

/// Leave lifecycle and derived-balance queries over one leave store.
#[derive(Clone)]
pub struct LeaveService {
    store: Arc<dyn LeaveStore>,
    allowances: AllowanceTable,
}

impl LeaveService {
    pub fn new(store: Arc<dyn LeaveStore>, allowances: AllowanceTable) -> Self {
        Self { store, allowances }
    }
}
