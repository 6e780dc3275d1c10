use std::sync::Arc;

use database::FitnessStore;

pub mod config;
pub mod database;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod result;
pub mod router;
pub mod routes;
pub mod validation;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn FitnessStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn FitnessStore>) -> Self {
        Self { store }
    }
}
