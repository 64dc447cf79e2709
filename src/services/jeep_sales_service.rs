//! Servicio de búsqueda de variantes de Jeep

use std::sync::Arc;
use tracing::info;

use crate::models::{sort_jeeps, Jeep, JeepModel};
use crate::repositories::JeepSalesRepository;
use crate::utils::errors::{AppError, AppResult};

pub struct JeepSalesService {
    repository: Arc<dyn JeepSalesRepository>,
}

impl JeepSalesService {
    pub fn new(repository: Arc<dyn JeepSalesRepository>) -> Self {
        Self { repository }
    }

    /// Variantes para (modelo, trim), ordenadas por (modelo, trim, puertas).
    ///
    /// Una lista vacía es `NotFound`: la entrada ya fue validada, así que
    /// simplemente no hay datos que coincidan.
    pub async fn fetch_jeeps(&self, model: JeepModel, trim: &str) -> AppResult<Vec<Jeep>> {
        info!("🚙 fetch_jeeps llamado con model={} y trim={}", model, trim);

        let mut jeeps = self.repository.fetch_jeeps(model, trim).await?;

        if jeeps.is_empty() {
            return Err(AppError::NotFound(format!(
                "No jeeps found with model={} and trim={}",
                model, trim
            )));
        }

        sort_jeeps(&mut jeeps);
        Ok(jeeps)
    }
}
