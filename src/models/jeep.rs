//! Modelo de Jeep (variante de catálogo)
//!
//! Una variante es una combinación fija de modelo + trim con sus atributos
//! físicos y precio base. Mapea a la tabla `models`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;

use crate::utils::errors::AppError;

/// Modelos de Jeep reconocidos por el catálogo.
///
/// El orden de declaración define el orden de clasificación.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum JeepModel {
    #[serde(rename = "WRANGLER")]
    Wrangler,
    #[serde(rename = "GLADIATOR")]
    Gladiator,
    #[serde(rename = "WRANGLER_4XE")]
    Wrangler4xe,
    #[serde(rename = "GRAND_CHEROKEE")]
    GrandCherokee,
    #[serde(rename = "CHEROKEE")]
    Cherokee,
    #[serde(rename = "COMPASS")]
    Compass,
    #[serde(rename = "RENEGADE")]
    Renegade,
}

impl JeepModel {
    pub const ALL: [JeepModel; 7] = [
        JeepModel::Wrangler,
        JeepModel::Gladiator,
        JeepModel::Wrangler4xe,
        JeepModel::GrandCherokee,
        JeepModel::Cherokee,
        JeepModel::Compass,
        JeepModel::Renegade,
    ];

    /// Identificador tal como se guarda en `models.model_id`
    pub fn as_str(&self) -> &'static str {
        match self {
            JeepModel::Wrangler => "WRANGLER",
            JeepModel::Gladiator => "GLADIATOR",
            JeepModel::Wrangler4xe => "WRANGLER_4XE",
            JeepModel::GrandCherokee => "GRAND_CHEROKEE",
            JeepModel::Cherokee => "CHEROKEE",
            JeepModel::Compass => "COMPASS",
            JeepModel::Renegade => "RENEGADE",
        }
    }
}

impl fmt::Display for JeepModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JeepModel {
    type Err = AppError;

    /// Comparación exacta, sensible a mayúsculas
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        JeepModel::ALL
            .iter()
            .copied()
            .find(|model| model.as_str() == value)
            .ok_or_else(|| AppError::InvalidModel(format!("'{}' is not a valid Jeep model", value)))
    }
}

/// Variante de Jeep devuelta por la API.
///
/// `model_pk` es la clave sustituta y nunca se serializa.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Jeep {
    #[serde(skip)]
    pub model_pk: i64,
    pub model_id: JeepModel,
    pub trim_level: String,
    pub num_doors: i32,
    pub wheel_size: i32,
    pub base_price: Decimal,
}

impl Jeep {
    /// Clave de orden: (modelo, trim, puertas)
    pub fn sort_key(&self) -> (JeepModel, &str, i32) {
        (self.model_id, self.trim_level.as_str(), self.num_doors)
    }
}

/// Ordenar variantes por (modelo, trim, puertas) ascendente
pub fn sort_jeeps(jeeps: &mut [Jeep]) {
    jeeps.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
}

/// Fila cruda de la tabla `models`
#[derive(Debug, FromRow)]
pub struct JeepRow {
    pub model_pk: i64,
    pub model_id: String,
    pub trim_level: String,
    pub num_doors: i32,
    pub wheel_size: i32,
    pub base_price: Decimal,
}

impl TryFrom<JeepRow> for Jeep {
    type Error = AppError;

    fn try_from(row: JeepRow) -> Result<Self, Self::Error> {
        let model_id = row.model_id.parse::<JeepModel>().map_err(|_| {
            AppError::Unexpected(format!(
                "Unknown model_id '{}' stored for model_pk {}",
                row.model_id, row.model_pk
            ))
        })?;

        Ok(Self {
            model_pk: row.model_pk,
            model_id,
            trim_level: row.trim_level,
            num_doors: row.num_doors,
            wheel_size: row.wheel_size,
            base_price: row.base_price,
        })
    }
}
