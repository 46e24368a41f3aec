// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::TrackerError;

/// Fallback color for uncategorized slices in distribution charts.
pub const DEFAULT_CATEGORY_COLOR: &str = "#CCCCCC";

const DEFAULT_GOAL_COLOR: &str = "#4CAF50";

/// Canonical movement kind. Older exports carry Spanish labels
/// (ingreso/gasto/ahorro); those are accepted on deserialize but never
/// produced on serialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    #[serde(rename = "income", alias = "ingreso", alias = "ingresos")]
    Income,
    #[serde(rename = "expense", alias = "gasto", alias = "gastos")]
    Expense,
    #[serde(rename = "saving", alias = "savings", alias = "ahorro", alias = "ahorros")]
    Saving,
}

impl TransactionKind {
    /// Maps a free-form tag (canonical or legacy) to the canonical kind.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "income" | "ingreso" | "ingresos" => Some(Self::Income),
            "expense" | "gasto" | "gastos" => Some(Self::Expense),
            "saving" | "savings" | "ahorro" | "ahorros" => Some(Self::Saving),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
            Self::Saving => "saving",
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One financial event. Amounts are non-negative magnitudes; the kind says
/// which direction the money moved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    #[serde(alias = "fecha")]
    pub date: NaiveDate,
    #[serde(alias = "tipo")]
    pub kind: TransactionKind,
    #[serde(default, alias = "categoria")]
    pub category_id: Option<String>,
    #[serde(alias = "monto")]
    pub amount: Decimal,
    #[serde(default, alias = "descripcion", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Transaction {
    pub fn validate(&self) -> Result<(), TrackerError> {
        if self.amount.is_sign_negative() {
            return Err(TrackerError::MalformedTransaction(format!(
                "'{}' has negative amount {}",
                self.id, self.amount
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    #[serde(alias = "nombre")]
    pub name: String,
    #[serde(alias = "tipo")]
    pub kind: TransactionKind,
    #[serde(default = "default_category_color")]
    pub color: String,
}

/// A savings target. Independent of the aggregation core but shares the
/// amount/date vocabulary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    #[serde(alias = "nombre")]
    pub name: String,
    #[serde(alias = "montoObjetivo")]
    pub target_amount: Decimal,
    #[serde(default, alias = "montoActual")]
    pub current_amount: Decimal,
    #[serde(default, alias = "fechaObjetivo")]
    pub target_date: Option<NaiveDate>,
    #[serde(default = "default_goal_color")]
    pub color: String,
}

impl Goal {
    /// Percent of the target reached, capped at 100. A zero target reads as
    /// fully funded.
    pub fn progress_percent(&self) -> Decimal {
        let hundred = Decimal::from(100);
        if self.target_amount.is_zero() {
            return hundred;
        }
        (self.current_amount * hundred / self.target_amount)
            .round_dp(1)
            .min(hundred)
    }
}

/// Deployment configuration carried through calls explicitly so the core
/// never reads ambient globals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_currency", alias = "moneda")]
    pub currency: String,
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default = "default_theme", alias = "tema")]
    pub theme: String,
    #[serde(default = "default_notifications", alias = "notificaciones")]
    pub notifications: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            locale: default_locale(),
            theme: default_theme(),
            notifications: default_notifications(),
        }
    }
}

fn default_currency() -> String {
    "PEN".to_string()
}

fn default_locale() -> String {
    "es-ES".to_string()
}

fn default_theme() -> String {
    "light".to_string()
}

fn default_notifications() -> bool {
    true
}

fn default_category_color() -> String {
    DEFAULT_CATEGORY_COLOR.to_string()
}

fn default_goal_color() -> String {
    DEFAULT_GOAL_COLOR.to_string()
}

/// Built-in category set used when a snapshot carries none.
pub static DEFAULT_CATEGORIES: Lazy<Vec<Category>> = Lazy::new(|| {
    let cat = |id: &str, name: &str, kind, color: &str| Category {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        color: color.to_string(),
    };
    vec![
        cat("salario", "Salario", TransactionKind::Income, "#4CAF50"),
        cat("negocio", "Negocio", TransactionKind::Income, "#8BC34A"),
        cat("otros-ingresos", "Otros ingresos", TransactionKind::Income, "#CDDC39"),
        cat("alimentacion", "Alimentación", TransactionKind::Expense, "#F44336"),
        cat("transporte", "Transporte", TransactionKind::Expense, "#FF9800"),
        cat("vivienda", "Vivienda", TransactionKind::Expense, "#795548"),
        cat("entretenimiento", "Entretenimiento", TransactionKind::Expense, "#9C27B0"),
        cat("salud", "Salud", TransactionKind::Expense, "#E91E63"),
        cat("otros-gastos", "Otros gastos", TransactionKind::Expense, "#607D8B"),
        cat("ahorro-general", "Ahorro general", TransactionKind::Saving, "#2196F3"),
    ]
});
