//! Relief supplies (food, hygiene kits, ...) tracked by quantity and expiry.

use super::{lenient_integer, Resource};
use crate::error::{ResourceError, ResourceResult};
use crate::schema::{Column, ColumnKind, Messages, Schema};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const EXPIRATION_NOT_FUTURE: &str = "A data de validade deve ser futura!";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Supply {
    #[serde(rename = "nome")]
    pub name: Option<String>,
    #[serde(rename = "quantidade", default, deserialize_with = "lenient_integer")]
    pub quantity: Option<i64>,
    #[serde(rename = "validade")]
    pub expiration: Option<NaiveDate>,
    #[serde(rename = "unidade_medida")]
    pub unit: Option<String>,
    #[serde(rename = "descricao")]
    pub description: Option<String>,
}

impl Resource for Supply {
    const SCHEMA: &'static Schema = &Schema {
        path: "mantimentos",
        table: "mantimentos",
        component: "Supply",
        columns: &[
            Column::required("nome", ColumnKind::Text),
            Column::required("quantidade", ColumnKind::Integer),
            Column::required("validade", ColumnKind::Date),
            Column::optional("unidade_medida", ColumnKind::Text),
            Column::optional("descricao", ColumnKind::Text),
        ],
        messages: Messages {
            list_failed: "Erro ao buscar mantimentos",
            missing_fields: "Todos os campos são obrigatórios!",
            create_failed: "Erro ao cadastrar mantimento",
            not_found: "Mantimento não encontrado",
            updated: "Mantimento atualizado com sucesso",
            update_failed: "Erro ao atualizar mantimento",
            deleted: "Mantimento deletado com sucesso",
            delete_failed: "Erro ao deletar mantimento",
        },
    };

    /// The expiry date must fall strictly after `today`.
    fn check(&self, today: NaiveDate) -> ResourceResult<()> {
        match self.expiration {
            Some(expiration) if expiration <= today => {
                Err(ResourceError::Validation(EXPIRATION_NOT_FUTURE.into()))
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn supply_expiring(date: NaiveDate) -> Supply {
        Supply {
            name: Some("Arroz".into()),
            quantity: Some(50),
            expiration: Some(date),
            ..Supply::default()
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_check_accepts_tomorrow() {
        let today = day(2026, 10, 16);
        assert!(supply_expiring(day(2026, 10, 17)).check(today).is_ok());
    }

    #[test]
    fn test_check_rejects_today() {
        let today = day(2026, 10, 16);
        let err = supply_expiring(today)
            .check(today)
            .expect_err("same-day expiry should fail");
        assert!(matches!(err, ResourceError::Validation(msg) if msg == EXPIRATION_NOT_FUTURE));
    }

    #[test]
    fn test_check_rejects_past_dates() {
        let today = day(2026, 10, 16);
        assert!(supply_expiring(day(2000, 1, 1)).check(today).is_err());
    }
}
