use super::Resource;
use crate::schema::{Column, ColumnKind, Messages, Schema};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A vaccine lot held in stock.
///
/// Unlike [`Supply`](super::Supply), the expiry date is not checked against the current date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Vaccine {
    #[serde(rename = "nome")]
    pub name: Option<String>,
    #[serde(rename = "tipo")]
    pub kind: Option<String>,
    #[serde(rename = "fabricante")]
    pub manufacturer: Option<String>,
    #[serde(rename = "lote")]
    pub lot: Option<String>,
    #[serde(rename = "dados_fabricacao")]
    pub manufactured_on: Option<NaiveDate>,
    #[serde(rename = "validade")]
    pub expiration: Option<NaiveDate>,
}

impl Resource for Vaccine {
    const SCHEMA: &'static Schema = &Schema {
        path: "vacinas",
        table: "vacinas",
        component: "Vaccine",
        columns: &[
            Column::required("nome", ColumnKind::Text),
            Column::required("tipo", ColumnKind::Text),
            Column::required("fabricante", ColumnKind::Text),
            Column::required("lote", ColumnKind::Text),
            Column::required("dados_fabricacao", ColumnKind::Date),
            Column::required("validade", ColumnKind::Date),
        ],
        messages: Messages {
            list_failed: "Erro ao buscar vacinas",
            missing_fields: "Todos os campos são obrigatórios!",
            create_failed: "Erro ao cadastrar vacina",
            not_found: "Vacina não encontrada",
            updated: "Vacina atualizada com sucesso",
            update_failed: "Erro ao atualizar vacina",
            deleted: "Vacina deletada com sucesso",
            delete_failed: "Erro ao deletar vacina",
        },
    };
}
