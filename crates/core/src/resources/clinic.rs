use super::Resource;
use crate::schema::{Column, ColumnKind, Messages, Schema};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A clinic that takes part in the vaccination and relief effort.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Clinic {
    #[serde(rename = "nome")]
    pub name: Option<String>,
    #[serde(rename = "endereco")]
    pub address: Option<String>,
    #[serde(rename = "telefone")]
    pub phone: Option<String>,
    #[serde(rename = "responsavel")]
    pub responsible: Option<String>,
}

impl Resource for Clinic {
    const SCHEMA: &'static Schema = &Schema {
        path: "clinicas",
        table: "Clinicas",
        component: "Clinic",
        columns: &[
            Column::required("nome", ColumnKind::Text),
            Column::required("endereco", ColumnKind::Text),
            Column::optional("telefone", ColumnKind::Text),
            Column::optional("responsavel", ColumnKind::Text),
        ],
        messages: Messages {
            list_failed: "Erro ao buscar clínicas",
            missing_fields: "Nome e endereço são obrigatórios!",
            create_failed: "Erro ao cadastrar clínica",
            not_found: "Clínica não encontrada",
            updated: "Clínica atualizada com sucesso",
            update_failed: "Erro ao atualizar clínica",
            deleted: "Clínica excluída com sucesso",
            delete_failed: "Erro ao excluir clínica",
        },
    };
}
