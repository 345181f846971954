use super::Resource;
use crate::schema::{Column, ColumnKind, Messages, Schema};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Volunteer {
    #[serde(rename = "nome")]
    pub name: Option<String>,
    #[serde(rename = "contato")]
    pub contact: Option<String>,
    #[serde(rename = "habilidades")]
    pub skills: Option<String>,
    #[serde(rename = "disponibilidade")]
    pub availability: Option<String>,
}

impl Resource for Volunteer {
    const SCHEMA: &'static Schema = &Schema {
        path: "voluntarios",
        table: "voluntarios",
        component: "Volunteer",
        columns: &[
            Column::required("nome", ColumnKind::Text),
            Column::required("contato", ColumnKind::Text),
            Column::required("habilidades", ColumnKind::Text),
            Column::required("disponibilidade", ColumnKind::Text),
        ],
        messages: Messages {
            list_failed: "Erro ao buscar voluntários",
            missing_fields: "Todos os campos são obrigatórios!",
            create_failed: "Erro ao cadastrar voluntário",
            not_found: "Voluntário não encontrado",
            updated: "Voluntário atualizado com sucesso",
            update_failed: "Erro ao atualizar voluntário",
            deleted: "Voluntário deletado com sucesso",
            delete_failed: "Erro ao deletar voluntário",
        },
    };
}
