use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub uuid: String,
    pub nome: String,
    /// `RECEITAS` or `DESPESAS`.
    pub tipo: String,
    pub sem_categoria: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateCategoryDto {
    #[serde(default)]
    pub nome: Option<String>,
    /// Accepts `RECEITAS`, `DESPESAS`, `RECEITA` or `DESPESA`.
    #[serde(default)]
    pub tipo: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct RenameCategoryDto {
    #[serde(default)]
    pub nome: Option<String>,
}
