// src/categorias/categoria_structs.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Estrutura que representa uma categoria no banco de dados
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Categoria {
    pub id: i32,
    pub nome: String,
}
