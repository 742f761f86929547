// src/vendedores/vendedor_structs.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;

/// Gênero do vendedor, gravado como 'M', 'F' ou 'Outro'.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Genero {
    #[serde(rename = "M")]
    Masculino,
    #[serde(rename = "F")]
    Feminino,
    #[default]
    Outro,
}

#[derive(Debug, Error)]
#[error("gênero inválido: '{0}'")]
pub struct GeneroInvalido(pub String);

impl Genero {
    pub fn as_str(&self) -> &'static str {
        match self {
            Genero::Masculino => "M",
            Genero::Feminino => "F",
            Genero::Outro => "Outro",
        }
    }
}

impl TryFrom<String> for Genero {
    type Error = GeneroInvalido;

    fn try_from(valor: String) -> Result<Self, Self::Error> {
        match valor.as_str() {
            "M" => Ok(Genero::Masculino),
            "F" => Ok(Genero::Feminino),
            "Outro" => Ok(Genero::Outro),
            _ => Err(GeneroInvalido(valor)),
        }
    }
}

/// Corpo do `POST /vendedor`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NovoVendedor {
    pub nome: String,
    pub cpf: String,
    pub email: String,
    pub genero: Genero,
}

/// Estrutura que representa um vendedor no banco de dados
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Vendedor {
    pub id: i32,
    pub nome: String,
    pub cpf: String,
    pub email: String,
    #[sqlx(try_from = "String")]
    pub genero: Genero,
}

impl Vendedor {
    pub fn com_id(id: i32, dados: NovoVendedor) -> Self {
        Self {
            id,
            nome: dados.nome,
            cpf: dados.cpf,
            email: dados.email,
            genero: dados.genero,
        }
    }
}
