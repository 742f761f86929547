// src/produtos/produtos_structs.rs

use bigdecimal::{BigDecimal, RoundingMode};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

/// Campos de um produto sem o id: corpo do POST e do PUT em `/produtos`.
///
/// O estoque também é aceito como `estoque`, nome usado pelo formulário do front-end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NovoProduto {
    pub nome: String,
    pub descricao: String,
    // Chega já com duas casas, a mesma escala da coluna DECIMAL(10, 2)
    #[serde(deserialize_with = "preco_com_duas_casas")]
    pub preco: BigDecimal,
    #[serde(alias = "estoque")]
    pub quantidade_estoque: i32,
    pub id_categoria: i32,
}

/// Arredonda o preço para centavos (meio para cima), como o MySQL faz ao gravar
/// numa coluna DECIMAL(10, 2).
pub fn arredondar_preco(preco: &BigDecimal) -> BigDecimal {
    preco.with_scale_round(2, RoundingMode::HalfUp)
}

fn preco_com_duas_casas<'de, D>(deserializer: D) -> Result<BigDecimal, D::Error>
where
    D: Deserializer<'de>,
{
    BigDecimal::deserialize(deserializer).map(|preco| arredondar_preco(&preco))
}

impl Default for NovoProduto {
    /// Formulário vazio da tela de produtos (categoria 1 pré-selecionada).
    fn default() -> Self {
        Self {
            nome: String::new(),
            descricao: String::new(),
            preco: BigDecimal::from(0),
            quantidade_estoque: 0,
            id_categoria: 1,
        }
    }
}

impl From<&Produto> for NovoProduto {
    fn from(produto: &Produto) -> Self {
        Self {
            nome: produto.nome.clone(),
            descricao: produto.descricao.clone(),
            preco: produto.preco.clone(),
            quantidade_estoque: produto.quantidade_estoque,
            id_categoria: produto.id_categoria,
        }
    }
}

/// Estrutura que representa um produto no banco de dados
/// Deriva FromRow para mapeamento direto de resultados de query SQL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Produto {
    pub id: i32,
    pub nome: String,
    pub descricao: String,
    pub preco: BigDecimal,
    pub quantidade_estoque: i32,
    pub id_categoria: i32,
}

impl Produto {
    pub fn com_id(id: i32, dados: NovoProduto) -> Self {
        Self {
            id,
            nome: dados.nome,
            descricao: dados.descricao,
            preco: arredondar_preco(&dados.preco),
            quantidade_estoque: dados.quantidade_estoque,
            id_categoria: dados.id_categoria,
        }
    }
}

/// Query string de `GET /produtos?nome=`
#[derive(Debug, Default, Deserialize)]
pub struct FiltroProdutos {
    pub nome: Option<String>,
}
