// src/armazenamento/mod.rs

use std::sync::Arc;

use async_trait::async_trait;

use crate::categorias::categoria_structs::Categoria;
use crate::config::{BancoConfig, TipoArmazenamento};
use crate::erros::{ErroInicializacao, Result};
use crate::produtos::produtos_structs::{NovoProduto, Produto};
use crate::vendedores::vendedor_structs::{NovoVendedor, Vendedor};

mod memoria;
mod mysql;

pub use memoria::LojaMemoria;
pub use mysql::LojaMySql;

/// Categorias criadas pela migração inicial; a loja em memória começa com as mesmas.
pub const CATEGORIAS_INICIAIS: [&str; 4] = ["Eletrônicos", "Vestuário", "Alimentos", "Papelaria"];

/// Onde as rotas leem e gravam categorias, produtos e vendedores.
///
/// Cada método corresponde a um único comando SQL na implementação MySQL.
/// Atualizações e exclusões devolvem o número de linhas afetadas; quem
/// decide se isso é um 404 é a rota.
#[async_trait]
pub trait Loja: Send + Sync {
    async fn listar_categorias(&self) -> Result<Vec<Categoria>>;

    /// Produtos cujo nome contém `filtro_nome`; `None` ou vazio traz todos.
    async fn listar_produtos(&self, filtro_nome: Option<&str>) -> Result<Vec<Produto>>;

    async fn cadastrar_produto(&self, dados: &NovoProduto) -> Result<Produto>;

    async fn atualizar_produto(&self, id: i32, dados: &NovoProduto) -> Result<u64>;

    async fn deletar_produto(&self, id: i32) -> Result<u64>;

    async fn listar_vendedores(&self) -> Result<Vec<Vendedor>>;

    async fn cadastrar_vendedor(&self, dados: &NovoVendedor) -> Result<Vendedor>;

    async fn buscar_vendedor(&self, id: i32) -> Result<Option<Vendedor>>;

    async fn deletar_vendedor(&self, id: i32) -> Result<u64>;
}

/// Cria a loja escolhida em `ARMAZENAMENTO`.
pub async fn criar_loja(config: &BancoConfig) -> Result<Arc<dyn Loja>, ErroInicializacao> {
    match config.armazenamento {
        TipoArmazenamento::MySql => Ok(Arc::new(LojaMySql::conectar(config).await?)),
        TipoArmazenamento::Memoria => {
            tracing::warn!("Usando armazenamento em memória; os dados serão perdidos ao encerrar");
            Ok(Arc::new(LojaMemoria::com_categorias(CATEGORIAS_INICIAIS)))
        }
    }
}
