// src/armazenamento/mysql.rs

use async_trait::async_trait;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use sqlx::{query, query_as};

use super::Loja;
use crate::categorias::categoria_structs::Categoria;
use crate::config::BancoConfig;
use crate::erros::{ErroApi, ErroInicializacao, Result};
use crate::produtos::produtos_structs::{NovoProduto, Produto};
use crate::vendedores::vendedor_structs::{NovoVendedor, Vendedor};

/// Loja sobre MySQL. Cada operação pega uma conexão do pool só pelo tempo
/// do comando; o pool a devolve em qualquer caminho de saída, inclusive erro.
pub struct LojaMySql {
    pool: MySqlPool,
}

impl LojaMySql {
    /// O pool é criado sem abrir conexão: com o banco desligado o servidor
    /// sobe e cada requisição responde com o erro de conexão recusada.
    pub async fn conectar(config: &BancoConfig) -> Result<Self, ErroInicializacao> {
        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_conexoes)
            .acquire_timeout(config.timeout_aquisicao)
            .connect_lazy(&config.url)?;

        if config.executar_migracoes {
            sqlx::migrate!().run(&pool).await?;
            tracing::info!("Migrações aplicadas");
        }

        tracing::info!(max_conexoes = config.max_conexoes, "Pool MySQL configurado");
        Ok(Self { pool })
    }
}

fn id_gerado(last_insert_id: u64) -> Result<i32> {
    i32::try_from(last_insert_id)
        .map_err(|_| ErroApi::Interno(format!("id gerado fora do intervalo: {}", last_insert_id)))
}

/// Padrão do `LIKE`: `%nome%`, ou `%` quando não há filtro.
fn padrao_like(filtro_nome: Option<&str>) -> String {
    match filtro_nome {
        Some(nome) if !nome.is_empty() => format!("%{}%", nome),
        _ => "%".to_string(),
    }
}

#[async_trait]
impl Loja for LojaMySql {
    async fn listar_categorias(&self) -> Result<Vec<Categoria>> {
        let categorias = query_as::<_, Categoria>("SELECT id, nome FROM categorias")
            .fetch_all(&self.pool)
            .await?;
        Ok(categorias)
    }

    async fn listar_produtos(&self, filtro_nome: Option<&str>) -> Result<Vec<Produto>> {
        // Sem filtro o padrão é só '%', que casa com todos os nomes
        let produtos = query_as::<_, Produto>(
            "SELECT id, nome, descricao, preco, quantidade_estoque, id_categoria \
             FROM produtos WHERE nome LIKE ?",
        )
        .bind(padrao_like(filtro_nome))
        .fetch_all(&self.pool)
        .await?;
        Ok(produtos)
    }

    async fn cadastrar_produto(&self, dados: &NovoProduto) -> Result<Produto> {
        let resultado = query(
            "INSERT INTO produtos (nome, descricao, preco, quantidade_estoque, id_categoria) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&dados.nome)              // Binda o nome do produto
        .bind(&dados.descricao)         // Binda a descrição
        .bind(&dados.preco)             // Binda o preço (BigDecimal -> DECIMAL)
        .bind(dados.quantidade_estoque) // Binda o estoque
        .bind(dados.id_categoria)       // Binda a categoria, sem checar se existe
        .execute(&self.pool)
        .await?;

        // O MySQL não tem RETURNING: o id vem de LAST_INSERT_ID()
        let id = id_gerado(resultado.last_insert_id())?;
        Ok(Produto::com_id(id, dados.clone()))
    }

    async fn atualizar_produto(&self, id: i32, dados: &NovoProduto) -> Result<u64> {
        let resultado = query(
            "UPDATE produtos SET nome = ?, descricao = ?, preco = ?, quantidade_estoque = ?, id_categoria = ? \
             WHERE id = ?",
        )
        .bind(&dados.nome)
        .bind(&dados.descricao)
        .bind(&dados.preco)
        .bind(dados.quantidade_estoque)
        .bind(dados.id_categoria)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(resultado.rows_affected())
    }

    async fn deletar_produto(&self, id: i32) -> Result<u64> {
        let resultado = query("DELETE FROM produtos WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(resultado.rows_affected())
    }

    async fn listar_vendedores(&self) -> Result<Vec<Vendedor>> {
        let vendedores = query_as::<_, Vendedor>("SELECT id, nome, cpf, email, genero FROM vendedores")
            .fetch_all(&self.pool)
            .await?;
        Ok(vendedores)
    }

    async fn cadastrar_vendedor(&self, dados: &NovoVendedor) -> Result<Vendedor> {
        let resultado = query("INSERT INTO vendedores (nome, cpf, email, genero) VALUES (?, ?, ?, ?)")
            .bind(&dados.nome)
            .bind(&dados.cpf)
            .bind(&dados.email)
            .bind(dados.genero.as_str()) // Grava a sigla: 'M', 'F' ou 'Outro'
            .execute(&self.pool)
            .await?;

        let id = id_gerado(resultado.last_insert_id())?;
        Ok(Vendedor::com_id(id, dados.clone()))
    }

    async fn buscar_vendedor(&self, id: i32) -> Result<Option<Vendedor>> {
        let vendedor = query_as::<_, Vendedor>(
            "SELECT id, nome, cpf, email, genero FROM vendedores WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(vendedor)
    }

    async fn deletar_vendedor(&self, id: i32) -> Result<u64> {
        let resultado = query("DELETE FROM vendedores WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(resultado.rows_affected())
    }
}
