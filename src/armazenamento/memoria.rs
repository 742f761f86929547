// src/armazenamento/memoria.rs

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use super::Loja;
use crate::categorias::categoria_structs::Categoria;
use crate::erros::{ErroApi, ErroBanco, Result};
use crate::produtos::produtos_structs::{NovoProduto, Produto};
use crate::vendedores::vendedor_structs::{NovoVendedor, Vendedor};

/// Tabela com id auto-incremento: ids nunca são reaproveitados.
struct Tabela<T> {
    proximo_id: i32,
    linhas: BTreeMap<i32, T>,
}

impl<T> Default for Tabela<T> {
    fn default() -> Self {
        Self {
            proximo_id: 1,
            linhas: BTreeMap::new(),
        }
    }
}

impl<T> Tabela<T> {
    fn inserir(&mut self, criar: impl FnOnce(i32) -> T) -> &T {
        let id = self.proximo_id;
        self.proximo_id += 1;
        self.linhas.entry(id).or_insert(criar(id))
    }

    fn remover(&mut self, id: i32) -> u64 {
        u64::from(self.linhas.remove(&id).is_some())
    }
}

/// Loja em memória, usada nos testes e com `ARMAZENAMENTO=memoria`.
///
/// Segue o comportamento do esquema MySQL: o filtro de nome ignora
/// maiúsculas/minúsculas e o CPF do vendedor é único.
#[derive(Default)]
pub struct LojaMemoria {
    categorias: RwLock<Tabela<Categoria>>,
    produtos: RwLock<Tabela<Produto>>,
    vendedores: RwLock<Tabela<Vendedor>>,
}

// Lock envenenado é recuperado: toda escrita acontece numa única operação.
fn ler<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|e| e.into_inner())
}

fn escrever<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|e| e.into_inner())
}

impl LojaMemoria {
    /// Não existe rota para cadastrar categorias, então elas entram aqui.
    pub fn com_categorias<I, S>(nomes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let loja = Self::default();
        {
            let mut categorias = escrever(&loja.categorias);
            for nome in nomes {
                let nome = nome.into();
                categorias.inserir(|id| Categoria { id, nome });
            }
        }
        loja
    }
}

#[async_trait]
impl Loja for LojaMemoria {
    async fn listar_categorias(&self) -> Result<Vec<Categoria>> {
        Ok(ler(&self.categorias).linhas.values().cloned().collect())
    }

    async fn listar_produtos(&self, filtro_nome: Option<&str>) -> Result<Vec<Produto>> {
        // Sem filtro, a string vazia está contida em qualquer nome
        let filtro = filtro_nome.unwrap_or_default().to_lowercase();
        Ok(ler(&self.produtos)
            .linhas
            .values()
            .filter(|p| p.nome.to_lowercase().contains(&filtro))
            .cloned()
            .collect())
    }

    async fn cadastrar_produto(&self, dados: &NovoProduto) -> Result<Produto> {
        let mut produtos = escrever(&self.produtos);
        Ok(produtos.inserir(|id| Produto::com_id(id, dados.clone())).clone())
    }

    async fn atualizar_produto(&self, id: i32, dados: &NovoProduto) -> Result<u64> {
        let mut produtos = escrever(&self.produtos);
        match produtos.linhas.get_mut(&id) {
            Some(produto) => {
                *produto = Produto::com_id(id, dados.clone());
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn deletar_produto(&self, id: i32) -> Result<u64> {
        Ok(escrever(&self.produtos).remover(id))
    }

    async fn listar_vendedores(&self) -> Result<Vec<Vendedor>> {
        Ok(ler(&self.vendedores).linhas.values().cloned().collect())
    }

    async fn cadastrar_vendedor(&self, dados: &NovoVendedor) -> Result<Vendedor> {
        let mut vendedores = escrever(&self.vendedores);
        // Mesma regra do índice UNIQUE da coluna cpf
        if vendedores.linhas.values().any(|v| v.cpf == dados.cpf) {
            return Err(ErroApi::Armazenamento(ErroBanco::EntradaDuplicada));
        }
        Ok(vendedores.inserir(|id| Vendedor::com_id(id, dados.clone())).clone())
    }

    async fn buscar_vendedor(&self, id: i32) -> Result<Option<Vendedor>> {
        Ok(ler(&self.vendedores).linhas.get(&id).cloned())
    }

    async fn deletar_vendedor(&self, id: i32) -> Result<u64> {
        Ok(escrever(&self.vendedores).remover(id))
    }
}
