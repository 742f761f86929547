// src/cliente/gestao_produtos.rs

use super::api::{ApiCliente, ErroCliente};
use super::Mensagem;
use crate::categorias::categoria_structs::Categoria;
use crate::produtos::produtos_structs::{NovoProduto, Produto};

/// Tela de produtos: busca por nome, cadastro, edição e exclusão.
///
/// O mesmo formulário serve para criar e editar; `editando` decide qual
/// das duas coisas `salvar` faz.
#[derive(Debug)]
pub struct GestaoProdutos {
    api: ApiCliente,
    pub produtos: Vec<Produto>,
    pub categorias: Vec<Categoria>,
    pub editando: Option<Produto>,
    pub formulario: NovoProduto,
    pub busca: String,
    pub mensagem: Option<Mensagem>,
    pub carregando: bool,
}

impl GestaoProdutos {
    pub fn new(api: ApiCliente) -> Self {
        Self {
            api,
            produtos: Vec::new(),
            categorias: Vec::new(),
            editando: None,
            formulario: NovoProduto::default(),
            busca: String::new(),
            mensagem: None,
            carregando: true,
        }
    }

    pub async fn montar(&mut self) {
        self.carregar().await;
    }

    /// Troca o texto de busca e recarrega a lista.
    pub async fn buscar(&mut self, texto: impl Into<String>) {
        self.busca = texto.into();
        self.carregar().await;
    }

    async fn carregar(&mut self) {
        self.carregando = true;
        let (produtos, categorias) = futures::join!(
            self.api.listar_produtos(&self.busca),
            self.api.listar_categorias()
        );

        match produtos {
            Ok(produtos) => self.produtos = produtos,
            Err(ErroCliente::Rede(_)) => {
                self.mensagem = Some(Mensagem::erro("Não foi possível conectar ao servidor para buscar dados."))
            }
            Err(_) => self.mensagem = Some(Mensagem::erro("Erro ao processar produtos.")),
        }
        match categorias {
            Ok(categorias) => self.categorias = categorias,
            Err(erro) => {
                tracing::debug!(erro = %erro, "Falha ao buscar categorias");
                self.mensagem = Some(Mensagem::erro("Não foi possível conectar ao servidor para buscar dados."));
            }
        }
        self.carregando = false;
    }

    pub fn em_edicao(&self) -> bool {
        self.editando.is_some()
    }

    /// Coloca o produto no formulário e entra no modo de edição.
    pub fn editar(&mut self, produto: &Produto) {
        self.formulario = NovoProduto::from(produto);
        self.editando = Some(produto.clone());
    }

    pub fn cancelar_edicao(&mut self) {
        self.editando = None;
        self.formulario = NovoProduto::default();
        self.mensagem = None;
    }

    /// Cria (POST) ou atualiza (PUT) conforme o modo, e recarrega a lista.
    pub async fn salvar(&mut self) {
        self.mensagem = None;

        let resultado = match &self.editando {
            Some(produto) => self
                .api
                .atualizar_produto(produto.id, &self.formulario)
                .await
                .map(|_| "Produto atualizado com sucesso!"),
            None => self
                .api
                .cadastrar_produto(&self.formulario)
                .await
                .map(|_| "Produto criado com sucesso!"),
        };

        match resultado {
            Ok(texto) => {
                self.mensagem = Some(Mensagem::sucesso(texto));
                self.formulario = NovoProduto::default();
                self.editando = None;
                match self.api.listar_produtos(&self.busca).await {
                    Ok(produtos) => self.produtos = produtos,
                    Err(_) => self.mensagem = Some(Mensagem::erro("Erro na comunicação com a API.")),
                }
            }
            Err(ErroCliente::Rede(_)) => {
                self.mensagem = Some(Mensagem::erro("Erro na comunicação com a API."))
            }
            Err(erro) => {
                let texto = erro.mensagem_do_servidor().unwrap_or("Ocorreu um erro.");
                self.mensagem = Some(Mensagem::erro(texto));
            }
        }
    }

    /// Exclui no servidor e tira o produto da lista local.
    pub async fn excluir(&mut self, id: i32) {
        match self.api.deletar_produto(id).await {
            Ok(_) => {
                self.mensagem = Some(Mensagem::sucesso("Produto excluído com sucesso!"));
                self.produtos.retain(|p| p.id != id);
            }
            Err(ErroCliente::Rede(_)) => {
                self.mensagem = Some(Mensagem::erro("Não foi possível conectar ao servidor."))
            }
            Err(erro) => {
                let texto = erro.mensagem_do_servidor().unwrap_or("Erro ao excluir produto.");
                self.mensagem = Some(Mensagem::erro(texto));
            }
        }
    }

    pub fn nome_categoria(&self, produto: &Produto) -> &str {
        self.categorias
            .iter()
            .find(|c| c.id == produto.id_categoria)
            .map(|c| c.nome.as_str())
            .unwrap_or("N/A")
    }
}
