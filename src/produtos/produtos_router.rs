// src/produtos/produtos_router.rs

use actix_web::{delete, get, post, put, web, HttpResponse};
use tracing::instrument;

// Importa as structs definidas no módulo `produtos_structs` dentro da mesma pasta `produtos`
use super::produtos_structs::{FiltroProdutos, NovoProduto};

use crate::erros::{ErroApi, Result};
use crate::shared::shared_structs::MensagemResposta;
use crate::AppState;

pub const PRODUTO_NAO_ENCONTRADO: &str = "Produto não encontrado";

/// Rota para buscar os produtos, opcionalmente filtrando pelo nome.
///
/// `GET /produtos?nome=cad` traz os produtos cujo nome contém "cad"
/// (`LIKE '%cad%'`); sem o parâmetro, ou com ele vazio, traz todos.
#[get("/produtos")]
#[instrument(name = "rota::listar_produtos", skip(data))]
pub async fn buscar_produtos(
    data: web::Data<AppState>,
    filtro: web::Query<FiltroProdutos>,
) -> Result<HttpResponse> {
    // Filtro ausente e filtro vazio são tratados igual pela loja: trazem tudo
    let produtos = data.loja.listar_produtos(filtro.nome.as_deref()).await?;
    tracing::info!(quantidade = produtos.len(), "Produtos listados");
    Ok(HttpResponse::Ok().json(produtos))
}

/// Rota para inserir um novo produto.
/// Devolve o produto criado, já com o id gerado pelo banco.
#[post("/produtos")]
#[instrument(name = "rota::cadastrar_produto", skip(data, item), fields(nome = %item.nome))]
pub async fn cadastrar_produto(
    data: web::Data<AppState>,
    item: web::Json<NovoProduto>, // O corpo JSON é desserializado para NovoProduto (preço já em centavos)
) -> Result<HttpResponse> {
    // Insere e recebe de volta o produto completo, com o id gerado
    let produto = data.loja.cadastrar_produto(&item).await?;
    tracing::info!(id = produto.id, "Produto cadastrado");
    Ok(HttpResponse::Ok().json(produto))
}

/// Rota para atualizar todos os campos de um produto.
///
/// Responde sucesso mesmo que nenhum produto tenha o id informado; só as
/// exclusões conferem as linhas afetadas.
#[put("/produtos/{id}")]
#[instrument(name = "rota::atualizar_produto", skip(data, path, item), fields(id = %path.as_ref()))]
pub async fn atualizar_produto(
    data: web::Data<AppState>,
    path: web::Path<i32>,
    item: web::Json<NovoProduto>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    let linhas = data.loja.atualizar_produto(id, &item).await?;
    // O MySQL conta só as linhas alteradas, então 0 também aparece quando nada mudou
    if linhas == 0 {
        tracing::warn!(id, "Atualização não afetou nenhum produto");
    }
    Ok(HttpResponse::Ok().json(MensagemResposta::new("Produto atualizado com sucesso")))
}

/// Rota para deletar um produto. 404 quando nenhuma linha foi removida.
#[delete("/produtos/{id}")]
#[instrument(name = "rota::deletar_produto", skip(data, path), fields(id = %path.as_ref()))]
pub async fn deletar_produto(
    data: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    // Nenhuma linha removida: o id não existe
    if data.loja.deletar_produto(id).await? == 0 {
        return Err(ErroApi::NaoEncontrado(PRODUTO_NAO_ENCONTRADO));
    }
    tracing::info!(id, "Produto deletado");
    Ok(HttpResponse::Ok().json(MensagemResposta::new("Produto deletado com sucesso")))
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test};
    use bigdecimal::BigDecimal;
    use serde_json::json;
    use std::str::FromStr;

    use super::PRODUTO_NAO_ENCONTRADO;
    use crate::app::testes::{app_com_loja, LojaComFalha};
    use crate::armazenamento::LojaMemoria;
    use crate::erros::MENSAGEM_NAO_IDENTIFICADO;
    use crate::produtos::produtos_structs::Produto;
    use crate::shared::shared_structs::MensagemResposta;

    fn corpo_produto(nome: &str, preco: &str) -> serde_json::Value {
        json!({
            "nome": nome,
            "descricao": format!("{} de teste", nome),
            "preco": preco,
            "quantidade_estoque": 12,
            "id_categoria": 2
        })
    }

    #[actix_web::test]
    async fn cadastrar_devolve_o_produto_com_id_novo() {
        let app = test::init_service(app_com_loja(LojaMemoria::default())).await;

        let mut ids = Vec::new();
        for nome in ["Teclado", "Mouse"] {
            let req = test::TestRequest::post()
                .uri("/produtos")
                .set_json(corpo_produto(nome, "99.90"))
                .to_request();
            let criado: Produto = test::call_and_read_body_json(&app, req).await;
            assert_eq!(criado.nome, nome);
            assert_eq!(criado.preco, BigDecimal::from_str("99.90").unwrap());
            assert_eq!(criado.quantidade_estoque, 12);
            assert_eq!(criado.id_categoria, 2);
            assert!(!ids.contains(&criado.id));
            ids.push(criado.id);
        }

        let req = test::TestRequest::get().uri("/produtos").to_request();
        let lista: Vec<Produto> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(lista.iter().map(|p| p.id).collect::<Vec<_>>(), ids);
    }

    #[actix_web::test]
    async fn aceita_o_corpo_do_formulario_com_estoque() {
        let app = test::init_service(app_com_loja(LojaMemoria::default())).await;
        let req = test::TestRequest::post()
            .uri("/produtos")
            .set_json(json!({
                "nome": "Caderno", "descricao": "96 folhas", "preco": 15,
                "estoque": 30, "id_categoria": 1
            }))
            .to_request();
        let criado: Produto = test::call_and_read_body_json(&app, req).await;
        assert_eq!(criado.quantidade_estoque, 30);
        assert_eq!(criado.preco, BigDecimal::from(15));
    }

    #[actix_web::test]
    async fn preco_criado_e_igual_ao_listado() {
        let app = test::init_service(app_com_loja(LojaMemoria::default())).await;
        let req = test::TestRequest::post()
            .uri("/produtos")
            .set_json(corpo_produto("Estojo", "9.999"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let criado: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(criado["preco"], "10.00");

        let req = test::TestRequest::get().uri("/produtos").to_request();
        let lista: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(lista, json!([criado]));
    }

    #[actix_web::test]
    async fn filtro_por_nome() {
        let app = test::init_service(app_com_loja(LojaMemoria::default())).await;
        for nome in ["Cadeira", "Mesa de jantar", "Cadeado"] {
            let req = test::TestRequest::post()
                .uri("/produtos")
                .set_json(corpo_produto(nome, "10"))
                .to_request();
            test::call_service(&app, req).await;
        }

        let req = test::TestRequest::get().uri("/produtos?nome=Cade").to_request();
        let achados: Vec<Produto> = test::call_and_read_body_json(&app, req).await;
        let nomes: Vec<_> = achados.iter().map(|p| p.nome.as_str()).collect();
        assert_eq!(nomes, vec!["Cadeira", "Cadeado"]);

        let req = test::TestRequest::get().uri("/produtos?nome=").to_request();
        let todos: Vec<Produto> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(todos.len(), 3);

        let req = test::TestRequest::get().uri("/produtos?nome=xyz").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let vazio: Vec<Produto> = test::read_body_json(resp).await;
        assert!(vazio.is_empty());
    }

    #[actix_web::test]
    async fn atualizar_reflete_na_listagem() {
        let app = test::init_service(app_com_loja(LojaMemoria::default())).await;
        let req = test::TestRequest::post()
            .uri("/produtos")
            .set_json(corpo_produto("Monitor", "800"))
            .to_request();
        let criado: Produto = test::call_and_read_body_json(&app, req).await;

        let req = test::TestRequest::put()
            .uri(&format!("/produtos/{}", criado.id))
            .set_json(json!({
                "nome": "Monitor 27", "descricao": "IPS", "preco": "1200.50",
                "quantidade_estoque": 3, "id_categoria": 4
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let ack: MensagemResposta = test::read_body_json(resp).await;
        assert_eq!(ack.mensagem, "Produto atualizado com sucesso");

        let req = test::TestRequest::get().uri("/produtos").to_request();
        let lista: Vec<Produto> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(
            lista,
            vec![Produto {
                id: criado.id,
                nome: "Monitor 27".into(),
                descricao: "IPS".into(),
                preco: BigDecimal::from_str("1200.50").unwrap(),
                quantidade_estoque: 3,
                id_categoria: 4,
            }]
        );
    }

    #[actix_web::test]
    async fn atualizar_id_inexistente_ainda_responde_sucesso() {
        let app = test::init_service(app_com_loja(LojaMemoria::default())).await;
        let req = test::TestRequest::put()
            .uri("/produtos/5")
            .set_json(corpo_produto("Fantasma", "1"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn deletar_existente_e_depois_404() {
        let app = test::init_service(app_com_loja(LojaMemoria::default())).await;
        let req = test::TestRequest::post()
            .uri("/produtos")
            .set_json(corpo_produto("Cabo HDMI", "25"))
            .to_request();
        let criado: Produto = test::call_and_read_body_json(&app, req).await;
        let uri = format!("/produtos/{}", criado.id);

        let resp = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let ack: MensagemResposta = test::read_body_json(resp).await;
        assert_eq!(ack.mensagem, "Produto deletado com sucesso");

        let req = test::TestRequest::get().uri("/produtos").to_request();
        let lista: Vec<Produto> = test::call_and_read_body_json(&app, req).await;
        assert!(lista.is_empty());

        let resp = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let corpo: MensagemResposta = test::read_body_json(resp).await;
        assert_eq!(corpo.mensagem, PRODUTO_NAO_ENCONTRADO);
    }

    #[actix_web::test]
    async fn corpo_invalido_responde_400_com_mensagem() {
        let app = test::init_service(app_com_loja(LojaMemoria::default())).await;
        let req = test::TestRequest::post()
            .uri("/produtos")
            .set_json(json!({ "nome": "Sem preço" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let corpo: MensagemResposta = test::read_body_json(resp).await;
        assert!(corpo.mensagem.starts_with("ERRO: Dados inválidos"));

        let resp = test::call_service(&app, test::TestRequest::delete().uri("/produtos/abc").to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn falha_nao_identificada_responde_500() {
        let app = test::init_service(app_com_loja(LojaComFalha::desconhecida())).await;
        let req = test::TestRequest::delete().uri("/produtos/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let corpo: MensagemResposta = test::read_body_json(resp).await;
        assert_eq!(corpo.mensagem, MENSAGEM_NAO_IDENTIFICADO);
    }
}
