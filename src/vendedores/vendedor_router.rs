// src/vendedores/vendedor_router.rs

use actix_web::{delete, get, post, web, HttpResponse};
use tracing::instrument;

use super::vendedor_structs::NovoVendedor;

use crate::erros::{ErroApi, Result};
use crate::shared::shared_structs::MensagemResposta;
use crate::AppState;

pub const VENDEDOR_NAO_ENCONTRADO: &str = "Vendedor não encontrado";

/// Rota para listar todos os vendedores.
#[get("/vendedor")]
#[instrument(name = "rota::listar_vendedores", skip(data))]
pub async fn buscar_vendedores(data: web::Data<AppState>) -> Result<HttpResponse> {
    let vendedores = data.loja.listar_vendedores().await?;
    tracing::info!(quantidade = vendedores.len(), "Vendedores listados");
    Ok(HttpResponse::Ok().json(vendedores))
}

/// Rota para cadastrar um vendedor. Devolve o registro com o id gerado.
///
/// CPF repetido cai na falha de entrada duplicada (400).
#[post("/vendedor")]
#[instrument(name = "rota::cadastrar_vendedor", skip(data, item))]
pub async fn cadastrar_vendedor(
    data: web::Data<AppState>,
    item: web::Json<NovoVendedor>,
) -> Result<HttpResponse> {
    // Insere o vendedor e devolve o registro já com o id gerado
    let vendedor = data.loja.cadastrar_vendedor(&item).await?;
    tracing::info!(id = vendedor.id, "Vendedor cadastrado");
    Ok(HttpResponse::Ok().json(vendedor))
}

#[get("/vendedor/{id}")]
#[instrument(name = "rota::buscar_vendedor", skip(data, path), fields(id = %path.as_ref()))]
pub async fn buscar_vendedor_por_id(
    data: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    // Nenhuma linha para o id: 404 com a mensagem fixa
    match data.loja.buscar_vendedor(path.into_inner()).await? {
        Some(vendedor) => Ok(HttpResponse::Ok().json(vendedor)),
        None => Err(ErroApi::NaoEncontrado(VENDEDOR_NAO_ENCONTRADO)),
    }
}

#[delete("/vendedor/{id}")]
#[instrument(name = "rota::deletar_vendedor", skip(data, path), fields(id = %path.as_ref()))]
pub async fn deletar_vendedor(
    data: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    if data.loja.deletar_vendedor(id).await? == 0 {
        return Err(ErroApi::NaoEncontrado(VENDEDOR_NAO_ENCONTRADO));
    }
    tracing::info!(id, "Vendedor deletado");
    Ok(HttpResponse::Ok().json(MensagemResposta::new("Vendedor deletado com sucesso")))
}
