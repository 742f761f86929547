// src/erros/erro_banco.rs

use std::io;

use actix_web::http::StatusCode;
use sqlx::mysql::MySqlDatabaseError;

/// Falhas conhecidas do banco de dados, cada uma com uma mensagem fixa
/// devolvida ao cliente.
///
/// Para reconhecer um novo tipo de falha basta acrescentar a variante aqui,
/// em `do_codigo_mysql`/`classificar` e em `mensagem`; as rotas não mudam.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErroBanco {
    /// ECONNREFUSED: servidor do banco desligado ou inacessível.
    ConexaoRecusada,
    /// ER_BAD_DB_ERROR (1049)
    BancoNaoEncontrado,
    /// ER_ACCESS_DENIED_ERROR (1045)
    AcessoNegado,
    /// ER_NO_SUCH_TABLE (1146)
    TabelaNaoEncontrada,
    /// ER_PARSE_ERROR (1064)
    ErroSintaxe,
    /// ER_DUP_ENTRY (1062)
    EntradaDuplicada,
}

impl ErroBanco {
    pub const TODOS: [ErroBanco; 6] = [
        ErroBanco::ConexaoRecusada,
        ErroBanco::BancoNaoEncontrado,
        ErroBanco::AcessoNegado,
        ErroBanco::TabelaNaoEncontrada,
        ErroBanco::ErroSintaxe,
        ErroBanco::EntradaDuplicada,
    ];

    /// Traduz o número de erro do servidor MySQL.
    pub fn do_codigo_mysql(numero: u16) -> Option<Self> {
        match numero {
            1049 => Some(ErroBanco::BancoNaoEncontrado),
            1045 => Some(ErroBanco::AcessoNegado),
            1146 => Some(ErroBanco::TabelaNaoEncontrada),
            1064 => Some(ErroBanco::ErroSintaxe),
            1062 => Some(ErroBanco::EntradaDuplicada),
            _ => None,
        }
    }

    /// Classifica um erro do sqlx. `None` significa falha não identificada.
    ///
    /// O pool repete a conexão recusada até estourar o tempo de aquisição,
    /// por isso `PoolTimedOut` também conta como banco desligado.
    pub fn classificar(erro: &sqlx::Error) -> Option<Self> {
        match erro {
            sqlx::Error::Io(e) if e.kind() == io::ErrorKind::ConnectionRefused => {
                Some(ErroBanco::ConexaoRecusada)
            }
            // Também cai aqui o pool esgotado sob carga (todas as conexões em uso
            // até o fim de DB_TIMEOUT_SEGUNDOS): a resposta é a mesma do banco desligado.
            sqlx::Error::PoolTimedOut => Some(ErroBanco::ConexaoRecusada),
            sqlx::Error::Database(e) => e
                .try_downcast_ref::<MySqlDatabaseError>()
                .and_then(|e| Self::do_codigo_mysql(e.number())),
            _ => None,
        }
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    pub fn mensagem(&self) -> &'static str {
        match self {
            ErroBanco::ConexaoRecusada => "ERRO: LIGUE O SERVIDOR DO BANCO (ex: Laragon ou XAMPP)",
            ErroBanco::BancoNaoEncontrado => "ERRO: Banco de dados não encontrado",
            ErroBanco::AcessoNegado => "ERRO: Acesso ao banco de dados negado",
            ErroBanco::TabelaNaoEncontrada => "ERRO: Tabela não encontrada",
            ErroBanco::ErroSintaxe => "ERRO: Erro de sintaxe na query",
            ErroBanco::EntradaDuplicada => "ERRO: Entrada duplicada, verifique os dados",
        }
    }
}
