// src/config.rs

use std::env;
use std::time::Duration;

use crate::erros::ErroInicializacao;

/// Conexão usada quando `DATABASE_URL` não está definida (Laragon/XAMPP local).
pub const DATABASE_URL_PADRAO: &str = "mysql://root:@localhost:3306/gerenciamento_produtos";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub servidor: ServidorConfig,
    pub banco: BancoConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone)]
pub struct ServidorConfig {
    pub host: String,
    pub porta: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipoArmazenamento {
    MySql,
    /// Sem banco: os dados vivem só enquanto o processo estiver rodando.
    Memoria,
}

#[derive(Debug, Clone)]
pub struct BancoConfig {
    pub armazenamento: TipoArmazenamento,
    pub url: String,
    pub max_conexoes: u32,
    pub timeout_aquisicao: Duration,
    pub executar_migracoes: bool,
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub origens: Vec<String>,
}

impl CorsConfig {
    pub fn qualquer_origem(&self) -> bool {
        self.origens.iter().any(|o| o == "*")
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ErroInicializacao> {
        Self::from_lookup(|nome| env::var(nome).ok())
    }

    /// Monta a configuração a partir de uma função de busca, o que permite
    /// testar sem mexer nas variáveis de ambiente do processo.
    pub fn from_lookup<F>(buscar: F) -> Result<Self, ErroInicializacao>
    where
        F: Fn(&str) -> Option<String>,
    {
        let ler = |nome: &'static str, padrao: &str| buscar(nome).unwrap_or_else(|| padrao.to_string());

        let armazenamento = match ler("ARMAZENAMENTO", "mysql").to_lowercase().as_str() {
            "mysql" => TipoArmazenamento::MySql,
            "memoria" => TipoArmazenamento::Memoria,
            outro => {
                return Err(ErroInicializacao::VariavelInvalida {
                    nome: "ARMAZENAMENTO",
                    valor: outro.to_string(),
                })
            }
        };

        Ok(Self {
            servidor: ServidorConfig {
                host: ler("SERVIDOR_HOST", "0.0.0.0"),
                porta: numero("SERVIDOR_PORTA", ler("SERVIDOR_PORTA", "8000"))?,
            },
            banco: BancoConfig {
                armazenamento,
                url: ler("DATABASE_URL", DATABASE_URL_PADRAO),
                max_conexoes: numero("DB_MAX_CONEXOES", ler("DB_MAX_CONEXOES", "10"))?,
                timeout_aquisicao: Duration::from_secs(numero(
                    "DB_TIMEOUT_SEGUNDOS",
                    ler("DB_TIMEOUT_SEGUNDOS", "5"),
                )?),
                executar_migracoes: booleano(
                    "EXECUTAR_MIGRACOES",
                    ler("EXECUTAR_MIGRACOES", "false"),
                )?,
            },
            cors: CorsConfig {
                origens: origens("CORS_ORIGENS", ler("CORS_ORIGENS", "*"))?,
            },
        })
    }

    pub fn endereco_servidor(&self) -> String {
        format!("{}:{}", self.servidor.host, self.servidor.porta)
    }
}

fn numero<T: std::str::FromStr>(nome: &'static str, valor: String) -> Result<T, ErroInicializacao> {
    valor
        .trim()
        .parse()
        .map_err(|_| ErroInicializacao::VariavelInvalida { nome, valor })
}

// Lista separada por vírgulas; vazia seria um CORS que não libera ninguém.
fn origens(nome: &'static str, valor: String) -> Result<Vec<String>, ErroInicializacao> {
    let origens: Vec<String> = valor
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    if origens.is_empty() {
        return Err(ErroInicializacao::VariavelInvalida { nome, valor });
    }
    Ok(origens)
}

fn booleano(nome: &'static str, valor: String) -> Result<bool, ErroInicializacao> {
    match valor.trim().to_lowercase().as_str() {
        "1" | "true" | "sim" => Ok(true),
        "0" | "false" | "nao" | "não" => Ok(false),
        _ => Err(ErroInicializacao::VariavelInvalida { nome, valor }),
    }
}
