//! # Taxonomia de Erros
//!
//! Dois tipos de erro cobrem todo o núcleo:
//!
//! - [`ConfigError`]: erro de configuração/programação (perfil de limpeza inexistente,
//!   padrão inválido ao registrar um perfil). Surge imediatamente ao chamador, sem retry.
//! - [`OracleError`]: falha do serviço externo de rimas (transporte, timeout, payload
//!   mal-formado). É sempre recuperado dentro do [`crate::rhyme::RhymeAnalyzer`],
//!   que degrada para a heurística local — nunca chega ao chamador da análise.
//!
//! Tipos de contração desconhecidos não são erro: são ignorados em silêncio
//! (permissividade documentada em [`crate::cleaner`]).

use thiserror::Error;

/// Erro de configuração do pipeline de limpeza.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// O perfil pedido não existe no registro. Fatal: não há região "segura"
    /// padrão a manter quando os delimitadores são desconhecidos.
    #[error("perfil de limpeza desconhecido: {0:?}")]
    UnknownProfile(String),

    /// Um padrão de delimitador não compilou ao registrar um perfil.
    #[error("padrão inválido na entrada {entry:?} do perfil {profile:?}")]
    InvalidPattern {
        profile: String,
        entry: String,
        #[source]
        source: regex::Error,
    },
}

/// Falha ao consultar o oráculo externo de rimas.
#[derive(Debug, Error)]
pub enum OracleError {
    /// Erro de transporte (conexão, DNS, timeout).
    #[error("falha de transporte ao consultar o oráculo de rimas")]
    Http(#[from] reqwest::Error),

    /// A resposta não é o JSON esperado.
    #[error("resposta do oráculo de rimas mal-formada")]
    Payload(#[from] serde_json::Error),

    /// O serviço respondeu com status HTTP de erro.
    #[error("oráculo de rimas respondeu com status {0}")]
    Status(u16),
}
