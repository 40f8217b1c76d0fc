//! # Oráculo de Rimas — Serviço Externo Injetável
//!
//! O analisador de rimas depende apenas de "dada uma palavra, devolva as palavras
//! consideradas rimas dela". Essa capacidade é modelada pela trait [`RhymeOracle`]
//! para que os testes substituam a rede por um stub determinístico.
//!
//! A implementação real, [`RhymeBrainClient`], consulta a API pública do RhymeBrain
//! (`https://rhymebrain.com/talk?function=getRhymes&word=<w>`). Cada resposta é uma
//! lista JSON de candidatos com uma pontuação numérica de força de rima (máx. 300),
//! utilizável para filtragem opcional por limiar.
//!
//! Toda chamada é limitada por [`ORACLE_TIMEOUT`]; estourado o prazo, o chamador
//! trata o oráculo como indisponível e segue apenas com a heurística local.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::OracleError;

/// Prazo máximo de uma consulta ao oráculo.
pub const ORACLE_TIMEOUT: Duration = Duration::from_secs(8);

const RHYMEBRAIN_URL: &str = "https://rhymebrain.com/talk";

/// Um candidato a rima devolvido pelo oráculo.
///
/// Campos extras da resposta (frequência, sílabas, flags) são ignorados na
/// desserialização; só a palavra e a pontuação interessam ao núcleo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RhymeCandidate {
    pub word: String,
    #[serde(default)]
    pub score: i64,
}

/// Capacidade de consulta de rimas, injetável no analisador.
pub trait RhymeOracle: Send + Sync {
    /// Devolve os candidatos a rima para `word` (minúscula), em ordem do serviço.
    fn rhymes(&self, word: &str) -> Result<Vec<RhymeCandidate>, OracleError>;
}

/// Cliente HTTP do RhymeBrain.
pub struct RhymeBrainClient {
    client: reqwest::blocking::Client,
    base_url: String,
    max_results: Option<u32>,
    min_score: i64,
}

impl RhymeBrainClient {
    /// Cria o cliente apontando para o serviço público, com o timeout padrão.
    pub fn new() -> Result<Self, OracleError> {
        Self::with_base_url(RHYMEBRAIN_URL)
    }

    /// Cria o cliente apontando para outra URL base (útil contra um serviço local).
    pub fn with_base_url(base_url: &str) -> Result<Self, OracleError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(ORACLE_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.to_string(),
            max_results: None,
            min_score: 0,
        })
    }

    /// Limita o número de resultados pedidos ao serviço.
    pub fn max_results(mut self, n: u32) -> Self {
        self.max_results = Some(n);
        self
    }

    /// Descarta candidatos com pontuação abaixo de `score` (0 = sem filtro).
    pub fn min_score(mut self, score: i64) -> Self {
        self.min_score = score;
        self
    }
}

impl RhymeOracle for RhymeBrainClient {
    fn rhymes(&self, word: &str) -> Result<Vec<RhymeCandidate>, OracleError> {
        let mut query: Vec<(&str, String)> = vec![
            ("function", "getRhymes".to_string()),
            ("word", word.to_string()),
        ];
        if let Some(n) = self.max_results {
            query.push(("maxResults", n.to_string()));
        }

        let response = self.client.get(&self.base_url).query(&query).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(OracleError::Status(status.as_u16()));
        }
        let body = response.text()?;
        parse_payload(&body, self.min_score)
    }
}

/// Desserializa o payload do serviço e aplica o filtro de pontuação.
fn parse_payload(body: &str, min_score: i64) -> Result<Vec<RhymeCandidate>, OracleError> {
    let mut candidates: Vec<RhymeCandidate> = serde_json::from_str(body)?;
    if min_score > 0 {
        candidates.retain(|c| c.score >= min_score);
    }
    Ok(candidates)
}
