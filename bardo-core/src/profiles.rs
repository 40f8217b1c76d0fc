//! # Perfis de Limpeza — Delimitadores de Metadados como Dados
//!
//! Um *perfil de limpeza* descreve quais marcadores estruturais delimitam as regiões
//! descartáveis de um documento (ex: cabeçalho e rodapé do Project Gutenberg). Cada
//! entrada do perfil carrega um padrão e o lado a descartar (`pre` ou `post`), e as
//! entradas são aplicadas na ordem de registro.
//!
//! ## Por que perfis são dados, não código?
//!
//! Novos formatos de corpus são adicionados registrando um perfil (inclusive
//! desserializado de JSON via [`ProfileSpec`]), sem tocar no algoritmo de limpeza.
//! O registro é imutável depois que o [`crate::cleaner::TextCleaner`] é construído,
//! portanto seguro para compartilhar entre threads.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Qual lado do delimitador é descartado ao dividir o texto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscardSide {
    /// Descarta tudo **antes** do delimitador (mantém o que vem depois).
    Pre,
    /// Descarta tudo **depois** do delimitador (mantém o que vem antes).
    Post,
}

/// Uma entrada de perfil: um delimitador compilado e o lado a descartar.
#[derive(Debug, Clone)]
pub struct ProfileEntry {
    /// Nome descritivo da entrada (ex: "header", "footer").
    pub name: String,
    /// Padrão que localiza o delimitador no texto.
    pub pattern: Regex,
    pub discard: DiscardSide,
}

/// Um perfil de limpeza nomeado: lista **ordenada** de entradas.
///
/// Cada divisão subsequente opera sobre o fragmento sobrevivente da anterior,
/// então a ordem de registro importa (header antes de footer).
#[derive(Debug, Clone)]
pub struct CleaningProfile {
    pub name: String,
    pub entries: Vec<ProfileEntry>,
}

/// Forma declarativa de um perfil, desserializável de JSON.
///
/// # Exemplo
///
/// ```json
/// {
///   "name": "gutenberg",
///   "entries": [
///     { "name": "header", "pattern": "\\*{3}\\s*START.+\\s*\\*{3}", "discard": "pre" },
///     { "name": "footer", "pattern": "\\*{3}\\s*END.+\\s*\\*{3}", "discard": "post" }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileSpec {
    pub name: String,
    pub entries: Vec<EntrySpec>,
}

/// Uma entrada na forma declarativa: o padrão ainda como string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntrySpec {
    pub name: String,
    pub pattern: String,
    pub discard: DiscardSide,
}

/// Registro de perfis de limpeza, consultado por nome.
#[derive(Debug, Clone)]
pub struct ProfileRegistry {
    profiles: Vec<CleaningProfile>,
}

impl ProfileRegistry {
    /// Registro vazio, para quem quer controle total sobre os perfis.
    pub fn empty() -> Self {
        Self { profiles: Vec::new() }
    }

    /// Registro com os perfis embutidos. Hoje apenas `gutenberg`:
    /// cabeçalho `*** START ... ***` (descarta o que vem antes) e
    /// rodapé `*** END ... ***` (descarta o que vem depois).
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.register(CleaningProfile {
            name: "gutenberg".to_string(),
            entries: vec![
                ProfileEntry {
                    name: "header".to_string(),
                    pattern: Regex::new(r"\*{3}\s*START.+\s*\*{3}").unwrap(),
                    discard: DiscardSide::Pre,
                },
                ProfileEntry {
                    name: "footer".to_string(),
                    pattern: Regex::new(r"\*{3}\s*END.+\s*\*{3}").unwrap(),
                    discard: DiscardSide::Post,
                },
            ],
        });
        registry
    }

    /// Registra um perfil já compilado. Um perfil com nome repetido substitui o anterior.
    pub fn register(&mut self, profile: CleaningProfile) {
        self.profiles.retain(|p| p.name != profile.name);
        self.profiles.push(profile);
    }

    /// Registra um perfil a partir da forma declarativa, compilando os padrões.
    pub fn register_spec(&mut self, spec: &ProfileSpec) -> Result<(), ConfigError> {
        let mut entries = Vec::with_capacity(spec.entries.len());
        for entry in &spec.entries {
            let pattern =
                Regex::new(&entry.pattern).map_err(|source| ConfigError::InvalidPattern {
                    profile: spec.name.clone(),
                    entry: entry.name.clone(),
                    source,
                })?;
            entries.push(ProfileEntry {
                name: entry.name.clone(),
                pattern,
                discard: entry.discard,
            });
        }
        self.register(CleaningProfile {
            name: spec.name.clone(),
            entries,
        });
        Ok(())
    }

    /// Busca um perfil pelo nome.
    pub fn get(&self, name: &str) -> Option<&CleaningProfile> {
        self.profiles.iter().find(|p| p.name == name)
    }

    /// Nomes dos perfis registrados, na ordem de registro.
    pub fn names(&self) -> Vec<&str> {
        self.profiles.iter().map(|p| p.name.as_str()).collect()
    }
}

impl Default for ProfileRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_gutenberg() {
        let registry = ProfileRegistry::builtin();
        let profile = registry.get("gutenberg").expect("perfil embutido");
        assert_eq!(profile.entries.len(), 2);
        assert_eq!(profile.entries[0].discard, DiscardSide::Pre);
        assert_eq!(profile.entries[1].discard, DiscardSide::Post);
    }

    #[test]
    fn test_register_spec_from_json() {
        let spec: ProfileSpec = serde_json::from_str(
            r#"{
                "name": "folio",
                "entries": [
                    { "name": "colophon", "pattern": "FINIS", "discard": "post" }
                ]
            }"#,
        )
        .unwrap();

        let mut registry = ProfileRegistry::builtin();
        registry.register_spec(&spec).unwrap();
        assert!(registry.get("folio").is_some());
        assert!(registry.get("gutenberg").is_some());
    }

    #[test]
    fn test_register_spec_invalid_pattern() {
        let spec = ProfileSpec {
            name: "broken".to_string(),
            entries: vec![EntrySpec {
                name: "header".to_string(),
                pattern: "(".to_string(),
                discard: DiscardSide::Pre,
            }],
        };
        let mut registry = ProfileRegistry::empty();
        let err = registry.register_spec(&spec).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPattern { .. }));
    }

    #[test]
    fn test_register_replaces_same_name() {
        let mut registry = ProfileRegistry::builtin();
        registry.register(CleaningProfile {
            name: "gutenberg".to_string(),
            entries: vec![],
        });
        assert_eq!(registry.names(), vec!["gutenberg"]);
        assert!(registry.get("gutenberg").unwrap().entries.is_empty());
    }
}
