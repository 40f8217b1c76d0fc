//! # bardo-core — Preparação de Texto Literário e Detecção de Rimas
//!
//! Este crate implementa o núcleo de um pipeline para preparar texto literário bruto
//! (ex: obras do Project Gutenberg) para consumo por modelos de linguagem, além de um
//! motor de detecção de relações de rima entre versos. Ele foi projetado para ser
//! didático, modular e extensível.
//!
//! ## Arquitetura do Sistema
//!
//! Três componentes compostos como um pipeline, com o motor de rimas operando de forma
//! independente sobre a saída do limpador:
//!
//! 1.  **Limpeza** ([`cleaner`]): Reescrita sequencial e configurável do texto bruto
//!     (isolamento de metadados, remoção de referências, expansão de contrações,
//!     remoção de aspas e ênfases, normalização de espaços).
//! 2.  **Segmentação** ([`segmenter`]): Extração de palavras e sentenças por casamento
//!     de padrões sobre o texto já limpo.
//! 3.  **Rimas** ([`rhyme`]): Dado um bloco de versos, extrai a palavra final de cada
//!     verso e computa a relação de rima par-a-par, combinando um oráculo externo
//!     ([`oracle`]) com uma heurística local de similaridade de sufixo.
//!
//! Todo o estado é local a uma invocação: nada é persistido nem cacheado entre chamadas.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use bardo_core::{extract_sentences, TextCleaner};
//!
//! let cleaner = TextCleaner::new();
//!
//! // expande contrações elididas e descarta marcação de ênfase
//! let text = cleaner.substitute_contractions("prais'd be the _bard_", None);
//! let text = cleaner.remove_emphasis(&text);
//! assert_eq!(text, "praised be the bard");
//!
//! // segmenta o resultado em sentenças
//! let sentences = extract_sentences("To be, or not to be? That is the question.");
//! assert_eq!(sentences.len(), 2);
//! ```
//!
//! ## Módulos Principais
//!
//! - [`cleaner`]: Operações de limpeza puras (`&str -> String`), componíveis em qualquer ordem.
//! - [`profiles`]: Registro de perfis de limpeza (delimitadores de metadados como dados, não código).
//! - [`segmenter`]: Extração de palavras e sentenças.
//! - [`rhyme`]: Analisador de rimas e a tabela de relações resultante.
//! - [`oracle`]: Oráculo de rimas injetável (cliente RhymeBrain e a trait para stubs de teste).

pub mod cleaner;
pub mod demo;
pub mod error;
pub mod oracle;
pub mod profiles;
pub mod rhyme;
pub mod segmenter;

pub use cleaner::TextCleaner;
pub use error::{ConfigError, OracleError};
pub use oracle::{RhymeBrainClient, RhymeCandidate, RhymeOracle};
pub use profiles::{CleaningProfile, DiscardSide, ProfileRegistry};
pub use rhyme::{RelationSource, RhymeAnalyzer, RhymeEntry, RhymeRelation, RhymeTable};
pub use segmenter::{extract_sentences, extract_words, Segment, SentenceMode};
