//! # Segmentador — Palavras e Sentenças por Casamento de Padrões
//!
//! Extrai segmentos ([`Segment`]) de um texto já limpo. A unidade de segmentação é o
//! fluxo de caracteres, não a linha: uma sentença pode atravessar quebras de linha.
//!
//! ## Semântica dos padrões
//!
//! - **Palavra**: corrida máxima de caracteres de palavra e apóstrofos, delimitada
//!   por fronteiras (`\b[\w'’]+\b`).
//! - **Sentença**: corrida máxima iniciando em caractere de palavra e terminando na
//!   primeira pontuação terminal, inclusive. Casamentos gulosos à esquerda, sem
//!   sobreposição, em ordem de documento.
//!
//! Os dois modos de sentença diferem no conjunto de terminadores e no pós-processamento:
//!
//! | Modo         | Terminadores | Pós-processamento                      |
//! |--------------|--------------|----------------------------------------|
//! | `Verbatim`   | `. ? !`      | nenhum (texto casado como está)        |
//! | `CorpusPrep` | `. ? ! : ;`  | espaços internos colapsados em um só   |
//!
//! `CorpusPrep` é a variante usada na preparação de datasets, onde cada sentença
//! vira um exemplo de treino em uma linha só.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Palavras: caracteres de palavra e apóstrofos entre fronteiras.
static RE_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[\w'\u{2019}]+\b").unwrap());

/// Sentenças, modo verbatim. `(?s)` permite atravessar quebras de linha.
static RE_SENTENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\w.*?[.?!]").unwrap());

/// Sentenças, modo de preparação de corpus: `:` e `;` também terminam.
static RE_SENTENCE_CORPUS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\w.*?[.?!:;]").unwrap());

/// Corridas de espaço em branco (para o colapso do modo `CorpusPrep`).
static RE_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Um segmento extraído do texto, na ordem de aparição. Não deduplicado.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Segment {
    Word(String),
    Sentence(String),
}

impl Segment {
    /// O texto do segmento, qualquer que seja o tipo.
    pub fn text(&self) -> &str {
        match self {
            Segment::Word(text) | Segment::Sentence(text) => text,
        }
    }
}

/// Modos de extração de sentenças disponíveis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentenceMode {
    /// Terminadores `.?!`; o texto casado é retornado sem alterações.
    Verbatim,
    /// Terminadores `.?!:;` e espaços internos colapsados — variante de
    /// preparação de corpus, uma sentença por exemplo.
    CorpusPrep,
}

impl Default for SentenceMode {
    fn default() -> Self {
        SentenceMode::Verbatim
    }
}

/// Extrai as palavras do texto, em ordem de documento.
///
/// Função pura: o mesmo texto produz sempre a mesma sequência.
pub fn extract_words(text: &str) -> Vec<String> {
    RE_WORD
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Extrai as sentenças do texto no modo [`SentenceMode::Verbatim`].
pub fn extract_sentences(text: &str) -> Vec<String> {
    extract_sentences_with_mode(text, SentenceMode::Verbatim)
}

/// Extrai as sentenças do texto com o modo especificado.
pub fn extract_sentences_with_mode(text: &str, mode: SentenceMode) -> Vec<String> {
    let pattern = match mode {
        SentenceMode::Verbatim => &RE_SENTENCE,
        SentenceMode::CorpusPrep => &RE_SENTENCE_CORPUS,
    };
    pattern
        .find_iter(text)
        .map(|m| match mode {
            SentenceMode::Verbatim => m.as_str().to_string(),
            SentenceMode::CorpusPrep => RE_WHITESPACE.replace_all(m.as_str(), " ").into_owned(),
        })
        .collect()
}

/// Extrai palavras como [`Segment::Word`].
pub fn word_segments(text: &str) -> Vec<Segment> {
    extract_words(text).into_iter().map(Segment::Word).collect()
}

/// Extrai sentenças como [`Segment::Sentence`].
pub fn sentence_segments(text: &str, mode: SentenceMode) -> Vec<Segment> {
    extract_sentences_with_mode(text, mode)
        .into_iter()
        .map(Segment::Sentence)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_words_basic() {
        let words = extract_words("the cat's hat, o'er there");
        assert_eq!(words, vec!["the", "cat's", "hat", "o'er", "there"]);
    }

    #[test]
    fn test_extract_words_count_matches_scan() {
        // completude: o total casa com uma contagem independente de corridas
        let text = "one two, three... four'n five";
        let independent = text
            .split(|c: char| !(c.is_alphanumeric() || c == '_' || c == '\'' || c == '\u{2019}'))
            .filter(|run| run.chars().any(char::is_alphanumeric))
            .count();
        assert_eq!(extract_words(text).len(), independent);
    }

    #[test]
    fn test_extract_sentences_verbatim() {
        let sentences = extract_sentences("First one. Second one! A third?");
        assert_eq!(sentences, vec!["First one.", "Second one!", "A third?"]);
    }

    #[test]
    fn test_sentences_cross_line_boundaries() {
        let sentences = extract_sentences("Shall I compare thee\nto a summer's day?");
        assert_eq!(sentences.len(), 1);
        assert!(sentences[0].contains('\n'));
    }

    #[test]
    fn test_sentences_always_end_in_terminator() {
        let text = "Done. Unfinished trailing fragment";
        let sentences = extract_sentences(text);
        assert_eq!(sentences, vec!["Done."]);
        for sentence in extract_sentences_with_mode(text, SentenceMode::CorpusPrep) {
            let last = sentence.chars().last().unwrap();
            assert!(".?!:;".contains(last));
        }
    }

    #[test]
    fn test_corpus_prep_extra_terminators_and_collapse() {
        let sentences =
            extract_sentences_with_mode("Hark:  the  herald\nsings; loudly.", SentenceMode::CorpusPrep);
        assert_eq!(sentences, vec!["Hark:", "the herald sings;", "loudly."]);
    }

    #[test]
    fn test_segments_preserve_order() {
        let segments = word_segments("b a b");
        assert_eq!(
            segments,
            vec![
                Segment::Word("b".into()),
                Segment::Word("a".into()),
                Segment::Word("b".into()),
            ]
        );
        assert_eq!(segments[0].text(), "b");
    }
}
