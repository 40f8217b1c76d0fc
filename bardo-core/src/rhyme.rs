//! # Analisador de Rimas — Oráculo + Heurística de Sufixo
//!
//! Dado um bloco de versos, extrai a palavra final de cada verso e computa a relação
//! de rima par-a-par, produzindo uma [`RhymeTable`].
//!
//! ## Algoritmo
//!
//! 1. Cada verso é normalizado para minúsculas; o último token separado por espaço é
//!    a palavra candidata, com no máximo um caractere final de pontuação removido.
//! 2. O oráculo é consultado **uma vez por palavra distinta por invocação** (cache
//!    local à chamada, nunca entre chamadas); as consultas são independentes e
//!    correm em paralelo no pool do rayon.
//! 3. Para cada par ordenado (i, j), i != j: se a palavra de j aparece no conjunto de
//!    rimas da palavra de i, é rima pelo oráculo; senão, vale a heurística de
//!    sufixo — os caracteres finais em comum devem passar de
//!    [`SUFFIX_RHYME_THRESHOLD`].
//!
//! O oráculo dá rimas com fundamento linguístico; a heurística é um reserva barato e
//! sem dependências que pega rimas ortográficas (finais idênticos) que o oráculo
//! perde ou não alcança. Ela é propositalmente crua (identidade de caracteres, não
//! fonética): aproximação, não garantia de correção.
//!
//! ## Falha do oráculo
//!
//! Indisponibilidade (erro de rede, payload inválido, timeout) **não aborta** a
//! computação: a palavra afetada degrada para heurística pura e o chamador recebe
//! uma tabela completa em qualquer condição de rede.
//!
//! ## Direcionalidade
//!
//! As relações são registradas da perspectiva de cada verso, de forma independente:
//! i→j e j→i são computadas separadamente e podem discordar se o conjunto de rimas
//! do oráculo for assimétrico. A assimetria é preservada de propósito (e testada).

use std::collections::{HashMap, HashSet};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::oracle::{RhymeBrainClient, RhymeOracle};

/// A heurística considera rima quando o número de caracteres finais em comum
/// **excede** este limiar ("sat"/"mat" compartilham só "at" e não passam).
pub const SUFFIX_RHYME_THRESHOLD: usize = 2;

/// Pontuação aceita como resto final de um verso.
const TRAILING_PUNCTUATION: &[char] = &['.', ',', '?', '!', ';', ':'];

/// De onde veio o veredito de uma relação.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationSource {
    /// O oráculo externo listou a palavra como rima.
    Oracle,
    /// A heurística local de sufixo decidiu (inclusive quando decidiu "não").
    Heuristic,
}

/// A relação de rima entre a palavra do verso dono e a palavra de outro verso.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RhymeRelation {
    /// A palavra candidata do outro verso.
    pub word: String,
    pub is_rhyme: bool,
    pub source: RelationSource,
}

/// As relações de um verso contra todos os outros versos do bloco.
///
/// Invariante: para um bloco de N versos, `relations` tem exatamente N-1 entradas
/// (auto-comparação excluída), na ordem crescente do índice do outro verso.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RhymeEntry {
    /// Índice do verso no bloco de entrada.
    pub line: usize,
    /// A palavra candidata do verso (minúscula, sem pontuação final).
    pub word: String,
    pub relations: Vec<RhymeRelation>,
}

/// A tabela de rimas de um bloco de versos.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RhymeTable {
    pub entries: Vec<RhymeEntry>,
}

impl RhymeTable {
    /// A primeira entrada cuja palavra candidata é `word`.
    ///
    /// Versos distintos podem terminar na mesma palavra, por isso a tabela é uma
    /// lista de entradas por verso e não um mapa por palavra.
    pub fn get(&self, word: &str) -> Option<&RhymeEntry> {
        self.entries.iter().find(|entry| entry.word == word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Alinha as duas palavras pelo final e conta os caracteres iguais varrendo
/// do último para dentro, parando na primeira diferença.
///
/// # Exemplos
///
/// ```rust
/// use bardo_core::rhyme::suffix_similarity;
///
/// assert_eq!(suffix_similarity("increase", "decease"), 4); // "ease"
/// assert_eq!(suffix_similarity("sat", "mat"), 2);          // "at"
/// assert_eq!(suffix_similarity("day", "night"), 0);
/// ```
pub fn suffix_similarity(a: &str, b: &str) -> usize {
    a.chars()
        .rev()
        .zip(b.chars().rev())
        .take_while(|(x, y)| x == y)
        .count()
}

/// A palavra candidata a rima de um verso: último token separado por espaço,
/// minúscula, com no máximo um caractere final de pontuação removido.
/// Verso em branco produz a string vazia (que não rima com nada).
pub fn candidate_word(line: &str) -> String {
    let mut word = line
        .to_lowercase()
        .split_whitespace()
        .last()
        .unwrap_or_default()
        .to_string();
    if word.ends_with(TRAILING_PUNCTUATION) {
        word.pop();
    }
    word
}

/// O analisador de rimas. Guarda o oráculo injetado; todo o resto do estado
/// é local a cada invocação.
pub struct RhymeAnalyzer {
    oracle: Box<dyn RhymeOracle>,
}

impl RhymeAnalyzer {
    /// Cria o analisador com o cliente RhymeBrain padrão.
    pub fn new() -> Result<Self, crate::error::OracleError> {
        Ok(Self::with_oracle(Box::new(RhymeBrainClient::new()?)))
    }

    /// Cria o analisador com um oráculo injetado (stub de teste, serviço local).
    pub fn with_oracle(oracle: Box<dyn RhymeOracle>) -> Self {
        Self { oracle }
    }

    /// Analisa um blob de texto: divide em linhas não vazias (aparadas) e delega
    /// a [`analyze_lines`](Self::analyze_lines).
    pub fn analyze_block(&self, text: &str) -> RhymeTable {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        self.analyze_lines(&lines)
    }

    /// Analisa uma sequência ordenada explícita de versos.
    pub fn analyze_lines(&self, lines: &[&str]) -> RhymeTable {
        let words: Vec<String> = lines.iter().map(|line| candidate_word(line)).collect();

        // uma consulta por palavra distinta, em paralelo; resultados juntados
        // antes da montagem da tabela
        let distinct: HashSet<&str> = words.iter().map(String::as_str).collect();
        let rhyme_sets: HashMap<&str, HashSet<String>> = distinct
            .into_par_iter()
            .map(|word| (word, self.lookup(word)))
            .collect();

        let mut entries = Vec::with_capacity(words.len());
        for (i, word_i) in words.iter().enumerate() {
            let rhyme_set = &rhyme_sets[word_i.as_str()];
            let mut relations = Vec::with_capacity(words.len().saturating_sub(1));
            for (j, word_j) in words.iter().enumerate() {
                if i == j {
                    continue;
                }
                let (is_rhyme, source) = if rhyme_set.contains(word_j) {
                    (true, RelationSource::Oracle)
                } else {
                    (
                        suffix_similarity(word_i, word_j) > SUFFIX_RHYME_THRESHOLD,
                        RelationSource::Heuristic,
                    )
                };
                relations.push(RhymeRelation {
                    word: word_j.clone(),
                    is_rhyme,
                    source,
                });
            }
            entries.push(RhymeEntry {
                line: i,
                word: word_i.clone(),
                relations,
            });
        }
        RhymeTable { entries }
    }

    /// Consulta o oráculo para uma palavra. Falha degrada para o conjunto vazio:
    /// a palavra segue só com a heurística, e nenhum erro escapa ao chamador.
    fn lookup(&self, word: &str) -> HashSet<String> {
        if word.is_empty() {
            return HashSet::new();
        }
        match self.oracle.rhymes(word) {
            Ok(candidates) => candidates
                .into_iter()
                .map(|c| c.word.to_lowercase())
                .collect(),
            Err(err) => {
                warn!(
                    "oráculo de rimas indisponível para {:?} ({}); seguindo só com a heurística",
                    word, err
                );
                HashSet::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OracleError;
    use crate::oracle::RhymeCandidate;

    /// Oráculo determinístico: mapa fixo palavra -> rimas.
    struct StubOracle(HashMap<&'static str, Vec<&'static str>>);

    impl RhymeOracle for StubOracle {
        fn rhymes(&self, word: &str) -> Result<Vec<RhymeCandidate>, OracleError> {
            Ok(self
                .0
                .get(word)
                .map(|rhymes| {
                    rhymes
                        .iter()
                        .map(|w| RhymeCandidate {
                            word: w.to_string(),
                            score: 300,
                        })
                        .collect()
                })
                .unwrap_or_default())
        }
    }

    /// Oráculo que não conhece palavra nenhuma.
    struct EmptyOracle;

    impl RhymeOracle for EmptyOracle {
        fn rhymes(&self, _word: &str) -> Result<Vec<RhymeCandidate>, OracleError> {
            Ok(vec![])
        }
    }

    /// Oráculo que falha em toda chamada.
    struct FailingOracle;

    impl RhymeOracle for FailingOracle {
        fn rhymes(&self, _word: &str) -> Result<Vec<RhymeCandidate>, OracleError> {
            Err(OracleError::Status(503))
        }
    }

    #[test]
    fn test_candidate_word() {
        assert_eq!(candidate_word("The cat sat."), "sat");
        assert_eq!(candidate_word("Et tu, Brute?"), "brute");
        assert_eq!(candidate_word("  "), "");
        // só um caractere de pontuação é removido
        assert_eq!(candidate_word("he cried!?"), "cried!");
    }

    #[test]
    fn test_suffix_similarity_threshold_boundary() {
        // "sat"/"mat": 2 caracteres em comum NÃO excedem o limiar de 2
        assert_eq!(suffix_similarity("sat", "mat"), 2);
        assert!(suffix_similarity("sat", "mat") <= SUFFIX_RHYME_THRESHOLD);
        // finais idênticos de 3+ passam
        assert!(suffix_similarity("delight", "night") > SUFFIX_RHYME_THRESHOLD);
    }

    #[test]
    fn test_table_shape_n_minus_one() {
        let analyzer = RhymeAnalyzer::with_oracle(Box::new(EmptyOracle));
        let table = analyzer.analyze_lines(&["the cat sat", "upon the mat", "the dog ran", "it began"]);
        assert_eq!(table.len(), 4);
        for entry in &table.entries {
            assert_eq!(entry.relations.len(), 3);
        }
    }

    #[test]
    fn test_identical_endings_rhyme_heuristically() {
        // mesma palavra final: rima via heurística mesmo com o oráculo vazio
        let analyzer = RhymeAnalyzer::with_oracle(Box::new(EmptyOracle));
        let table = analyzer.analyze_lines(&["the cat sat", "the rat sat"]);
        let relation = &table.entries[0].relations[0];
        assert!(relation.is_rhyme);
        assert_eq!(relation.source, RelationSource::Heuristic);
    }

    #[test]
    fn test_end_to_end_scenario() {
        // cenário do bloco: "sat"/"mat" fica exatamente no limiar e NÃO rima
        // sem ajuda do oráculo
        let analyzer = RhymeAnalyzer::with_oracle(Box::new(EmptyOracle));
        let table = analyzer.analyze_block("the cat sat\nupon the mat\nthe dog ran\n");
        let words: Vec<&str> = table.entries.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["sat", "mat", "ran"]);
        assert!(table.entries.iter().all(|e| e.relations.iter().all(|r| !r.is_rhyme)));
    }

    #[test]
    fn test_oracle_overrides_heuristic() {
        let stub = StubOracle(HashMap::from([("sat", vec!["mat"])]));
        let analyzer = RhymeAnalyzer::with_oracle(Box::new(stub));
        let table = analyzer.analyze_lines(&["the cat sat", "upon the mat"]);

        let sat = table.get("sat").unwrap();
        assert!(sat.relations[0].is_rhyme);
        assert_eq!(sat.relations[0].source, RelationSource::Oracle);
    }

    #[test]
    fn test_directional_relations_preserved() {
        // oráculo assimétrico: "day" conhece "way", mas não o contrário;
        // a heurística também não salva ("ay" = 2, não excede o limiar)
        let stub = StubOracle(HashMap::from([("day", vec!["way"])]));
        let analyzer = RhymeAnalyzer::with_oracle(Box::new(stub));
        let table = analyzer.analyze_lines(&["seize the day", "along the way"]);

        let day = table.get("day").unwrap();
        let way = table.get("way").unwrap();
        assert!(day.relations[0].is_rhyme);
        assert_eq!(day.relations[0].source, RelationSource::Oracle);
        assert!(!way.relations[0].is_rhyme);
        assert_eq!(way.relations[0].source, RelationSource::Heuristic);
    }

    #[test]
    fn test_failing_oracle_degrades_to_heuristic() {
        // nenhuma exceção escapa: tabela completa, tudo decidido pela heurística
        let analyzer = RhymeAnalyzer::with_oracle(Box::new(FailingOracle));
        let table = analyzer.analyze_lines(&["a burning light", "a starry night", "the day"]);

        assert_eq!(table.len(), 3);
        for entry in &table.entries {
            assert_eq!(entry.relations.len(), 2);
            for relation in &entry.relations {
                assert_eq!(relation.source, RelationSource::Heuristic);
            }
        }
        // "light"/"night" rimam ortograficamente ("ight" = 4 > 2)
        let light = table.get("light").unwrap();
        assert!(light.relations.iter().any(|r| r.word == "night" && r.is_rhyme));
    }

    #[test]
    fn test_analyze_block_skips_blank_lines() {
        let analyzer = RhymeAnalyzer::with_oracle(Box::new(EmptyOracle));
        let table = analyzer.analyze_block("first line\n\n   \nsecond line\n");
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_duplicate_final_words_keep_their_lines() {
        let analyzer = RhymeAnalyzer::with_oracle(Box::new(EmptyOracle));
        let table = analyzer.analyze_lines(&["he sat", "she sat", "they ran"]);
        assert_eq!(table.entries[0].line, 0);
        assert_eq!(table.entries[1].line, 1);
        assert_eq!(table.entries[0].word, table.entries[1].word);
    }
}
