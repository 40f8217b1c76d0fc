//! # Limpador de Texto Literário
//!
//! Operações puras de reescrita (`&str -> String`) para preparar texto bruto de obras
//! literárias. Cada operação é total sobre UTF-8 bem formado e componível em qualquer
//! ordem; a única que falha é [`TextCleaner::strip_metadata`] com perfil desconhecido.
//!
//! ## O pipeline de referência
//!
//! A limpeza completa ([`TextCleaner::clean_all`]) aplica, nesta ordem:
//!
//! 1. Isolamento de metadados (perfil, ex: cabeçalho/rodapé Gutenberg)
//! 2. Remoção de referências (`[1]`, bloco FOOTNOTES)
//! 3. Remoção de aspas
//! 4. Remoção de ênfase (`_palavra_`)
//! 5. Remoção de espaços nas bordas de cada linha
//!
//! A normalização de linhas em branco fica **fora** da limpeza completa: o colapso
//! `\n+\W*\n+` é instável sobre entradas com múltiplas linhas em branco consecutivas
//! (pode colapsar demais) e por isso é oferecido como passo experimental avulso.
//!
//! ## Contrações elididas
//!
//! | Tipo | Letras antes          | Letras depois | Exemplo                |
//! |------|-----------------------|---------------|------------------------|
//! | `e`  | r v s p w m y l b     | d, st         | `prais'd` -> `praised` |
//! | `v`  | o                     | e             | `o'er` -> `over`       |
//!
//! Cada regra é independente; tipos pedidos mas não registrados são ignorados em
//! silêncio (diferente do perfil de metadados, que é erro — assimetria herdada da
//! implementação original e mantida de propósito: para uma contração desconhecida a
//! omissão é inofensiva, para um perfil desconhecido não há região segura a manter).

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::debug;

use crate::error::ConfigError;
use crate::profiles::{DiscardSide, ProfileRegistry};

/// Caracteres de aspas que abrem citação.
const QUOTES_LEFT: &str = "'\"\u{201C}\u{2018}";
/// Caracteres de aspas que fecham citação (também os marcadores de elisão aceitos).
const QUOTES_RIGHT: &str = "'\"\u{2019}\u{201D}";

/// Regras de contração registradas: (tipo, classe anterior, classe posterior).
/// O tipo é a vogal elidida que o marcador de elisão substitui.
const CONTRACTIONS: &[(char, &str, &str)] = &[
    ('e', "r|v|s|p|w|m|y|l|b", "d|st"),
    ('v', "o", "e"),
];

/// Aspas de abertura precedidas de espaço opcional; o espaço é preservado.
static RE_QUOTE_OPEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"(\s*)[{QUOTES_LEFT}]")).unwrap());

/// Aspas de fechamento com um `s` opcional logo depois. O crate `regex` não tem
/// lookahead, então o `s` é capturado e o casamento inteiro é reemitido quando ele
/// está presente (preserva possessivos como `king’s`).
static RE_QUOTE_CLOSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"[{QUOTES_RIGHT}](s?)")).unwrap());

/// Ênfase por sublinhado simples: `_palavra_`.
static RE_EMPH: Lazy<Regex> = Lazy::new(|| Regex::new(r"_(\w+)_").unwrap());

/// Marcador de referência entre colchetes: `[1]`, `[nota]`.
static RE_REF: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[\w+\]").unwrap());

/// Marcador FOOTNOTES (sem distinção de caixa) que inicia o bloco de notas.
static RE_FOOTNOTES: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\s*FOOTNOTES\W*").unwrap());

/// Corridas de linhas em branco (ou quase em branco) consecutivas.
/// CUIDADO: `\W` também casa pontuação, então linhas só de pontuação são engolidas.
/// Comportamento conhecido e instável; ver a nota do módulo antes de "consertar".
static RE_BLANKLINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n+\W*\n+").unwrap());

/// O limpador de texto: registro de perfis + regras de contração compiladas.
///
/// Construir um `TextCleaner` compila todos os padrões uma única vez; depois disso
/// a estrutura é somente leitura e pode ser compartilhada entre threads.
pub struct TextCleaner {
    profiles: ProfileRegistry,
    contractions: Vec<(char, Regex)>,
}

impl TextCleaner {
    /// Cria o limpador com os perfis embutidos ([`ProfileRegistry::builtin`]).
    pub fn new() -> Self {
        Self::with_profiles(ProfileRegistry::builtin())
    }

    /// Cria o limpador com um registro de perfis customizado.
    pub fn with_profiles(profiles: ProfileRegistry) -> Self {
        let contractions = CONTRACTIONS
            .iter()
            .map(|(kind, start, end)| {
                let pattern = format!("({start})[{QUOTES_RIGHT}]({end})");
                (*kind, Regex::new(&pattern).unwrap())
            })
            .collect();
        Self {
            profiles,
            contractions,
        }
    }

    /// Os perfis de limpeza disponíveis.
    pub fn profiles(&self) -> &ProfileRegistry {
        &self.profiles
    }

    /// Isola o conteúdo substantivo do documento descartando metadados.
    ///
    /// Aplica as entradas do perfil na ordem de registro; cada divisão opera sobre o
    /// fragmento sobrevivente da anterior. Delimitador ausente no texto é passagem
    /// direta (o fragmento segue intacto) — entrada é tratada como melhor esforço.
    ///
    /// # Erros
    ///
    /// [`ConfigError::UnknownProfile`] se o perfil não está registrado.
    pub fn strip_metadata(&self, text: &str, profile_name: &str) -> Result<String, ConfigError> {
        let profile = self
            .profiles
            .get(profile_name)
            .ok_or_else(|| ConfigError::UnknownProfile(profile_name.to_string()))?;

        let mut kept = text.to_string();
        for entry in &profile.entries {
            debug!("descartando {} ({:?})", entry.name, entry.discard);
            let next = {
                let parts: Vec<&str> = entry.pattern.splitn(&kept, 2).collect();
                match (parts.as_slice(), entry.discard) {
                    ([_, after], DiscardSide::Pre) => after.to_string(),
                    ([before, _], DiscardSide::Post) => before.to_string(),
                    // delimitador ausente: mantém o fragmento como está
                    _ => kept.clone(),
                }
            };
            kept = next;
        }
        Ok(kept.trim().to_string())
    }

    /// Remove marcadores de referência `[token]` e trunca o documento a partir do
    /// primeiro marcador FOOTNOTES (sem distinção de caixa).
    pub fn remove_references(&self, text: &str) -> String {
        let without_refs = RE_REF.replace_all(text, "");
        let body = RE_FOOTNOTES
            .splitn(&without_refs, 2)
            .next()
            .unwrap_or_default();
        body.trim().to_string()
    }

    /// Expande contrações elididas de volta à vogal omitida.
    ///
    /// `kinds == None` aplica todos os tipos registrados. Tipos desconhecidos são
    /// ignorados em silêncio (ver a nota do módulo sobre a assimetria com perfis).
    ///
    /// # Exemplos
    ///
    /// ```rust
    /// let cleaner = bardo_core::TextCleaner::new();
    /// assert_eq!(cleaner.substitute_contractions("o'er the sea", None), "over the sea");
    /// assert_eq!(cleaner.substitute_contractions("diseas'd", Some(&['e'])), "diseased");
    /// ```
    pub fn substitute_contractions(&self, text: &str, kinds: Option<&[char]>) -> String {
        let selected: Vec<char> = match kinds {
            Some(requested) => requested.to_vec(),
            None => self.contractions.iter().map(|(kind, _)| *kind).collect(),
        };

        let mut out = text.to_string();
        for kind in selected {
            if let Some((_, pattern)) = self.contractions.iter().find(|(k, _)| *k == kind) {
                let replacement = format!("${{1}}{kind}${{2}}");
                out = pattern.replace_all(&out, replacement.as_str()).into_owned();
            }
        }
        out
    }

    /// Remove aspas de abertura e fechamento, preservando o espaço ao redor.
    ///
    /// Aspas de fechamento seguidas de `s` são mantidas para não destruir sequências
    /// com cara de possessivo (`king’s` permanece `king’s`).
    pub fn strip_quotes(&self, text: &str) -> String {
        let opened = RE_QUOTE_OPEN.replace_all(text, "$1");
        RE_QUOTE_CLOSE
            .replace_all(&opened, |caps: &Captures| {
                if &caps[1] == "s" {
                    caps[0].to_string()
                } else {
                    String::new()
                }
            })
            .into_owned()
    }

    /// Desembrulha ênfase por sublinhado: `_palavra_` vira `palavra`.
    pub fn remove_emphasis(&self, text: &str) -> String {
        RE_EMPH.replace_all(text, "$1").into_owned()
    }

    /// **Experimental**: colapsa corridas de linhas em branco na `replacement` dada.
    ///
    /// Mantido fora de [`clean_all`](Self::clean_all): o padrão engole linhas de
    /// pontuação e pode colapsar demais sobre espaçamento patológico.
    pub fn remove_blank_lines(&self, text: &str, replacement: &str) -> String {
        RE_BLANKLINE.replace_all(text, replacement).into_owned()
    }

    /// Apara espaços nas bordas de cada linha, preservando a ordem das linhas
    /// e as linhas em branco.
    pub fn remove_leading_spaces(&self, text: &str) -> String {
        text.split('\n')
            .map(str::trim)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// A limpeza completa de referência: metadados, referências, aspas, ênfase
    /// e espaços de borda, nesta ordem.
    ///
    /// # Erros
    ///
    /// [`ConfigError::UnknownProfile`] se o perfil não está registrado.
    pub fn clean_all(&self, text: &str, profile_name: &str) -> Result<String, ConfigError> {
        debug!("limpeza completa com perfil {:?}", profile_name);
        let text = self.strip_metadata(text, profile_name)?;
        let text = self.remove_references(&text);
        let text = self.strip_quotes(&text);
        let text = self.remove_emphasis(&text);
        Ok(self.remove_leading_spaces(&text))
    }
}

impl Default for TextCleaner {
    fn default() -> Self {
        Self::new()
    }
}
