//! Cache key generation and normalization.

use std::fmt;

/// Key unica para una combinacion de filtros de export.
/// Normaliza ambas listas de ids (orden ascendente, sin duplicados) para
/// que la key sea independiente del orden de entrada.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExportKey {
    languages: Vec<i64>,
    tags: Vec<i64>,
}

impl ExportKey {
    /// Crea una nueva cache key normalizando los ids.
    ///
    /// # Examples
    ///
    /// ```
    /// use glossa_server::cache::ExportKey;
    ///
    /// let key = ExportKey::new(vec![3, 1, 3], vec![2]);
    /// assert_eq!(key.languages(), &[1, 3]);
    /// assert_eq!(key.to_string(), "translations_lang_1_3_tag_2");
    /// ```
    pub fn new(mut languages: Vec<i64>, mut tags: Vec<i64>) -> Self {
        languages.sort_unstable();
        languages.dedup();
        tags.sort_unstable();
        tags.dedup();

        Self { languages, tags }
    }

    /// Retorna los ids de lenguaje normalizados.
    pub fn languages(&self) -> &[i64] {
        &self.languages
    }

    /// Retorna los ids de tag normalizados.
    pub fn tags(&self) -> &[i64] {
        &self.tags
    }
}

fn join_ids(ids: &[i64]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join("_")
}

impl fmt::Display for ExportKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "translations")?;
        if !self.languages.is_empty() {
            write!(f, "_lang_{}", join_ids(&self.languages))?;
        }
        if !self.tags.is_empty() {
            write!(f, "_tag_{}", join_ids(&self.tags))?;
        }
        Ok(())
    }
}
