//! Bulk invalidation via the known-keys registry.

use tracing::info;

use crate::cache::{ExportKey, TranslationCache};

/// Resultado de una operacion de invalidacion.
#[derive(Debug, Clone)]
pub struct InvalidationResult {
    /// Numero de keys invalidadas.
    pub count: usize,
    /// Keys que fueron evictadas.
    pub keys: Vec<String>,
}

impl TranslationCache {
    /// Invalida todas las entries registradas en el set de keys
    /// conocidas y vacia el set.
    ///
    /// El API layer debe llamar esto tras cada create/update/delete de
    /// una traduccion. Tras retornar, cualquier `get_translations` para
    /// una combinacion previamente cacheada recomputa del store.
    ///
    /// Nota: mutaciones de Language o Tag no invalidan el cache; la
    /// expiracion por TTL acota esa obsolescencia.
    pub async fn invalidate_all(&self) -> InvalidationResult {
        let keys: Vec<ExportKey> = self.drain_known_keys();

        let count = keys.len();
        let mut evicted = Vec::with_capacity(count);
        for key in keys {
            self.invalidate(&key).await;
            evicted.push(key.to_string());
        }

        info!(count = count, "Translation cache invalidated");

        InvalidationResult {
            count,
            keys: evicted,
        }
    }
}
