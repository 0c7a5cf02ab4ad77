//! Read-through translation cache using Moka.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::{Duration, Instant};

use glossa_store::glossa_core::ExportMap;
use glossa_store::Database;
use moka::future::Cache;
use parking_lot::Mutex;
use thiserror::Error;

use crate::cache::keys::ExportKey;
use crate::metrics::CacheMetrics;

/// Error del sistema de cache.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("failed to fetch translations: {0}")]
    FetchError(String),
}

/// Configuracion del cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL en segundos (default: 1200 = 20 minutos)
    pub ttl_seconds: u64,
    /// Maximo numero de entries (default: 10000)
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: 1200,
            max_capacity: 10_000,
        }
    }
}

/// Cache read-through para el export de traducciones.
///
/// Cada entry corresponde a una combinacion de filtros lenguaje/tag
/// ([`ExportKey`]). Las keys usadas se registran en un set explicito
/// (`known_keys`) actualizado atomicamente bajo mutex, de modo que la
/// invalidacion masiva tras mutar una traduccion no pierda entries por
/// carreras de lectura-modificacion-escritura.
///
/// # Examples
///
/// ```no_run
/// use glossa_server::cache::{CacheConfig, TranslationCache};
/// use glossa_store::Database;
///
/// # #[tokio::main]
/// # async fn main() -> anyhow::Result<()> {
/// let db = Database::open_in_memory()?;
/// let cache = TranslationCache::new(CacheConfig::default());
///
/// let export = cache.get_translations(&db, vec![1], vec![]).await?;
/// println!("{} languages cached", export.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct TranslationCache {
    inner: Cache<ExportKey, Arc<ExportMap>>,
    known_keys: Arc<Mutex<HashSet<ExportKey>>>,
    metrics: CacheMetrics,
}

impl TranslationCache {
    /// Crea un nuevo cache con la configuracion dada.
    pub fn new(config: CacheConfig) -> Self {
        let metrics = CacheMetrics::new();

        let eviction_metrics = metrics.clone();
        let inner = Cache::builder()
            .max_capacity(config.max_capacity)
            .time_to_live(Duration::from_secs(config.ttl_seconds))
            .eviction_listener(move |_key, _value, cause| {
                let reason = match cause {
                    moka::notification::RemovalCause::Expired => "ttl",
                    moka::notification::RemovalCause::Size => "capacity",
                    moka::notification::RemovalCause::Explicit => "manual",
                    moka::notification::RemovalCause::Replaced => "replaced",
                };
                eviction_metrics.record_eviction(reason);
            })
            .build();

        Self {
            inner,
            known_keys: Arc::new(Mutex::new(HashSet::new())),
            metrics,
        }
    }

    /// Registra la key en el set de keys conocidas (set-add atomico).
    pub(crate) fn register_key(&self, key: &ExportKey) {
        self.known_keys.lock().insert(key.clone());
    }

    /// Retorna las traducciones para la combinacion de filtros dada.
    ///
    /// Read-through: si la entry existe y no expiro se retorna del cache;
    /// si no, se consulta el store, se guarda con TTL y se retorna.
    pub async fn get_translations(
        &self,
        db: &Database,
        languages: Vec<i64>,
        tags: Vec<i64>,
    ) -> Result<Arc<ExportMap>, CacheError> {
        let key = ExportKey::new(languages, tags);
        self.register_key(&key);

        let start = Instant::now();

        if let Some(cached) = self.inner.get(&key).await {
            self.metrics.record_hit();
            self.metrics.record_operation_duration("get_hit", start.elapsed());
            return Ok(cached);
        }

        self.metrics.record_miss();

        let db = db.clone();
        let fetch_key = key.clone();
        let value = self
            .inner
            .try_get_with(key, async move {
                tracing::debug!(key = %fetch_key, "Export cache miss, querying store");
                let map = db
                    .export_translations(fetch_key.languages(), fetch_key.tags())
                    .map_err(|e| CacheError::FetchError(e.to_string()))?;
                Ok(Arc::new(map))
            })
            .await
            .map_err(|e: Arc<CacheError>| CacheError::FetchError(e.to_string()))?;

        self.metrics
            .record_operation_duration("get_miss", start.elapsed());
        self.metrics.update_entry_count(self.inner.entry_count());

        Ok(value)
    }

    /// Obtiene una entry del cache sin pasar por el store.
    pub async fn get(&self, key: &ExportKey) -> Option<Arc<ExportMap>> {
        self.inner.get(key).await
    }

    /// Inserta una entry directamente (tests principalmente).
    pub async fn insert(&self, key: ExportKey, value: ExportMap) {
        self.register_key(&key);
        self.inner.insert(key, Arc::new(value)).await;
    }

    /// Invalida una entry especifica.
    pub async fn invalidate(&self, key: &ExportKey) {
        self.inner.invalidate(key).await;
    }

    /// Retorna el numero aproximado de entries en cache.
    pub fn entry_count(&self) -> u64 {
        self.inner.entry_count()
    }

    /// Drena el set de keys conocidas.
    pub(crate) fn drain_known_keys(&self) -> Vec<ExportKey> {
        self.known_keys.lock().drain().collect()
    }

    /// Retorna las metricas para acceso externo.
    pub fn metrics(&self) -> &CacheMetrics {
        &self.metrics
    }

    /// Sincroniza el cache (para tests principalmente).
    #[cfg(test)]
    pub(crate) fn sync(&self) {
        self.inner.run_pending_tasks();
    }
}
