//! Append translated queries to the query files.

use crate::error::Error;
use crate::record::{format_record, Destination};

use query_dsl_configuration::{Configuration, QueryLogSettings, TranslationSettings};
use query_engine_sql::sql::predicate::Predicate;
use query_engine_translation::translation;
use serde_json::Value;
use std::path::PathBuf;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

/// Translates queries and appends a record of each one to the query files.
///
/// Records written through the same `QueryLog` never interleave.
#[derive(Debug)]
pub struct QueryLog {
    settings: QueryLogSettings,
    translation: TranslationSettings,
    write_lock: Mutex<()>,
}

impl QueryLog {
    pub fn new(configuration: &Configuration) -> QueryLog {
        QueryLog {
            settings: configuration.query_log.clone(),
            translation: configuration.translation,
            write_lock: Mutex::new(()),
        }
    }

    /// Queries against user indexes go to the user file.
    pub fn destination(&self, index_name: &str) -> Destination {
        if self.settings.is_user_index(index_name) {
            Destination::User
        } else {
            Destination::System
        }
    }

    pub fn path(&self, destination: Destination) -> PathBuf {
        match destination {
            Destination::System => self.settings.system_path(),
            Destination::User => self.settings.user_path(),
        }
    }

    /// Translate a query document and append its record. Returns the translation.
    pub async fn record(
        &self,
        index_name: &str,
        method: &str,
        document: &Value,
    ) -> Result<Predicate, Error> {
        let method = method.strip_prefix('/').unwrap_or(method);
        let destination = self.destination(index_name);
        let predicate = translation::query::translate_with(&self.translation, document);

        tracing::info!(
            index_name,
            method,
            ?destination,
            translatable = predicate.translatable,
            "recording query"
        );

        let record = format_record(index_name, method, destination, document, &predicate)?;
        self.append(destination, &record).await?;
        Ok(predicate)
    }

    async fn append(&self, destination: Destination, record: &str) -> Result<(), Error> {
        let path = self.path(destination);
        let io_error = |source| Error::Io {
            path: path.clone(),
            source,
        };

        let _guard = self.write_lock.lock().await;
        fs::create_dir_all(&self.settings.directory)
            .await
            .map_err(io_error)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await
            .map_err(io_error)?;
        file.write_all(record.as_bytes()).await.map_err(io_error)?;
        file.flush().await.map_err(io_error)?;
        Ok(())
    }
}
