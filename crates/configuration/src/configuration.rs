//! Runtime configuration for the translator and the query log.

use std::path::PathBuf;

/// Nesting depth past which a clause document is rejected instead of descended into.
pub const DEFAULT_MAX_DEPTH: usize = 64;
pub const DEFAULT_QUERY_LOG_DIRECTORY: &str = "/var/log/query-dsl";
pub const DEFAULT_SYSTEM_QUERY_FILE: &str = "system-query.txt";
pub const DEFAULT_USER_QUERY_FILE: &str = "user-query.txt";
pub const DEFAULT_USER_INDEX_PREFIX: &str = "logs-X";

/// The 'Configuration' type collects everything needed to translate and record queries.
///
/// Values of this type are produced from a 'ParsedConfiguration' using
/// 'make_runtime_configuration', which fills in defaults and applies environment
/// overrides, so nothing downstream has to deal with optional settings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Configuration {
    pub translation: TranslationSettings,
    pub query_log: QueryLogSettings,
}

/// Settings which bound a single translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslationSettings {
    /// How many clause documents may be nested inside each other.
    pub max_depth: usize,
}

impl Default for TranslationSettings {
    fn default() -> Self {
        TranslationSettings {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Where translated queries are recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryLogSettings {
    pub directory: PathBuf,
    /// File name for queries against any other index.
    pub system_file: String,
    /// File name for queries against user indexes.
    pub user_file: String,
    /// Indexes whose name starts with this prefix hold user queries.
    pub user_index_prefix: String,
}

impl Default for QueryLogSettings {
    fn default() -> Self {
        QueryLogSettings {
            directory: PathBuf::from(DEFAULT_QUERY_LOG_DIRECTORY),
            system_file: DEFAULT_SYSTEM_QUERY_FILE.to_string(),
            user_file: DEFAULT_USER_QUERY_FILE.to_string(),
            user_index_prefix: DEFAULT_USER_INDEX_PREFIX.to_string(),
        }
    }
}

impl QueryLogSettings {
    pub fn system_path(&self) -> PathBuf {
        self.directory.join(&self.system_file)
    }

    pub fn user_path(&self) -> PathBuf {
        self.directory.join(&self.user_file)
    }

    /// Does this index hold user queries?
    pub fn is_user_index(&self, index_name: &str) -> bool {
        index_name.starts_with(&self.user_index_prefix)
    }
}
