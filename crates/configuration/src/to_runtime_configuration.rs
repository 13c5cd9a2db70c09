//! Convert a parsed configuration into the runtime configuration.

use crate::configuration::{Configuration, QueryLogSettings, TranslationSettings};
use crate::environment::{self, Environment, Variable};
use crate::error::MakeRuntimeConfigurationError;
use crate::version1::{ParsedConfiguration, DEFAULT_QUERY_LOG_DIRECTORY_VARIABLE};

use std::path::PathBuf;

/// Fill in the defaults of a 'ParsedConfiguration' and apply overrides from the environment.
pub fn make_runtime_configuration(
    parsed_config: ParsedConfiguration,
    environment: impl Environment,
) -> Result<Configuration, MakeRuntimeConfigurationError> {
    let translation = make_translation_settings(&parsed_config)?;

    let defaults = QueryLogSettings::default();
    let section = parsed_config.query_log;

    let directory = match environment.read(&Variable::from(DEFAULT_QUERY_LOG_DIRECTORY_VARIABLE)) {
        Ok(directory) => PathBuf::from(directory),
        Err(environment::Error::VariableNotPresent(_)) => {
            section.directory.unwrap_or(defaults.directory)
        }
        Err(error) => return Err(error.into()),
    };

    Ok(Configuration {
        translation,
        query_log: QueryLogSettings {
            directory,
            system_file: section.system_file.unwrap_or(defaults.system_file),
            user_file: section.user_file.unwrap_or(defaults.user_file),
            user_index_prefix: section
                .user_index_prefix
                .unwrap_or(defaults.user_index_prefix),
        },
    })
}

fn make_translation_settings(
    parsed_config: &ParsedConfiguration,
) -> Result<TranslationSettings, MakeRuntimeConfigurationError> {
    match parsed_config.translation.max_depth {
        None => Ok(TranslationSettings::default()),
        Some(0) => Err(MakeRuntimeConfigurationError::InvalidMaxDepth(0)),
        Some(max_depth) => Ok(TranslationSettings { max_depth }),
    }
}
