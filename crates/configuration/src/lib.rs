pub mod configuration;
pub mod environment;
pub mod error;
pub mod to_runtime_configuration;
pub mod version1;

pub use configuration::{Configuration, QueryLogSettings, TranslationSettings};
pub use version1::{parse_configuration, write_parsed_configuration, ParsedConfiguration};

pub use to_runtime_configuration::make_runtime_configuration;
