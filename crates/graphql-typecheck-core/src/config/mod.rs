//! The JSON configuration a host reads to decide which calls to check and
//! against which schema.

mod config_error;
mod gql_operation_config;
mod type_check_config;

pub use config_error::ConfigError;
pub use gql_operation_config::GqlOperationConfig;
pub use type_check_config::TypeCheckConfig;
