mod mccost_app;
mod mccost_cli_error;
mod mccost_operation;
mod output_format;

pub use mccost_app::McCostApp;
pub use mccost_cli_error::McCostCliError;
pub use mccost_operation::McCostOperation;
pub use output_format::OutputFormat;
