//! Generates an Elixir module (`.ex`) embedding GraphQL operations and
//! fragments as string constants.
//!
//! The host parses the documents and the schema, then calls [`validate`]
//! with the output file name and [`plugin`] to produce the file content.

pub mod ast;
mod combined_document;
pub mod config;
mod document_file;
pub mod elixir;
pub mod file_reader;
pub mod fragments;
pub mod loc;
pub mod naming;
mod plugin;
mod plugin_error;
mod schema;
pub mod visitor;

pub use combined_document::CombinedDocument;
pub use document_file::DocumentFile;
pub use document_file::DocumentLoadError;
pub use plugin::OUTPUT_FILE_EXTENSION;
pub use plugin::PLUGIN_NAME;
pub use plugin::PluginOutput;
pub use plugin::plugin;
pub use plugin::validate;
pub use plugin_error::PluginError;
pub use schema::Schema;
pub use schema::SchemaLoadError;

#[cfg(test)]
mod tests;
