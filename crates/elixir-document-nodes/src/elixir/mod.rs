mod elixir_emitter;
mod elixir_module;

pub use elixir_emitter::ElixirEmitter;
pub use elixir_emitter::escape_heredoc;
pub use elixir_module::ElixirModule;
pub use elixir_module::MODULE_DOC;
