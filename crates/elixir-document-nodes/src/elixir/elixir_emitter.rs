use crate::visitor::DefinitionEmitter;

const HEREDOC_DELIMITER: &str = "\"\"\"";
const DEF_INDENT: &str = "  ";
const BODY_INDENT: &str = "    ";

/// Emits each document constant as a zero-arity Elixir function returning
/// the document text in a heredoc:
///
/// ```text
///   def get_user do
///     """
///     query GetUser {
///       user {
///         id
///       }
///     }
///     """
///   end
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ElixirEmitter;

impl DefinitionEmitter for ElixirEmitter {
    fn emit_constant(&self, variable_name: &str, document_text: &str) -> String {
        let mut out = format!(
            "{DEF_INDENT}def {variable_name} do\n{BODY_INDENT}{HEREDOC_DELIMITER}\n",
        );

        for line in escape_heredoc(document_text).lines() {
            if !line.is_empty() {
                out.push_str(BODY_INDENT);
                out.push_str(line);
            }
            out.push('\n');
        }

        out.push_str(&format!("{BODY_INDENT}{HEREDOC_DELIMITER}\n{DEF_INDENT}end"));
        out
    }
}

/// Escape text for embedding in an interpolating Elixir heredoc.
///
/// Backslashes are doubled, `#{` is kept from starting an interpolation
/// and `"""` is kept from closing the heredoc.
pub fn escape_heredoc(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace("#{", "\\#{")
        .replace(HEREDOC_DELIMITER, "\\\"\\\"\\\"")
}
