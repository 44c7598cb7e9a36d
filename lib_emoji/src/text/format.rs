/// C type name of the packed words in the exported declaration.
pub const WORD_TYPE: &str = "uint16_t";

/// Prefix every exported array identifier carries.
pub const IDENT_PREFIX: &str = "EMOJI_";

/// Replaces every character outside `[A-Za-z0-9_]` with `_`, keeping
/// case. Used both for identifiers and for suggested file names.
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

/// The uppercased identifier stem derived from a display name.
pub fn sanitize_identifier(name: &str) -> String {
    sanitize_name(name).to_uppercase()
}
