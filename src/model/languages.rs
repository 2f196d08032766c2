//! Static file-extension to language table.
//!
//! Configuration data, not logic: the analyzer calls [`language_for_path`]
//! and never inspects the table itself, so new languages can be added here
//! without touching the analysis algorithm. Unknown extensions map to
//! nothing; there is no "Unknown" bucket.

use std::collections::HashMap;

use once_cell::sync::Lazy;

static EXTENSION_LANGUAGES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("rs", "Rust"),
        ("py", "Python"),
        ("js", "JavaScript"),
        ("jsx", "JavaScript"),
        ("mjs", "JavaScript"),
        ("cjs", "JavaScript"),
        ("ts", "TypeScript"),
        ("tsx", "TypeScript"),
        ("go", "Go"),
        ("java", "Java"),
        ("kt", "Kotlin"),
        ("swift", "Swift"),
        ("c", "C"),
        ("h", "C"),
        ("cpp", "C++"),
        ("cc", "C++"),
        ("cxx", "C++"),
        ("hpp", "C++"),
        ("cs", "C#"),
        ("rb", "Ruby"),
        ("php", "PHP"),
        ("scala", "Scala"),
        ("ex", "Elixir"),
        ("exs", "Elixir"),
        ("erl", "Erlang"),
        ("hs", "Haskell"),
        ("lua", "Lua"),
        ("r", "R"),
        ("jl", "Julia"),
        ("zig", "Zig"),
        ("dart", "Dart"),
        ("sh", "Shell"),
        ("bash", "Shell"),
        ("zsh", "Shell"),
        ("fish", "Shell"),
        ("sql", "SQL"),
        ("html", "HTML"),
        ("css", "CSS"),
        ("scss", "CSS"),
        ("vue", "Vue"),
        ("svelte", "Svelte"),
        ("json", "JSON"),
        ("yaml", "YAML"),
        ("yml", "YAML"),
        ("toml", "TOML"),
        ("md", "Markdown"),
        ("proto", "Protobuf"),
        ("tf", "Terraform"),
    ])
});

/// Look up the language for a file path by its extension.
///
/// Returns `None` for paths without an extension or with an extension not in
/// the table.
#[must_use]
pub fn language_for_path(path: &str) -> Option<&'static str> {
    let ext = path.rsplit('.').next()?;
    if ext.len() == path.len() {
        // No '.' in the path at all
        return None;
    }
    EXTENSION_LANGUAGES.get(ext.to_ascii_lowercase().as_str()).copied()
}
