use std::path::Path;

/// Line-comment syntax of a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentStyle {
    /// Shell-like comment: `# comment`
    Hash,
    /// C-like comment: `// comment`
    DoubleSlash,
    /// SQL-like comment: `-- comment`
    DoubleDash,
}

const HASH_EXTENSIONS: &[&str] = &[
    "py", "pyi", "sh", "bash", "zsh", "rb", "pl", "pm", "r", "jl", "toml", "yaml", "yml", "cmake",
    "mk", "nim", "ex", "exs", "tf",
];

const DOUBLE_SLASH_EXTENSIONS: &[&str] = &[
    "rs", "c", "h", "cc", "cpp", "cxx", "hpp", "hh", "cs", "go", "java", "kt", "kts", "scala",
    "swift", "js", "jsx", "mjs", "cjs", "ts", "tsx", "dart", "zig", "php", "proto", "groovy",
];

const DOUBLE_DASH_EXTENSIONS: &[&str] = &["sql", "lua", "hs", "elm", "ada", "adb", "ads"];

/// File names without a useful extension that still carry `#` comments.
const HASH_FILE_NAMES: &[&str] = &["Makefile", "Dockerfile", "Rakefile", "Gemfile", "CMakeLists.txt"];

impl CommentStyle {
    /// The characters that open a line comment in this style.
    pub fn prefix(&self) -> &'static str {
        match self {
            CommentStyle::Hash => "#",
            CommentStyle::DoubleSlash => "//",
            CommentStyle::DoubleDash => "--",
        }
    }

    /// Pick the comment style for a file, or `None` if the file kind is not supported.
    pub fn from_path(path: &Path) -> Option<Self> {
        if let Some(name) = path.file_name().and_then(|n| n.to_str())
            && HASH_FILE_NAMES.contains(&name)
        {
            return Some(CommentStyle::Hash);
        }

        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        if HASH_EXTENSIONS.contains(&ext.as_str()) {
            Some(CommentStyle::Hash)
        } else if DOUBLE_SLASH_EXTENSIONS.contains(&ext.as_str()) {
            Some(CommentStyle::DoubleSlash)
        } else if DOUBLE_DASH_EXTENSIONS.contains(&ext.as_str()) {
            Some(CommentStyle::DoubleDash)
        } else {
            None
        }
    }

    /// Strip the comment prefix from an already left-trimmed line.
    ///
    /// Returns `None` if the line is not a comment. Repeated prefixes
    /// (`##`, `///`) are removed as a whole.
    pub fn strip_comment<'a>(&self, trimmed: &'a str) -> Option<&'a str> {
        let prefix = self.prefix();
        if !trimmed.starts_with(prefix) {
            return None;
        }
        let marker = prefix.chars().next()?;
        Some(trimmed.trim_start_matches(marker))
    }
}
