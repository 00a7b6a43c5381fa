/// Where playbook notebooks live, relative to the working directory
pub(crate) const DEFAULT_PLAYBOOKS_DIR: &str = "Playbooks";

/// Where new investigations are created, relative to the working directory
pub(crate) const DEFAULT_INVESTIGATIONS_DIR: &str = "Investigations";

/// Glob matched against bare file names during discovery
pub(crate) const DEFAULT_TEMPLATE_PATTERN: &str = "*.ipynb";

/// Directory names never descended into while looking for playbooks
pub(crate) const DEFAULT_IGNORE_DIRS: &[&str] = &[
    ".ipynb_checkpoints",
    "__pycache__",
    ".git",
    ".venv",
    "venv",
    "build",
    "dist",
    ".cache",
    "cache",
    ".vscode",
    ".idea",
    ".pytest_cache",
    "node_modules",
    ".env",
    "env",
    "logs",
    "tmp",
    "temp",
];

/// Timestamp at the head of every investigation directory: "2025-01-15T09.30"
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H.%M";

/// Label used when the playbook has no parent folder name
pub(crate) const FALLBACK_LABEL: &str = "New Investigation";

/// Prefix given to the copied notebook
pub(crate) const COPY_PREFIX: &str = "inv_";

pub(crate) const MAX_DIR_NAME_LEN: usize = 75;
pub(crate) const MAX_CASE_REF_LEN: usize = 20;

/// Punctuation allowed in directory names and case references besides letters and digits
pub(crate) const NAME_PUNCTUATION: &str = " .-_#()";

/// True for the characters a directory name or free-form case reference may contain
pub(crate) fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || NAME_PUNCTUATION.contains(c)
}
