/// Lectern engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum accepted question length, in characters.
pub const MAX_QUESTION_CHARS: usize = 2000;
