use thiserror::Error;

#[derive(Error, Debug)]
pub enum WitchError {
    #[error("Failed to load cards.json: {0}")]
    Load(String),

    #[error("Cards are not loaded yet.")]
    EmptyCatalog,

    #[error("No card at position {index} (valid range is 1-{len}).")]
    IndexOutOfRange { index: String, len: usize },

    #[error("Card not found: {0}")]
    NotFound(String),

    #[error("Card name cannot be empty.")]
    EmptyQuery,

    #[error("Usage: {usage}")]
    MissingArgument { verb: &'static str, usage: &'static str },

    #[error("Unknown command: {0}. Type \"help\" to see available commands.")]
    UnknownCommand(String),

    #[error("Share failed: {0}")]
    Share(String),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WitchError>;
