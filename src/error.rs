#[derive(thiserror::Error, Debug)]
pub enum MatsinkError {

    #[error("Failed to open input file")]
    FileError(#[from] std::io::Error),

    #[error("Failed to parse MAT container: {0}")]
    MatParseError(String),

    #[error("MAT container holds {0} data variables, at least 3 required")]
    TooFewVariables(usize),

    #[error("Variable '{0}' not found in MAT container")]
    VariableNotFound(String),

    #[error("Variable '{0}' contains no data")]
    EmptyVariable(String),

    #[error("Failed to encode samples as JSON")]
    JsonError(#[from] serde_json::Error),

    #[error("SQLite connection failed")]
    SQLError(#[from] sqlx::Error),

}
