/// Storage subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("sqlite error: {message}")]
    SqliteError { message: String },

    #[error("failed to open database at {path}: {message}")]
    OpenFailed { path: String, message: String },

    #[error("migration to v{version} failed: {message}")]
    MigrationFailed { version: u32, message: String },

    #[error("corrupt row in {table}: {message}")]
    CorruptRow { table: String, message: String },

    #[error("connection lock poisoned: {0}")]
    LockPoisoned(String),
}
