use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("base64 decoding failed: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("container is too short to hold a nonce")]
    Truncated,

    #[error("encryption failed")]
    Encrypt,

    #[error("decryption failed (incorrect password?)")]
    Decrypt,

    #[error("decompression failed: {0}")]
    Decompress(String),

    #[error("csv parsing failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid date for MRN {mrn}: {source}")]
    Date {
        mrn: String,
        #[source]
        source: jiff::Error,
    },

    #[error("could not compute age for MRN {mrn}: {source}")]
    Age {
        mrn: String,
        #[source]
        source: jiff::Error,
    },
}
