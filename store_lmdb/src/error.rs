use thiserror::Error;

#[derive(Debug, Error)]
pub enum LmdbError {
    #[error("LMDB error: {0}")]
    Heed(#[from] heed::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<LmdbError> for ballotbox_store::StoreError {
    fn from(e: LmdbError) -> Self {
        match &e {
            LmdbError::Heed(heed::Error::Mdb(heed::MdbError::MapFull)) => {
                ballotbox_store::StoreError::Full(e.to_string())
            }
            _ => ballotbox_store::StoreError::Backend(e.to_string()),
        }
    }
}
