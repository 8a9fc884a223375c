// File: src/error.rs
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("codec error: {0}")]
    Codec(#[from] bincode::Error),

    #[error("could not move snapshot into place: {0}")]
    Persist(#[from] tempfile::PersistError),
}
