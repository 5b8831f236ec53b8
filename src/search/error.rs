use thiserror::Error;

use crate::database::manager::DatabaseError;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Invalid {field}: {message}")]
    Input { field: &'static str, message: String },

    #[error(transparent)]
    Store(#[from] DatabaseError),
}

impl SearchError {
    pub fn input(field: &'static str, message: impl Into<String>) -> Self {
        SearchError::Input { field, message: message.into() }
    }
}
