use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Shoe is empty")]
    EmptyShoe,
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Invalid table rules: {0}")]
    InvalidRules(String),
    #[error("Table error: {0}")]
    Table(String),
    #[error("Player left the table")]
    Quit,
}
