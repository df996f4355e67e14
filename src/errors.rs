use std::num::ParseIntError;

use thiserror::Error;

use crate::form::FieldRole;

/// A gas field that does not hold a base-10 integer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} `{value}` is not a whole number: {source}")]
pub struct GasParseError {
    pub field: FieldRole,
    pub value: String,
    #[source]
    pub source: ParseIntError,
}

/// Recoverable failures shown in the form's error slot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("please fill out all fields on this page before proceeding")]
    IncompletePage,
    #[error(transparent)]
    Parse(#[from] GasParseError),
}

/// Rejected catalog layouts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("catalog has no fields")]
    Empty,
    #[error("page {0} has no fields")]
    EmptyPage(usize),
    #[error("pages cover {covered} fields but the catalog has {fields}")]
    PartitionMismatch { covered: usize, fields: usize },
    #[error("no field carries the {0} role")]
    MissingRole(FieldRole),
    #[error("more than one field carries the {0} role")]
    DuplicateRole(FieldRole),
}

/// Fatal failures of the terminal session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
