use crate::domain::errors::DomainError;

pub fn map_mongo(err: mongodb::error::Error) -> DomainError {
    DomainError::Persistence(err.to_string())
}

pub(crate) fn closed_scope() -> DomainError {
    DomainError::Persistence("transaction scope already closed".into())
}
