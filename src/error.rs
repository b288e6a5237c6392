use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ArchiveError {
    #[error("swapi request failed: {0}")]
    SwapiHttp(String),

    #[error("malformed person payload: {0}")]
    PersonParse(String),

    #[error("reference fetch returned status {status}: {url}")]
    ReferenceStatus { status: u16, url: String },

    #[error("reference {url} is missing field {key}")]
    MissingField { url: String, key: String },

    #[error("archive database error: {0}")]
    Database(String),

    #[error("background persistence task failed: {0}")]
    TaskJoin(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_display() {
        let err = ArchiveError::MissingField {
            url: "https://swapi.py4e.com/api/species/2/".to_string(),
            key: "name".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "reference https://swapi.py4e.com/api/species/2/ is missing field name"
        );
    }

    #[test]
    fn reference_status_display() {
        let err = ArchiveError::ReferenceStatus {
            status: 502,
            url: "https://swapi.py4e.com/api/films/1/".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "reference fetch returned status 502: https://swapi.py4e.com/api/films/1/"
        );
    }
}
