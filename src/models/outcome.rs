//! Backend results and the canonical resolution outcome.

/// A single matched administrative-region row from the spatial table.
#[derive(Debug, Clone, Default, PartialEq, sqlx::FromRow)]
pub struct SpatialRow {
    /// Region name; NULL in the table decodes as `None`
    pub name: Option<String>,
}

/// Canonical outcome of one resolution. Never carries both a name and an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionOutcome {
    Resolved(String),
    /// The backend answered successfully but nothing matched
    Empty,
    Failed(String),
}

impl ResolutionOutcome {
    /// Normalize a backend result: `Some` name resolves, `None` is empty, errors fail.
    pub fn from_result<E: std::fmt::Display>(result: Result<Option<String>, E>) -> Self {
        match result {
            Ok(Some(name)) => ResolutionOutcome::Resolved(name),
            Ok(None) => ResolutionOutcome::Empty,
            Err(e) => ResolutionOutcome::Failed(e.to_string()),
        }
    }

    /// Name to report, or "" when there is none
    pub fn name(&self) -> &str {
        match self {
            ResolutionOutcome::Resolved(name) => name,
            _ => "",
        }
    }

    /// Error message to report, or "" on success
    pub fn error(&self) -> &str {
        match self {
            ResolutionOutcome::Failed(message) => message,
            _ => "",
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ResolutionOutcome::Failed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_result() {
        let ok: Result<Option<String>, String> = Ok(Some("Florida".to_string()));
        assert_eq!(
            ResolutionOutcome::from_result(ok),
            ResolutionOutcome::Resolved("Florida".to_string())
        );

        let empty: Result<Option<String>, String> = Ok(None);
        assert_eq!(ResolutionOutcome::from_result(empty), ResolutionOutcome::Empty);

        let failed: Result<Option<String>, String> = Err("connection refused".to_string());
        let outcome = ResolutionOutcome::from_result(failed);
        assert!(outcome.is_failed());
        assert_eq!(outcome.error(), "connection refused");
        assert_eq!(outcome.name(), "");
    }
}
