use thiserror::Error;

/// Rejected listing parameter. Every variant names the parameter and carries
/// the raw value exactly as the client supplied it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("invalid params: `{param}` must be an integer, got {value:?}")]
    MalformedInteger { param: &'static str, value: String },

    #[error("invalid params: `{param}` must be a boolean, got {value:?}")]
    MalformedBoolean { param: &'static str, value: String },

    #[error("invalid params: unknown `mode` {value:?}")]
    UnknownMode { value: String },

    #[error("invalid params: unknown `order` field {value:?}")]
    UnknownOrderField { value: String },
}

impl QueryError {
    /// Name of the offending query parameter.
    pub fn param(&self) -> &'static str {
        match self {
            QueryError::MalformedInteger { param, .. }
            | QueryError::MalformedBoolean { param, .. } => *param,
            QueryError::UnknownMode { .. } => "mode",
            QueryError::UnknownOrderField { .. } => "order",
        }
    }

    /// Raw value supplied for [`QueryError::param`].
    pub fn value(&self) -> &str {
        match self {
            QueryError::MalformedInteger { value, .. }
            | QueryError::MalformedBoolean { value, .. }
            | QueryError::UnknownMode { value }
            | QueryError::UnknownOrderField { value } => value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_report_param_and_raw_value() {
        let err = QueryError::MalformedInteger {
            param: "limit",
            value: "abc".to_string(),
        };
        assert_eq!(err.param(), "limit");
        assert_eq!(err.value(), "abc");

        let err = QueryError::UnknownOrderField {
            value: "bogus".to_string(),
        };
        assert_eq!(err.param(), "order");
        assert_eq!(err.value(), "bogus");
    }

    #[test]
    fn display_quotes_raw_value() {
        let err = QueryError::UnknownMode {
            value: "scroll".to_string(),
        };
        assert_eq!(err.to_string(), "invalid params: unknown `mode` \"scroll\"");
    }
}
