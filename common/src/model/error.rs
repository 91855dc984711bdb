use serde::{Deserialize, Serialize};

/// JSON body of every failed request on the `/api` surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorBody {
    /// Human readable reason, e.g. "Товар не найден".
    #[cfg_attr(feature = "openapi", schema(example = "Товар не найден"))]
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
