use serde::Serialize;

/// Caller-supplied constraints narrowing a catalog query.
///
/// Every field is optional; an unset field leaves that dimension
/// unconstrained and is omitted from the wire query entirely. Field names
/// are mapped to the catalog's parameter names on serialization.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FilterCriteria {
    #[serde(rename = "make")]
    pub manufacturer: Option<String>,
    pub year: Option<u32>,
    pub model: Option<String>,
    pub limit: Option<u32>,
    #[serde(rename = "fuel_type")]
    pub fuel: Option<String>,
}

fn non_empty(field: &Option<String>) -> Option<String> {
    field.as_ref().filter(|s| !s.is_empty()).cloned()
}

impl FilterCriteria {
    /// The general-interest filter used when a query comes back empty.
    pub fn fallback() -> Self {
        Self {
            manufacturer: Some("Toyota".to_string()),
            limit: Some(10),
            ..Self::default()
        }
    }

    /// Serialize to a URL query string. Unset fields and fields set to an
    /// empty string are left out; an unconstrained filter yields `""`.
    pub fn to_query(&self) -> String {
        let trimmed = Self {
            manufacturer: non_empty(&self.manufacturer),
            year: self.year,
            model: non_empty(&self.model),
            limit: self.limit,
            fuel: non_empty(&self.fuel),
        };
        serde_urlencoded::to_string(&trimmed).unwrap_or_default()
    }
}
