use thiserror::Error;

/// Errors surfaced by the demo data layer.
///
/// Queries never fail — absent results come back as `Option`/empty
/// collections. These variants cover the two boundaries that can reject
/// input: parsing enum strings from the UI and validating the compiled-in
/// seed dataset at store construction.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },

    #[error("Seed integrity violation: {0}")]
    SeedIntegrity(String),
}
