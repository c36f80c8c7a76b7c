use thiserror::Error;

/// Validation failures reported by the roster actions. The messages are shown
/// verbatim in the footer, and the action leaves all state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("Please fill in both First Name and Last Name.")]
    EmptyRequiredField,
    #[error("Please select a row to delete.")]
    EmptySelection,
    #[error("Birth date '{0}' is not a valid YYYY-MM-DD date.")]
    InvalidBirthDate(String),
}
