/// Errores de formulario (antes de llamar al backend)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Invalid age: {0}")]
    InvalidAge(String),
}

/// Campo obligatorio: no vacío tras trim
pub fn required(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Selección obligatoria (p. ej. género): None → campo faltante
pub fn selected<T: Copy>(field: &'static str, value: Option<T>) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::MissingField(field))
}

/// Campo opcional: vacío → None
pub fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Edad como entero no negativo y razonable
pub fn parse_age(value: &str) -> Result<u32, ValidationError> {
    let trimmed = required("Age", value)?;
    match trimmed.parse::<u32>() {
        Ok(age) if age <= 150 => Ok(age),
        _ => Err(ValidationError::InvalidAge(trimmed)),
    }
}
