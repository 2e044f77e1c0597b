//! Ошибки модели данных

use std::fmt;

/// Ошибки загрузки и сборки модели
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Геометрия элемента некорректна (описание дефекта)
    InvalidGeometryInput(String),
    /// Документ не разбирается как ожидаемый JSON
    MalformedDocument(String),
    /// Операция над пустым набором элементов
    EmptySelection,
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidGeometryInput(msg) => {
                write!(f, "invalid geometry input: {}", msg)
            }
            ModelError::MalformedDocument(msg) => {
                write!(f, "malformed document: {}", msg)
            }
            ModelError::EmptySelection => {
                write!(f, "operation requires at least one element")
            }
        }
    }
}

impl std::error::Error for ModelError {}

/// Результат операций над моделью
pub type ModelResult<T> = Result<T, ModelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_geometry() {
        let e = ModelError::InvalidGeometryInput("thickness exceeds radius".to_string());
        assert_eq!(
            e.to_string(),
            "invalid geometry input: thickness exceeds radius"
        );
    }

    #[test]
    fn test_display_malformed_document() {
        let e = ModelError::MalformedDocument("expected object".to_string());
        assert!(e.to_string().starts_with("malformed document"));
    }

    #[test]
    fn test_display_empty_selection() {
        assert_eq!(
            ModelError::EmptySelection.to_string(),
            "operation requires at least one element"
        );
    }
}
