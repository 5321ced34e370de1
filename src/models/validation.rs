use crate::errors::{GalleryError, GalleryResult};

pub trait StringValidations {
    fn should_not_empty(self, field_name: &str) -> GalleryResult<Self>
    where
        Self: Sized;

    /// Enforces the `^\S+$` token shape.
    fn should_be_token(self, field_name: &str) -> GalleryResult<Self>
    where
        Self: Sized;
}

impl<'a> StringValidations for &'a str {
    fn should_not_empty(self, field_name: &str) -> GalleryResult<Self> {
        if self.trim().is_empty() {
            Err(GalleryError::invalid_input(format!(
                "{} should not be empty",
                field_name
            )))
        } else {
            Ok(self)
        }
    }

    fn should_be_token(self, field_name: &str) -> GalleryResult<Self> {
        if self.is_empty() || self.chars().any(char::is_whitespace) {
            Err(GalleryError::invalid_input(format!(
                "{} must be a non-empty value without whitespace",
                field_name
            )))
        } else {
            Ok(self)
        }
    }
}

impl StringValidations for Option<&str> {
    fn should_not_empty(self, field_name: &str) -> GalleryResult<Self> {
        self.unwrap_or_default().should_not_empty(field_name)?;
        Ok(self)
    }

    fn should_be_token(self, field_name: &str) -> GalleryResult<Self> {
        self.unwrap_or_default().should_be_token(field_name)?;
        Ok(self)
    }
}
