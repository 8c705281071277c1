//! Client-uploaded images arrive as `data:` URLs with an embedded
//! base64 payload (the personal photo and project gallery), or as
//! plain external URLs. Size and MIME checks happen here, before any
//! store interaction.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

pub const MAX_IMAGE_BYTES: usize = 1024 * 1024;
pub const MAX_PROJECT_IMAGES: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageError {
    NotAnImage,
    TooLarge,
}

impl ImageError {
    pub fn message_key(&self) -> &'static str {
        match self {
            ImageError::NotAnImage => "validation.not_an_image",
            ImageError::TooLarge => "validation.image_too_large",
        }
    }
}

/// Validate one image entry. Data URLs must declare an `image/*`
/// MIME and decode to at most 1 MiB; anything else must be an
/// https URL.
pub fn validate_image(value: &str) -> Result<(), ImageError> {
    let value = value.trim();

    if let Some(rest) = value.strip_prefix("data:") {
        let Some((mime, payload)) = rest.split_once(";base64,") else {
            return Err(ImageError::NotAnImage);
        };

        if !mime.starts_with("image/") {
            return Err(ImageError::NotAnImage);
        }

        let bytes = STANDARD
            .decode(payload)
            .map_err(|_| ImageError::NotAnImage)?;

        if bytes.len() > MAX_IMAGE_BYTES {
            return Err(ImageError::TooLarge);
        }

        return Ok(());
    }

    if value.starts_with("https://") {
        return Ok(());
    }

    Err(ImageError::NotAnImage)
}

/// Fixture helper shared by form tests.
#[cfg(test)]
pub(crate) fn data_url_of_size(bytes: usize) -> String {
    let payload = STANDARD.encode(vec![0u8; bytes]);
    format!("data:image/png;base64,{payload}")
}
