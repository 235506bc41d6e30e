use crate::error::ValidationError;

/// What the widget knows about a picked or dropped file before reading it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFileInfo {
    pub name: String,
    pub mime: String,
    pub size: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadPolicy {
    pub max_bytes: Option<u64>,
    /// Exact MIME types accepted. `None` accepts any `image/*`.
    pub allowed_types: Option<Vec<String>>,
}

impl UploadPolicy {
    pub fn validate(&self, file: &ImageFileInfo) -> Result<(), ValidationError> {
        let mime = file.mime.trim().to_ascii_lowercase();
        if !mime.starts_with("image/") {
            return Err(ValidationError::NotAnImage(file.mime.clone()));
        }
        if let Some(allowed) = &self.allowed_types {
            if !allowed.iter().any(|t| t.eq_ignore_ascii_case(&mime)) {
                return Err(ValidationError::UnsupportedType {
                    mime,
                    allowed: describe_types(allowed),
                });
            }
        }
        if let Some(limit) = self.max_bytes {
            if file.size > limit {
                return Err(ValidationError::TooLarge { size: file.size, limit });
            }
        }
        Ok(())
    }

    /// Value for the file input's `accept` attribute.
    pub fn accept(&self) -> String {
        match &self.allowed_types {
            Some(types) if !types.is_empty() => types.join(","),
            _ => "image/*".to_string(),
        }
    }

    /// Line shown under the drop zone.
    pub fn hint(&self) -> String {
        let types = match &self.allowed_types {
            Some(types) if !types.is_empty() => describe_types(types),
            _ => "Cualquier imagen".to_string(),
        };
        match self.max_bytes {
            Some(limit) => format!("{types} · Máximo {}", format_size(limit)),
            None => types,
        }
    }
}

const KIB: u64 = 1024;
const MIB: u64 = 1024 * KIB;

/// `10485760` -> `"10MB"`, `1572864` -> `"1.5MB"`, `512000` -> `"500KB"`.
pub fn format_size(bytes: u64) -> String {
    let scaled = |unit: u64, suffix: &str| {
        if bytes % unit == 0 {
            format!("{}{suffix}", bytes / unit)
        } else {
            format!("{:.1}{suffix}", bytes as f64 / unit as f64)
        }
    };
    match bytes {
        b if b >= MIB => scaled(MIB, "MB"),
        b if b >= KIB => scaled(KIB, "KB"),
        b => format!("{b} bytes"),
    }
}

/// `["image/jpeg", "image/png", "image/webp"]` -> `"JPEG, PNG o WEBP"`.
fn describe_types(types: &[String]) -> String {
    let names: Vec<String> = types
        .iter()
        .map(|t| t.rsplit('/').next().unwrap_or(t).to_uppercase())
        .collect();
    match names.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{} o {}", rest.join(", "), last),
        Some((last, _)) => last.clone(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(mime: &str, size: u64) -> ImageFileInfo {
        ImageFileInfo { name: "photo".into(), mime: mime.into(), size }
    }

    #[test]
    fn hint_and_accept_follow_policy() {
        let open = UploadPolicy { max_bytes: None, allowed_types: None };
        assert_eq!(open.accept(), "image/*");
        assert_eq!(open.hint(), "Cualquier imagen");

        let strict = UploadPolicy {
            max_bytes: Some(5 * 1024 * 1024),
            allowed_types: Some(vec!["image/jpeg".into(), "image/png".into()]),
        };
        assert_eq!(strict.accept(), "image/jpeg,image/png");
        assert_eq!(strict.hint(), "JPEG o PNG · Máximo 5MB");
    }

    #[test]
    fn sizes_below_a_megabyte_are_not_rounded_to_zero() {
        assert_eq!(format_size(10 * MIB), "10MB");
        assert_eq!(format_size(MIB + MIB / 2), "1.5MB");
        assert_eq!(format_size(500 * KIB), "500KB");
        assert_eq!(format_size(1536), "1.5KB");
        assert_eq!(format_size(300), "300 bytes");

        let small = UploadPolicy { max_bytes: Some(500 * KIB), allowed_types: None };
        assert_eq!(small.hint(), "Cualquier imagen · Máximo 500KB");
    }

    fn strict() -> UploadPolicy {
        UploadPolicy {
            max_bytes: Some(1024),
            allowed_types: Some(vec!["image/jpeg".into(), "image/png".into(), "image/webp".into()]),
        }
    }

    #[test]
    fn rejects_non_images() {
        for mime in ["application/pdf", "text/plain", "", "video/mp4"] {
            assert!(matches!(
                UploadPolicy::default().validate(&file(mime, 10)),
                Err(ValidationError::NotAnImage(_))
            ));
        }
    }

    #[test]
    fn open_policy_accepts_any_image_subtype() {
        assert!(UploadPolicy::default().validate(&file("image/gif", 10)).is_ok());
        assert!(UploadPolicy::default().validate(&file("IMAGE/HEIC", 10)).is_ok());
    }

    #[test]
    fn allow_list_and_size_limit() {
        assert!(strict().validate(&file("image/png", 1024)).is_ok());
        let err = strict().validate(&file("image/gif", 10)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Tipo de archivo no válido. Solo se permiten imágenes JPEG, PNG o WEBP."
        );
        assert_eq!(
            strict().validate(&file("image/jpeg", 1025)),
            Err(ValidationError::TooLarge { size: 1025, limit: 1024 })
        );
    }
}
