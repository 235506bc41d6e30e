use thiserror::Error;

/// Reasons the widget refuses to start. These are only ever logged.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("no widget configuration found, expected window.CLIPWidget = {{ apiKey: \"YOUR_KEY\" }}")]
    MissingConfig,
    #[error("apiKey is required, expected window.CLIPWidget = {{ apiKey: \"YOUR_KEY\" }}")]
    MissingApiKey,
    #[error("invalid widget configuration: {0}")]
    InvalidConfig(String),
    #[error("container #{0} not found")]
    MissingContainer(String),
}

/// Rejected upload. The display text is shown to the end user as is.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Solo se permiten archivos de imagen.")]
    NotAnImage(String),
    #[error("Tipo de archivo no válido. Solo se permiten imágenes {allowed}.")]
    UnsupportedType { mime: String, allowed: String },
    #[error("El archivo es demasiado grande. Máximo {}.", crate::upload::format_size(.limit.to_owned()))]
    TooLarge { size: u64, limit: u64 },
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {status} {reason}")]
    Status { status: u16, reason: String },
    #[error("malformed response: {0}")]
    Decode(String),
}

impl TransportError {
    /// Message shown in place of results. The technical detail goes to the log.
    pub fn user_message(&self) -> &'static str {
        match self {
            TransportError::Network(_) => {
                "No se puede conectar con el servicio de búsqueda. Por favor, inténtalo más tarde."
            }
            TransportError::Status { status: 401 | 403, .. } => {
                "Acceso no autorizado. Verifica tu configuración."
            }
            TransportError::Status { status: 404, .. } => {
                "Servicio de búsqueda no disponible temporalmente."
            }
            TransportError::Status { status: 500..=599, .. } => {
                "Error interno del servidor. Por favor, inténtalo más tarde."
            }
            TransportError::Status { .. } | TransportError::Decode(_) => {
                "Error al realizar la búsqueda. Intenta nuevamente."
            }
        }
    }
}

/// A submit that never reached the network, or a response that arrived too late.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejected {
    #[error("a search is already in flight")]
    Busy,
    #[error("Por favor ingresa una descripción")]
    EmptyQuery,
    #[error("Selecciona una imagen primero.")]
    NoImageSelected,
    #[error("response belongs to a superseded search")]
    Stale,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_classes_map_to_friendly_text() {
        let unauthorized = TransportError::Status { status: 403, reason: "Forbidden".into() };
        assert!(unauthorized.user_message().contains("no autorizado"));
        let gateway = TransportError::Status { status: 502, reason: "Bad Gateway".into() };
        assert!(gateway.user_message().contains("servidor"));
        let teapot = TransportError::Status { status: 418, reason: String::new() };
        assert_eq!(teapot.user_message(), TransportError::Decode(String::new()).user_message());
    }

    #[test]
    fn too_large_reports_limit_in_megabytes() {
        let err = ValidationError::TooLarge { size: 11 * 1024 * 1024, limit: 10 * 1024 * 1024 };
        assert_eq!(err.to_string(), "El archivo es demasiado grande. Máximo 10MB.");
        let err = ValidationError::TooLarge { size: 600 * 1024, limit: 500 * 1024 };
        assert_eq!(err.to_string(), "El archivo es demasiado grande. Máximo 500KB.");
    }
}
