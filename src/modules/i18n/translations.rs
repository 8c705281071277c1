//! Static key → string dictionaries, compiled into the binary.
//!
//! Stored content (experiences, projects, ...) is not translated;
//! these entries cover the UI chrome, validation and auth messages.

use crate::modules::i18n::Language;

pub const ES: &[(&str, &str)] = &[
    // Auth
    ("auth.user_not_found", "Usuario no encontrado"),
    ("auth.wrong_password", "Contraseña incorrecta"),
    ("auth.invalid_email", "El email no es válido"),
    (
        "auth.rate_limited",
        "Demasiados intentos. Inténtalo más tarde",
    ),
    ("auth.failed", "Error al iniciar sesión"),
    // Validation
    ("validation.required", "Este campo es obligatorio"),
    ("validation.invalid_email", "El email no es válido"),
    (
        "validation.url_https",
        "La URL debe comenzar con https://",
    ),
    (
        "validation.end_before_start",
        "La fecha de fin debe ser posterior a la de inicio",
    ),
    (
        "validation.invalid_month",
        "La fecha debe tener formato YYYY-MM",
    ),
    (
        "validation.invalid_date",
        "La fecha debe tener formato YYYY-MM-DD",
    ),
    (
        "validation.too_many_images",
        "Máximo 10 imágenes por proyecto",
    ),
    (
        "validation.image_too_large",
        "Cada imagen debe pesar menos de 1MB",
    ),
    ("validation.not_an_image", "El archivo no es una imagen"),
    (
        "validation.proficiency_range",
        "El nivel debe estar entre 1 y 5",
    ),
    (
        "validation.years_negative",
        "Los años no pueden ser negativos",
    ),
    ("validation.unknown_category", "Categoría desconocida"),
    // Theme
    (
        "validation.theme_both_shapes",
        "Envía un tema predefinido o uno personalizado, no ambos",
    ),
    (
        "validation.theme_missing_shape",
        "Envía un tema predefinido o uno personalizado",
    ),
    (
        "validation.theme_unknown_preset",
        "Tema predefinido desconocido",
    ),
    (
        "validation.theme_invalid_color",
        "El color debe ser hexadecimal de 6 dígitos",
    ),
    ("validation.theme_unknown_font", "Fuente no disponible"),
    // Errors
    ("error.not_found", "Recurso no encontrado"),
    ("error.unknown_language", "Idioma no soportado"),
    // Sections
    ("section.objective", "Objetivo Profesional"),
    ("section.experience", "Experiencia Laboral"),
    ("section.education", "Educación"),
    ("section.certifications", "Certificaciones"),
    ("section.skills", "Habilidades Técnicas"),
    ("section.portfolio", "Portafolio"),
    ("section.contact", "Contacto"),
    ("section.current", "Actualidad"),
    ("section.expired", "Vencida"),
    ("section.empty", "No hay contenido registrado"),
    // Proficiency labels
    ("proficiency.1", "Principiante"),
    ("proficiency.2", "Básico"),
    ("proficiency.3", "Intermedio"),
    ("proficiency.4", "Avanzado"),
    ("proficiency.5", "Experto"),
    // Project status labels
    ("status.completed", "Completado"),
    ("status.in-progress", "En ejecución"),
    ("status.planned", "En diseño"),
    ("status.on-hold", "Suspendido"),
];

pub const EN: &[(&str, &str)] = &[
    // Auth
    ("auth.user_not_found", "User not found"),
    ("auth.wrong_password", "Wrong password"),
    ("auth.invalid_email", "Invalid email address"),
    ("auth.rate_limited", "Too many attempts. Try again later"),
    ("auth.failed", "Login failed"),
    // Validation
    ("validation.required", "This field is required"),
    ("validation.invalid_email", "Invalid email address"),
    ("validation.url_https", "URL must start with https://"),
    (
        "validation.end_before_start",
        "End date must not precede start date",
    ),
    ("validation.invalid_month", "Date must be in YYYY-MM format"),
    (
        "validation.invalid_date",
        "Date must be in YYYY-MM-DD format",
    ),
    ("validation.too_many_images", "At most 10 images per project"),
    ("validation.image_too_large", "Each image must be under 1MB"),
    ("validation.not_an_image", "File is not an image"),
    (
        "validation.proficiency_range",
        "Proficiency must be between 1 and 5",
    ),
    ("validation.years_negative", "Years cannot be negative"),
    ("validation.unknown_category", "Unknown category"),
    // Theme
    (
        "validation.theme_both_shapes",
        "Send either a preset or a custom theme, not both",
    ),
    (
        "validation.theme_missing_shape",
        "Send either a preset or a custom theme",
    ),
    ("validation.theme_unknown_preset", "Unknown theme preset"),
    (
        "validation.theme_invalid_color",
        "Color must be a 6-digit hex value",
    ),
    ("validation.theme_unknown_font", "Font is not available"),
    // Errors
    ("error.not_found", "Resource not found"),
    ("error.unknown_language", "Unsupported language"),
    // Sections
    ("section.objective", "Professional Objective"),
    ("section.experience", "Work Experience"),
    ("section.education", "Education"),
    ("section.certifications", "Certifications"),
    ("section.skills", "Technical Skills"),
    ("section.portfolio", "Portfolio"),
    ("section.contact", "Contact"),
    ("section.current", "Present"),
    ("section.expired", "Expired"),
    ("section.empty", "Nothing here yet"),
    // Proficiency labels
    ("proficiency.1", "Beginner"),
    ("proficiency.2", "Basic"),
    ("proficiency.3", "Intermediate"),
    ("proficiency.4", "Advanced"),
    ("proficiency.5", "Expert"),
    // Project status labels
    ("status.completed", "Completed"),
    ("status.in-progress", "In progress"),
    ("status.planned", "Planned"),
    ("status.on-hold", "On hold"),
];

pub fn entries(language: Language) -> &'static [(&'static str, &'static str)] {
    match language {
        Language::Es => ES,
        Language::En => EN,
    }
}
