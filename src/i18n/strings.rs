/// All localized strings consumed by the SEO layer and the page shell.
///
/// Strings are stored raw and unescaped. Escaping happens when they are
/// written into HTML (see `seo::head`).
#[derive(Debug, Clone)]
pub struct LocaleStrings {
    // ==================== Metadata ====================
    /// Page title, also used for Open Graph, Twitter and image alt text
    pub metadata_title: &'static str,

    /// Meta description
    pub metadata_description: &'static str,

    // ==================== Page Shell ====================
    /// Accessibility skip link text
    pub skip_to_content: &'static str,

    /// Heading of the not-found page
    pub not_found_heading: &'static str,

    /// Body text of the not-found page
    pub not_found_message: &'static str,

    /// Label of the link back to the home page
    pub go_home: &'static str,
}

impl LocaleStrings {
    /// Strings for a locale code, falling back to English.
    pub fn for_code(code: &str) -> &'static LocaleStrings {
        match code {
            "el" => &GREEK_STRINGS,
            "es" => &SPANISH_STRINGS,
            "ar" => &ARABIC_STRINGS,
            _ => &ENGLISH_STRINGS,
        }
    }
}

// ==================== English Strings ====================

pub const ENGLISH_STRINGS: LocaleStrings = LocaleStrings {
    metadata_title: "Placy Pro: AI Assistant for Real Estate Agents",
    metadata_description: "Placy Pro answers property enquiries, qualifies leads and books viewings \
for real estate agencies, around the clock and in every language your clients speak.",
    skip_to_content: "Skip to main content",
    not_found_heading: "404",
    not_found_message: "The page you're looking for doesn't exist or has been moved.",
    go_home: "Go home",
};

// ==================== Greek Strings ====================

pub const GREEK_STRINGS: LocaleStrings = LocaleStrings {
    metadata_title: "Placy Pro: Βοηθός AI για Μεσίτες Ακινήτων",
    metadata_description: "Το Placy Pro απαντά σε ερωτήσεις για ακίνητα, αξιολογεί πελάτες και \
κλείνει επισκέψεις για μεσιτικά γραφεία, όλο το εικοσιτετράωρο και σε κάθε γλώσσα.",
    skip_to_content: "Μετάβαση στο κύριο περιεχόμενο",
    not_found_heading: "404",
    not_found_message: "Η σελίδα που αναζητάτε δεν υπάρχει ή έχει μετακινηθεί.",
    go_home: "Αρχική σελίδα",
};

// ==================== Spanish Strings ====================

pub const SPANISH_STRINGS: LocaleStrings = LocaleStrings {
    metadata_title: "Placy Pro: Asistente de IA para Agentes Inmobiliarios",
    metadata_description: "Placy Pro responde consultas sobre propiedades, califica clientes \
potenciales y agenda visitas para agencias inmobiliarias, a toda hora y en cualquier idioma.",
    skip_to_content: "Saltar al contenido principal",
    not_found_heading: "404",
    not_found_message: "La página que buscas no existe o ha sido movida.",
    go_home: "Volver al inicio",
};

// ==================== Arabic Strings ====================

pub const ARABIC_STRINGS: LocaleStrings = LocaleStrings {
    metadata_title: "Placy Pro: مساعد ذكاء اصطناعي للوكلاء العقاريين",
    metadata_description: "يجيب Placy Pro على استفسارات العقارات، ويؤهل العملاء المحتملين، \
ويحجز المعاينات للوكالات العقارية على مدار الساعة وبكل اللغات.",
    skip_to_content: "انتقل إلى المحتوى الرئيسي",
    not_found_heading: "404",
    not_found_message: "الصفحة التي تبحث عنها غير موجودة أو تم نقلها.",
    go_home: "العودة إلى الرئيسية",
};
