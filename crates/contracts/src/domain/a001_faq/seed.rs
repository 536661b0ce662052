use super::aggregate::{Faq, FaqId};

#[allow(clippy::too_many_arguments)]
fn faq(
    id: FaqId,
    category: &str,
    question: &str,
    answer: &str,
    keywords: &[&str],
    helpful: u32,
    not_helpful: u32,
    related: &[FaqId],
) -> Faq {
    Faq {
        id,
        category: category.to_string(),
        question: question.to_string(),
        answer: answer.to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        helpful,
        not_helpful,
        related: related.to_vec(),
    }
}

/// FAQ collection shown on the FAQ page
pub fn seed() -> Vec<Faq> {
    vec![
        faq(
            1,
            "precios",
            "¿Cuánto cuesta desarrollar un sitio web para mi empresa?",
            "El precio depende del alcance: una web corporativa parte de 1.500 €, \
             una tienda online de 4.000 € y las aplicaciones a medida se presupuestan \
             tras una sesión de descubrimiento gratuita.",
            &["presupuesto", "tarifa", "coste"],
            156,
            12,
            &[2, 4],
        ),
        faq(
            2,
            "precios",
            "¿Ofrecen planes de pago a plazos?",
            "Sí. Dividimos el proyecto en hitos y facturamos cada uno al entregarlo; \
             para proyectos grandes ofrecemos financiación a 12 meses.",
            &["financiación", "hitos", "factura"],
            98,
            7,
            &[1],
        ),
        faq(
            3,
            "servicios",
            "¿Qué servicios de marketing digital ofrecen?",
            "SEO técnico y de contenidos, campañas de pago en buscadores y redes sociales, \
             email marketing y analítica con cuadros de mando mensuales.",
            &["seo", "sem", "redes sociales", "analítica"],
            121,
            9,
            &[5],
        ),
        faq(
            4,
            "proceso",
            "¿Cuánto tiempo tarda un proyecto típico?",
            "Una web corporativa se entrega en 4 a 6 semanas; una tienda online en 8 a 12. \
             Compartimos un calendario detallado en la primera reunión.",
            &["plazos", "calendario", "entrega"],
            87,
            5,
            &[1, 6],
        ),
        faq(
            5,
            "servicios",
            "¿Diseñan también la identidad de marca?",
            "Nuestro equipo de diseño crea logotipos, paletas, tipografías y manuales de \
             marca completos, coherentes con la experiencia digital.",
            &["branding", "logotipo", "diseño"],
            64,
            4,
            &[3],
        ),
        faq(
            6,
            "proceso",
            "¿Cómo es la comunicación durante el proyecto?",
            "Asignamos un responsable de proyecto, hacemos una revisión semanal por \
             videollamada y tendrás acceso a un tablero con el estado de cada tarea.",
            &["reuniones", "seguimiento"],
            45,
            3,
            &[4],
        ),
        faq(
            7,
            "tecnologia",
            "¿Con qué tecnologías trabajan?",
            "Rust y TypeScript en el frontend y el backend, WordPress y Shopify cuando el \
             cliente necesita autogestionar contenidos, y despliegues en la nube.",
            &["stack", "framework", "cms"],
            73,
            6,
            &[],
        ),
        faq(
            8,
            "soporte",
            "¿Qué ocurre después del lanzamiento?",
            "Incluimos tres meses de soporte y después ofrecemos planes de mantenimiento \
             con actualizaciones de seguridad, copias diarias y mejoras evolutivas.",
            &["mantenimiento", "garantía", "hosting"],
            59,
            2,
            &[7],
        ),
    ]
}
