use super::aggregate::Project;

#[allow(clippy::too_many_arguments)]
fn project(
    id: &str,
    category: &str,
    title: &str,
    client: &str,
    description: &str,
    technologies: &[&str],
    image_count: usize,
    year: u16,
    url: Option<&str>,
) -> Project {
    Project {
        id: id.to_string(),
        category: category.to_string(),
        title: title.to_string(),
        client: client.to_string(),
        description: description.to_string(),
        technologies: technologies.iter().map(|t| t.to_string()).collect(),
        images: (1..=image_count)
            .map(|n| format!("/assets/showroom/{}-{}.jpg", id, n))
            .collect(),
        year,
        url: url.map(str::to_string),
    }
}

/// Case studies shown in the showroom
pub fn seed() -> Vec<Project> {
    vec![
        project(
            "bodega-alta",
            "ecommerce",
            "Tienda online Bodega Alta",
            "Bodega Alta",
            "Tienda de vinos con suscripción mensual, catas virtuales y envío refrigerado.",
            &["Shopify", "Stripe", "Klaviyo"],
            4,
            2024,
            Some("https://bodegaalta.example"),
        ),
        project(
            "clinica-norte",
            "web",
            "Web corporativa Clínica Norte",
            "Clínica Norte",
            "Sitio multiidioma con cita previa online y fichas de especialistas.",
            &["Rust", "Leptos", "PostgreSQL"],
            3,
            2023,
            Some("https://clinicanorte.example"),
        ),
        project(
            "rutamov",
            "app",
            "App de movilidad RutaMov",
            "Ayuntamiento de Valdemar",
            "Aplicación ciudadana con horarios de autobús en tiempo real y alertas.",
            &["Flutter", "Rust", "MQTT"],
            5,
            2024,
            None,
        ),
        project(
            "cafe-origen",
            "branding",
            "Identidad de marca Café Origen",
            "Café Origen",
            "Logotipo, packaging compostable y manual de marca para una cadena de cafeterías.",
            &["Figma", "Illustrator"],
            4,
            2022,
            None,
        ),
        project(
            "moda-lumen",
            "ecommerce",
            "Marketplace Moda Lumen",
            "Lumen Studio",
            "Marketplace de diseñadores independientes con pagos divididos.",
            &["Rust", "Axum", "Stripe Connect"],
            4,
            2023,
            Some("https://modalumen.example"),
        ),
        project(
            "fundacion-mar",
            "web",
            "Portal Fundación Mar Azul",
            "Fundación Mar Azul",
            "Portal de donaciones recurrentes y mapa interactivo de voluntariado.",
            &["WordPress", "Mapbox"],
            3,
            2022,
            None,
        ),
    ]
}
