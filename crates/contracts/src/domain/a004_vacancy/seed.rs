use super::aggregate::Vacancy;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Open positions listed on the careers page
pub fn seed() -> Vec<Vacancy> {
    vec![
        Vacancy {
            id: "rust-backend".into(),
            category: "desarrollo".into(),
            title: "Desarrollador/a Backend Rust".into(),
            location: "Madrid".into(),
            modality: "Híbrido".into(),
            kind: "Jornada completa".into(),
            salary_range: Some("38.000 – 48.000 €".into()),
            description: "Diseñarás APIs y servicios para tiendas online y aplicaciones de clientes."
                .into(),
            requirements: strings(&["Rust", "Axum o Actix", "PostgreSQL", "Docker"]),
            benefits: strings(&["Formación anual", "Seguro médico", "Horario flexible"]),
        },
        Vacancy {
            id: "frontend-wasm".into(),
            category: "desarrollo".into(),
            title: "Desarrollador/a Frontend".into(),
            location: "Remoto (España)".into(),
            modality: "Remoto".into(),
            kind: "Jornada completa".into(),
            salary_range: Some("32.000 – 42.000 €".into()),
            description: "Construirás interfaces rápidas y accesibles con Leptos y TypeScript."
                .into(),
            requirements: strings(&["Leptos o React", "CSS moderno", "Accesibilidad"]),
            benefits: strings(&["Equipo remoto", "Presupuesto de material"]),
        },
        Vacancy {
            id: "ux-designer".into(),
            category: "diseno".into(),
            title: "Diseñador/a UX/UI".into(),
            location: "Barcelona".into(),
            modality: "Presencial".into(),
            kind: "Jornada completa".into(),
            salary_range: None,
            description: "Investigación con usuarios, prototipos y sistemas de diseño.".into(),
            requirements: strings(&["Figma", "Portfolio", "Tests con usuarios"]),
            benefits: strings(&["Conferencias pagadas", "Horario intensivo en verano"]),
        },
        Vacancy {
            id: "seo-specialist".into(),
            category: "marketing".into(),
            title: "Especialista SEO".into(),
            location: "Valencia".into(),
            modality: "Híbrido".into(),
            kind: "Media jornada".into(),
            salary_range: Some("18.000 – 22.000 €".into()),
            description: "Auditorías técnicas, estrategia de contenidos y reporting a clientes."
                .into(),
            requirements: strings(&["Search Console", "Screaming Frog", "Analítica"]),
            benefits: strings(&["Horario flexible"]),
        },
        Vacancy {
            id: "project-manager".into(),
            category: "gestion".into(),
            title: "Project Manager Digital".into(),
            location: "Madrid".into(),
            modality: "Híbrido".into(),
            kind: "Jornada completa".into(),
            salary_range: Some("40.000 – 50.000 €".into()),
            description: "Coordinarás equipos multidisciplinares y la relación con clientes."
                .into(),
            requirements: strings(&["Scrum", "Jira", "Comunicación con clientes"]),
            benefits: strings(&["Seguro médico", "Bonus por objetivos"]),
        },
    ]
}
