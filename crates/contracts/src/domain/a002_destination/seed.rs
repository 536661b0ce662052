use super::aggregate::{Destination, DestinationId};

#[allow(clippy::too_many_arguments)]
fn destination(
    id: DestinationId,
    category: &str,
    name: &str,
    country: &str,
    description: &str,
    price_eur: u32,
    duration_days: u32,
    image_count: usize,
    highlights: &[&str],
    rating: f32,
) -> Destination {
    let slug = name.to_lowercase().replace(' ', "-");
    Destination {
        id,
        category: category.to_string(),
        name: name.to_string(),
        country: country.to_string(),
        description: description.to_string(),
        price_eur,
        duration_days,
        images: (1..=image_count)
            .map(|n| format!("/assets/travel/{}-{}.jpg", slug, n))
            .collect(),
        highlights: highlights.iter().map(|h| h.to_string()).collect(),
        rating,
    }
}

/// Destinations of the travel agency demo page
pub fn seed() -> Vec<Destination> {
    vec![
        destination(
            1,
            "europa",
            "Santorini",
            "Grecia",
            "Casas encaladas sobre la caldera, puestas de sol en Oia y playas volcánicas.",
            1290,
            7,
            5,
            &["Crucero por la caldera", "Cata de vinos", "Playa Roja"],
            4.8,
        ),
        destination(
            2,
            "europa",
            "Roma",
            "Italia",
            "La ciudad eterna: Coliseo, Vaticano y trattorias en el Trastevere.",
            890,
            5,
            4,
            &["Coliseo", "Museos Vaticanos", "Fontana di Trevi"],
            4.7,
        ),
        destination(
            3,
            "asia",
            "Kioto",
            "Japón",
            "Templos milenarios, jardines zen y la temporada de los cerezos en flor.",
            2150,
            10,
            6,
            &["Fushimi Inari", "Ceremonia del té", "Arashiyama"],
            4.9,
        ),
        destination(
            4,
            "asia",
            "Bali",
            "Indonesia",
            "Arrozales en terrazas, templos sobre el mar y surf en Uluwatu.",
            1650,
            9,
            5,
            &["Ubud", "Templo Tanah Lot", "Clases de surf"],
            4.6,
        ),
        destination(
            5,
            "america",
            "Cusco y Machu Picchu",
            "Perú",
            "La capital inca y la ciudadela sagrada tras el Camino Inca.",
            1890,
            8,
            5,
            &["Camino Inca", "Valle Sagrado", "Montaña de Colores"],
            4.9,
        ),
        destination(
            6,
            "america",
            "Riviera Maya",
            "México",
            "Cenotes, ruinas mayas junto al Caribe y arrecifes de coral.",
            1390,
            7,
            4,
            &["Tulum", "Cenotes", "Isla Mujeres"],
            4.5,
        ),
        destination(
            7,
            "africa",
            "Marrakech",
            "Marruecos",
            "Zocos, riads y una noche bajo las estrellas en el desierto de Agafay.",
            760,
            5,
            4,
            &["Plaza Jemaa el-Fna", "Jardín Majorelle", "Desierto de Agafay"],
            4.4,
        ),
        destination(
            8,
            "oceania",
            "Queenstown",
            "Nueva Zelanda",
            "Capital de la aventura entre lagos glaciares y fiordos.",
            2890,
            12,
            6,
            &["Milford Sound", "Puenting", "Ruta del vino de Otago"],
            4.8,
        ),
    ]
}
