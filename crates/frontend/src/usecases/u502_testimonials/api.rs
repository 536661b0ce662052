use contracts::shared::testimonial::Testimonial;
use gloo_net::http::Request;

const TESTIMONIALS_URL: &str = "/assets/testimonials.json";

pub async fn fetch_testimonials() -> Result<Vec<Testimonial>, String> {
    let response = Request::get(TESTIMONIALS_URL)
        .send()
        .await
        .map_err(|e| format!("Failed to fetch testimonials: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {} loading {}", response.status(), TESTIMONIALS_URL));
    }

    response
        .json::<Vec<Testimonial>>()
        .await
        .map_err(|e| format!("Failed to parse testimonials: {}", e))
}
