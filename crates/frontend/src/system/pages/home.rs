use crate::usecases::u501_contact::ContactForm;
use crate::usecases::u502_testimonials::TestimonialsStrip;
use leptos::prelude::*;
use leptos_router::components::A;

struct Service {
    title: &'static str,
    text: &'static str,
    href: &'static str,
}

const SERVICES: &[Service] = &[
    Service {
        title: "Desarrollo web",
        text: "Webs corporativas rápidas, accesibles y fáciles de mantener.",
        href: "/showroom",
    },
    Service {
        title: "E-commerce",
        text: "Tiendas online integradas con tu logística y tus pagos.",
        href: "/showroom",
    },
    Service {
        title: "Aplicaciones",
        text: "Apps a medida para clientes y equipos internos.",
        href: "/showroom",
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page page--home">
            <section class="hero">
                <h1 class="hero__title">"Diseñamos y desarrollamos productos digitales"</h1>
                <p class="hero__subtitle">
                    "Webs, tiendas online y aplicaciones para empresas que quieren crecer."
                </p>
                <div class="hero__actions">
                    <A href="/showroom" attr:class="button button--primary">"Ver proyectos"</A>
                    <A href="/contacto" attr:class="button button--secondary">"Pide presupuesto"</A>
                </div>
            </section>

            <section class="services">
                {SERVICES
                    .iter()
                    .map(|s| view! {
                        <article class="service">
                            <h3>{s.title}</h3>
                            <p>{s.text}</p>
                            <A href=s.href attr:class="button button--link">"Saber más"</A>
                        </article>
                    })
                    .collect_view()}
            </section>

            <TestimonialsStrip />

            <ContactForm />
        </div>
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <div class="page page--contact">
            <ContactForm />
        </div>
    }
}
