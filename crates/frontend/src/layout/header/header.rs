use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

#[derive(Debug, Clone, Copy)]
pub struct NavItem {
    pub href: &'static str,
    pub title: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { href: "/showroom", title: "Showroom" },
    NavItem { href: "/faq", title: "FAQ" },
    NavItem { href: "/careers", title: "Empleo" },
    NavItem { href: "/viajes", title: "Demo viajes" },
    NavItem { href: "/contacto", title: "Contacto" },
];

#[component]
pub fn Header() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <header data-zone="header" class="site-header">
            <A href="/" attr:class="site-header__brand">"Norte Digital"</A>
            <button
                class="button button--ghost site-header__toggle"
                aria-label="Menú"
                aria-expanded=move || menu_open.get().to_string()
                on:click=move |_| set_menu_open.update(|v| *v = !*v)
            >
                {move || if menu_open.get() { icon("x") } else { icon("menu") }}
            </button>
            <nav class="site-nav" class:site-nav--open=move || menu_open.get()>
                {NAV_ITEMS
                    .iter()
                    .map(|item| view! {
                        <A
                            href=item.href
                            attr:class="site-nav__link"
                            on:click=move |_| set_menu_open.set(false)
                        >
                            {item.title}
                        </A>
                    })
                    .collect_view()}
            </nav>
        </header>
    }
}
