pub mod footer;
pub mod header;

use footer::Footer;
use header::header::Header;
use leptos::prelude::*;

/// Page chrome around the routed content
///
/// ```text
/// +------------------------------+
/// |            Header            |
/// +------------------------------+
/// |           content            |
/// +------------------------------+
/// |            Footer            |
/// +------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Header />
            <main class="app-main">
                {children()}
            </main>
            <Footer />
        </div>
    }
}
