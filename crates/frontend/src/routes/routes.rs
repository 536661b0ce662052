use crate::domain::a001_faq::ui::list::FaqList;
use crate::domain::a002_destination::ui::list::DestinationList;
use crate::domain::a003_project::ui::list::ProjectList;
use crate::domain::a004_vacancy::ui::list::VacancyList;
use crate::layout::Shell;
use crate::system::pages::home::{ContactPage, HomePage};
use crate::system::pages::not_found::NotFound;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/faq") view=FaqList />
                    <Route path=path!("/showroom") view=ProjectList />
                    <Route path=path!("/careers") view=VacancyList />
                    <Route path=path!("/viajes") view=DestinationList />
                    <Route path=path!("/contacto") view=ContactPage />
                </Routes>
            </Shell>
        </Router>
    }
}
