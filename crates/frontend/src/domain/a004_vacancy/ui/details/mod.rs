use crate::domain::a004_vacancy::ui::application::VacancyApplication;
use crate::shared::components::ui::category_badge;
use crate::shared::icons::icon;
use contracts::domain::a004_vacancy::Vacancy;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn VacancyDetails(vacancy: Vacancy) -> impl IntoView {
    let bullet_list = |items: &[String]| {
        items
            .iter()
            .map(|item| view! { <li>{item.clone()}</li> })
            .collect_view()
    };

    view! {
        <div class="vacancy-detail">
            <div class="vacancy-detail__facts">
                {category_badge::<Vacancy>(&vacancy.category)}
                <span>{icon("map-pin")}{vacancy.location.clone()}</span>
                <span>{vacancy.modality.clone()}</span>
                <span>{vacancy.kind.clone()}</span>
                {vacancy.salary_range.clone().map(|s| view! { <span class="salary">{s}</span> })}
            </div>

            <p class="vacancy-detail__description">{vacancy.description.clone()}</p>

            <div class="vacancy-detail__columns">
                <div>
                    <h4>"Requisitos"</h4>
                    <ul>{bullet_list(&vacancy.requirements)}</ul>
                </div>
                <div>
                    <h4>"Qué ofrecemos"</h4>
                    <ul>{bullet_list(&vacancy.benefits)}</ul>
                </div>
            </div>

            <VacancyApplication vacancy=vacancy />
        </div>
    }
}
