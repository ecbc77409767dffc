use yew::prelude::*;

mod components;
mod config;
mod hooks;
mod services;

use components::dental_calendar::DentalCalendar;

#[function_component(App)]
fn app() -> Html {
    html! {
        <main class="app">
            <header class="app-header">
                <h1>{"Dental Office Scheduling"}</h1>
            </header>
            <DentalCalendar />
        </main>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
