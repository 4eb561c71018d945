use yew::prelude::*;

use shared::{dates, DayStatus};

mod components;
mod hooks;
mod services;

use components::calendar_grid::CalendarGrid;
use components::day_detail::DayDetail;
use components::welcome_screen::WelcomeScreen;
use services::logging::Logger;

/// Which top-level view is on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Screen {
    Welcome,
    Calendar,
    Day(u32),
}

#[function_component(App)]
fn app() -> Html {
    // The catalog is parsed and validated exactly once per session.
    let catalog = use_memo((), |_| services::catalog::load());
    // One reference date for the whole session: every predicate for every
    // day is classified against this same value.
    let today = *use_memo((), |_| services::clock::today());

    let screen = use_state(|| Screen::Welcome);

    let on_start = {
        let screen = screen.clone();
        Callback::from(move |_| screen.set(Screen::Calendar))
    };
    let on_select_day = {
        let screen = screen.clone();
        Callback::from(move |day: u32| screen.set(Screen::Day(day)))
    };
    let on_close_day = {
        let screen = screen.clone();
        Callback::from(move |_| screen.set(Screen::Calendar))
    };
    let on_back_to_welcome = {
        let screen = screen.clone();
        Callback::from(move |_| screen.set(Screen::Welcome))
    };

    let catalog = match catalog.as_ref() {
        Ok(catalog) => catalog,
        Err(e) => {
            Logger::error_with_component("app", &format!("calendar data rejected: {}", e));
            return html! {
                <div class="fatal-error">
                    <div class="fatal-error-card">
                        <div class="fatal-error-emoji">{"😢"}</div>
                        <h1>{"El calendari no s'ha pogut carregar"}</h1>
                        <p>{"Les dades del calendari no són vàlides. Digues-ho a qui te l'ha regalat!"}</p>
                    </div>
                </div>
            };
        }
    };

    match *screen {
        Screen::Welcome => html! {
            <WelcomeScreen config={catalog.config().clone()} on_start={on_start} />
        },
        Screen::Calendar => html! {
            <CalendarGrid
                catalog={catalog.clone()}
                {today}
                on_select_day={on_select_day}
                on_back={on_back_to_welcome}
            />
        },
        Screen::Day(day) => match catalog.entry_for_day(day) {
            Some(entry) => html! {
                <DayDetail
                    key={day}
                    entry={entry.clone()}
                    status={DayStatus::classify(catalog.start_date(), day, today)}
                    date={dates::date_for_day(catalog.start_date(), day)}
                    on_close={on_close_day}
                />
            },
            None => {
                // A day the catalog does not have: fatal to this view only.
                Logger::error_with_component("app", &format!("day {} is not in the catalog", day));
                let on_error_back = {
                    let screen = screen.clone();
                    Callback::from(move |_: MouseEvent| screen.set(Screen::Calendar))
                };
                html! {
                    <div class="view-error">
                        <p>{format!("El dia {} no existeix en aquest calendari.", day)}</p>
                        <button class="view-error-back" onclick={on_error_back}>
                            {"Torna al calendari"}
                        </button>
                    </div>
                }
            }
        },
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
