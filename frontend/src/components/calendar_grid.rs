use chrono::NaiveDate;
use yew::prelude::*;

use shared::{dates, Catalog, DayStatus};

use crate::components::photo_collage::PhotoCollage;

#[derive(Properties, PartialEq)]
pub struct CalendarGridProps {
    pub catalog: Catalog,
    /// The session's single reference date; every cell classifies against it.
    pub today: NaiveDate,
    pub on_select_day: Callback<u32>,
    pub on_back: Callback<()>,
}

/// The grid of day cells. Locked days render as disabled buttons — this is
/// where the `Locked` precondition of the detail view is enforced.
#[function_component(CalendarGrid)]
pub fn calendar_grid(props: &CalendarGridProps) -> Html {
    let start = props.catalog.start_date();

    // The birthday has arrived once the final day unlocks; from then on
    // the photo collage tops the grid.
    let final_day_unlocked = dates::is_unlocked(start, props.catalog.len(), props.today);

    let on_back_click = {
        let on_back = props.on_back.clone();
        Callback::from(move |_: MouseEvent| on_back.emit(()))
    };

    let mut cells = Vec::with_capacity(props.catalog.days().len());
    for entry in props.catalog.days() {
        let status = DayStatus::classify(start, entry.day, props.today);
        let date_label = dates::format_short_ca(dates::date_for_day(start, entry.day));

        let onclick = {
            let on_select_day = props.on_select_day.clone();
            let day = entry.day;
            Callback::from(move |_: MouseEvent| on_select_day.emit(day))
        };

        let class = classes!(
            "day-cell",
            status.unlocked.then_some("day-cell-unlocked"),
            status.today.then_some("day-cell-today"),
            (!status.unlocked).then_some("day-cell-locked"),
        );

        cells.push(html! {
            <button key={entry.day} {class} disabled={!status.unlocked} {onclick}>
                <div class="day-cell-glyph">
                    { if status.unlocked { "🎁" } else { "🔒" } }
                </div>
                <span class="day-cell-number">{entry.day}</span>
                <span class="day-cell-date">{date_label}</span>
                { if status.unlocked {
                    html! { <span class="day-cell-sparkle">{"✨"}</span> }
                } else {
                    html! {}
                }}
            </button>
        });
    }

    html! {
        <div class="calendar-screen">
            <header class="calendar-header">
                <h1 class="calendar-heading">
                    {format!("Calendari de {} dies", props.catalog.len())}
                </h1>
                <button class="calendar-back-btn" onclick={on_back_click}>{"✕"}</button>
            </header>

            <div class="calendar-banner">
                <h2>{"Feliç dia, mamà!"}</h2>
                <p>{"Una nova sorpresa t'espera cada dia."}</p>
            </div>

            { if final_day_unlocked {
                html! { <PhotoCollage /> }
            } else {
                html! {}
            }}

            <div class="calendar-grid">
                { for cells }
            </div>
        </div>
    }
}
