use chrono::NaiveDate;
use yew::prelude::*;

use shared::{dates, effects, DayContent, DayEntry, DayStatus, RevealPhase};

use crate::hooks::use_reveal::use_reveal;
use crate::services::assets;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct DayDetailProps {
    pub entry: DayEntry,
    /// Classification computed by the caller against the session's
    /// reference date — the same one the grid used.
    pub status: DayStatus,
    /// The entry's calendar date, for the date badge.
    pub date: NaiveDate,
    pub on_close: Callback<()>,
}

/// Modal detail view for one day: mystery box for today, content straight
/// away for days that have passed.
#[function_component(DayDetail)]
pub fn day_detail(props: &DayDetailProps) -> Html {
    let reveal = use_reveal(props.entry.day, props.status);
    let image_failed = use_state(|| false);
    let media_failed = use_state(|| false);

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };
    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    if !props.status.unlocked {
        // The grid never offers locked days; reaching this view for one is
        // a caller bug. Render an explicit placeholder, not content.
        Logger::error_with_component(
            "day-detail",
            &format!("detail view opened for locked day {}", props.entry.day),
        );
        return html! {
            <div class="day-detail-backdrop" onclick={on_backdrop_click}>
                <div class="day-detail-modal day-detail-locked" onclick={on_modal_click}>
                    <div class="day-detail-locked-glyph">{"🔒"}</div>
                    <p>{"Aquest dia encara no s'ha desbloquejat."}</p>
                    <button class="day-detail-close-btn" onclick={on_close_click}>
                        {"Torna al calendari"}
                    </button>
                </div>
            </div>
        };
    }

    let pastel = effects::pastel_class_for_day(props.entry.day);

    let body = match reveal.phase {
        RevealPhase::Unopened => html! {
            <button class="mystery-box" onclick={reveal.on_open_box.clone()}>
                <div class="mystery-box-lid">{"🎁"}</div>
                <p class="mystery-box-prompt">{"Toca per descobrir la sorpresa d'avui"}</p>
            </button>
        },
        RevealPhase::Revealing => {
            let effect = effects::effect_for_day(props.entry.day);
            html! {
                <div class={classes!("reveal-stage", effect.animation_class)}>
                    <div class="reveal-emoji">{effect.emoji}</div>
                    <p class="reveal-headline">{effect.headline}</p>
                </div>
            }
        }
        RevealPhase::Revealed => revealed_body(props, pastel, &image_failed, &media_failed),
    };

    html! {
        <div class="day-detail-backdrop" onclick={on_backdrop_click}>
            <div class="day-detail-modal" onclick={on_modal_click}>
                <div class={classes!("day-detail-header", pastel)}>
                    <button class="day-detail-back" onclick={on_close_click}>{"←"}</button>
                    <h2 class="day-detail-day">{format!("Dia {}", props.entry.day)}</h2>
                    <span class="day-detail-spacer"></span>
                </div>
                <div class="day-detail-body">
                    <div class={classes!("day-detail-date", pastel)}>
                        {dates::format_long_ca(props.date)}
                    </div>
                    <h3 class="day-detail-title">{&props.entry.title}</h3>
                    {body}
                </div>
            </div>
        </div>
    }
}

/// Content once the box is open, branching on the content type. Media that
/// fails to load degrades to a textual fallback; it never takes the view
/// down with it.
fn revealed_body(
    props: &DayDetailProps,
    pastel: &'static str,
    image_failed: &UseStateHandle<bool>,
    media_failed: &UseStateHandle<bool>,
) -> Html {
    let illustration = match &props.entry.image {
        Some(path) if !**image_failed => {
            let onerror = {
                let image_failed = image_failed.clone();
                Callback::from(move |_: Event| image_failed.set(true))
            };
            html! {
                <div class="day-detail-image">
                    <img
                        src={assets::asset_url(path)}
                        alt={format!("Dia {}", props.entry.day)}
                        {onerror}
                    />
                </div>
            }
        }
        // A broken illustration hides itself; the day's content stands alone.
        _ => html! {},
    };

    let content = match &props.entry.content {
        DayContent::Clue { outcome_text, .. } => {
            let heading = if props.status.passed && outcome_text.is_some() {
                "La sorpresa era:"
            } else {
                "La teva pista d'avui:"
            };
            let text = props
                .entry
                .content
                .revealed_text(props.status.passed)
                .unwrap_or_default();
            html! {
                <div class={classes!("day-detail-card", pastel)}>
                    <div class="day-detail-card-icon">{"🎁"}</div>
                    <div class="day-detail-card-text">
                        <h4>{heading}</h4>
                        <p>{text}</p>
                    </div>
                </div>
            }
        }
        DayContent::Virtual { .. } => {
            let text = props
                .entry
                .content
                .revealed_text(props.status.passed)
                .unwrap_or_default();
            html! {
                <div class={classes!("day-detail-card", pastel)}>
                    <div class="day-detail-card-icon">{"🎟️"}</div>
                    <div class="day-detail-card-text">
                        <h4>{"Una experiència per a tu:"}</h4>
                        <p>{text}</p>
                    </div>
                </div>
            }
        }
        DayContent::Audio { media_path } => media_element(
            media_failed,
            "L'àudio d'avui no s'ha pogut carregar. 🎵",
            html_audio(media_path, media_failed),
        ),
        DayContent::Video { media_path } => media_element(
            media_failed,
            "El vídeo d'avui no s'ha pogut carregar. 🎬",
            html_video(media_path, media_failed),
        ),
        DayContent::Photo { media_path } => media_element(
            media_failed,
            "La foto d'avui no s'ha pogut carregar. 📷",
            html_photo(media_path, props.entry.day, media_failed),
        ),
    };

    html! {
        <>
            {illustration}
            {content}
            <div class="day-detail-footer">
                <span class="footer-line"></span>
                <span class="footer-sparkle">{"✨"}</span>
                <span class="footer-line"></span>
                <p class="footer-signoff">{"Gaudeix de la sorpresa!"}</p>
            </div>
        </>
    }
}

fn media_element(media_failed: &UseStateHandle<bool>, fallback: &'static str, element: Html) -> Html {
    if **media_failed {
        html! { <p class="media-fallback">{fallback}</p> }
    } else {
        element
    }
}

fn html_audio(media_path: &str, media_failed: &UseStateHandle<bool>) -> Html {
    let onerror = on_media_error(media_failed);
    html! {
        <div class="day-detail-media">
            <audio controls=true src={assets::asset_url(media_path)} {onerror} />
        </div>
    }
}

fn html_video(media_path: &str, media_failed: &UseStateHandle<bool>) -> Html {
    let onerror = on_media_error(media_failed);
    html! {
        <div class="day-detail-media">
            <video controls=true playsinline=true src={assets::asset_url(media_path)} {onerror} />
        </div>
    }
}

fn html_photo(media_path: &str, day: u32, media_failed: &UseStateHandle<bool>) -> Html {
    let onerror = on_media_error(media_failed);
    html! {
        <div class="day-detail-media">
            <img src={assets::asset_url(media_path)} alt={format!("Sorpresa del dia {}", day)} {onerror} />
        </div>
    }
}

fn on_media_error(media_failed: &UseStateHandle<bool>) -> Callback<Event> {
    let media_failed = media_failed.clone();
    Callback::from(move |_: Event| media_failed.set(true))
}
