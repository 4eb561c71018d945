use yew::prelude::*;

use shared::CalendarConfig;

#[derive(Properties, PartialEq)]
pub struct WelcomeScreenProps {
    pub config: CalendarConfig,
    pub on_start: Callback<()>,
}

/// Full-screen intro card: title, subtitle and the start button. The
/// calendar itself only appears after the button is pressed.
#[function_component(WelcomeScreen)]
pub fn welcome_screen(props: &WelcomeScreenProps) -> Html {
    let onclick = {
        let on_start = props.on_start.clone();
        Callback::from(move |_: MouseEvent| on_start.emit(()))
    };

    let button_text = props
        .config
        .button_text
        .clone()
        .unwrap_or_else(|| "✨ Què toca avui? ✨".to_string());

    html! {
        <div class="welcome-screen">
            <div class="welcome-card">
                <div class="welcome-stripe welcome-stripe-top"></div>
                <div class="welcome-body">
                    <div class="welcome-illustration">
                        <div class="welcome-emoji">{"🎂"}</div>
                        <div class="welcome-float welcome-float-sparkle">{"✨"}</div>
                        <div class="welcome-float welcome-float-gift">{"🎁"}</div>
                    </div>
                    <h1 class="welcome-title">{&props.config.title}</h1>
                    <p class="welcome-subtitle">{&props.config.subtitle}</p>
                    <div class="welcome-divider">
                        <span class="divider-line"></span>
                        <span class="divider-heart">{"❤️"}</span>
                        <span class="divider-line"></span>
                    </div>
                    <button class="welcome-start-btn" {onclick}>{button_text}</button>
                    <p class="welcome-hint">
                        {format!("Un nou regal cada dia durant {} dies", props.config.days.len())}
                    </p>
                </div>
                <div class="welcome-stripe welcome-stripe-bottom"></div>
            </div>
        </div>
    }
}
