use crate::routes::routes::AppRoutes;
use crate::shared::i18n::{use_i18n, I18n, Language};
use crate::shared::notifications::{NotificationHost, Notifications};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn App() -> impl IntoView {
    let language = Language::detect();
    log::info!("UI language: {}", language.code());

    provide_context(I18n::new(language));
    provide_context(Notifications::new());

    view! {
        <ConfigProvider>
            <header class="app-header">
                <span class="app-header__title">"Order Admin"</span>
                <LanguageSwitch />
            </header>
            <AppRoutes />
            <NotificationHost />
        </ConfigProvider>
    }
}

#[component]
fn LanguageSwitch() -> impl IntoView {
    let language = use_i18n().language;

    view! {
        <Flex gap=FlexGap::Small>
            {Language::ALL
                .into_iter()
                .map(|lang| view! {
                    <Button
                        appearance=Signal::derive(move || if language.get() == lang {
                            ButtonAppearance::Primary
                        } else {
                            ButtonAppearance::Subtle
                        })
                        size=ButtonSize::Small
                        on_click=move |_| language.set(lang)
                    >
                        {lang.code().to_uppercase()}
                    </Button>
                })
                .collect_view()}
        </Flex>
    }
}
