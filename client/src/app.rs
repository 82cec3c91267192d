//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::header::Header;
use crate::config::{ApiConfig, provide_api_config};
use crate::pages::{board::BoardPage, home::HomePage, login::LoginPage, signup::SignupPage};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="ko">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the API configuration and maps the four routes to their pages.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_api_config(ApiConfig::from_build_env());

    view! {
        <Stylesheet id="leptos" href="/pkg/mygallery.css"/>
        <Title text="My Gallery"/>

        <Router>
            <Header/>
            <main>
                <Routes fallback=|| "페이지를 찾을 수 없습니다.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("signup") view=SignupPage/>
                    <Route path=StaticSegment("board") view=BoardPage/>
                </Routes>
            </main>
        </Router>
    }
}
