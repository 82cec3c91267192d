//! Landing page shown at `/`.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-container">
            <h1>"My Gallery"</h1>
            <p class="home-lead">"작품과 이야기를 나누는 공간입니다."</p>
            <div class="home-actions">
                <A href="/board" attr:class="home-link">"게시판 보기"</A>
                <A href="/signup" attr:class="home-link home-link--primary">"회원가입"</A>
            </div>
        </div>
    }
}
