//! Site header with static navigation links.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;
use leptos_router::components::A;

/// A single navigation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

/// Header links in display order.
pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { href: "/", label: "홈" },
    NavLink { href: "/board", label: "게시판" },
    NavLink { href: "/login", label: "로그인" },
    NavLink { href: "/signup", label: "회원가입" },
];

/// Navigation bar rendered above every page. Must sit inside the `Router`.
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <nav>
                <ul class="nav-list">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <li class="nav-item">
                                    <A href=link.href attr:class="nav-link">
                                        {link.label}
                                    </A>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </nav>
        </header>
    }
}
