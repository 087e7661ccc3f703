use super::not_found::NotFound;
use crate::domain::a001_order::ui::details::OrderDetail;
use crate::domain::a001_order::ui::list::OrdersList;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <main class="app-main">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=|| view! { <Redirect path="/orders" /> } />
                    <Route path=path!("/dashboard") view=|| view! { <Redirect path="/orders" /> } />
                    <Route path=path!("/orders") view=OrdersList />
                    <Route path=path!("/orders/:id") view=OrderDetail />
                    <Route path=path!("/404") view=NotFound />
                </Routes>
            </main>
        </Router>
    }
}
