use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{footer::Footer, navigation::Navigation};
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let path = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_default();

    use_effect_with_deps(
        |path: &String| {
            gloo_console::warn!(format!("No page at {}", path));
            || ()
        },
        path,
    );

    html! {
        <div class="not-found-page">
            <style>{r#"
                .not-found-page { min-height: 100vh; display: flex; flex-direction: column; background: var(--cream); color: var(--charcoal); }
                .not-found { flex: 1; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 1.5rem; padding: 8rem 1.5rem; text-align: center; }
                .not-found strong { font-size: clamp(5rem, 18vw, 12rem); font-weight: 200; line-height: 1; color: var(--teal); }
                .not-found h1 { margin: 0; font-size: clamp(1.5rem, 4vw, 2.5rem); font-weight: 500; }
                .not-found p { margin: 0; max-width: 32rem; color: rgba(44,44,44,0.6); }
                .not-found-actions { display: flex; flex-wrap: wrap; justify-content: center; gap: 1rem; }
                .not-found-actions a { padding: 0.9rem 2rem; border-radius: 999px; border: 1px solid rgba(44,44,44,0.2); }
                .not-found-actions a.primary { background: var(--teal); border-color: var(--teal); color: #fff; }
            "#}</style>
            <Navigation />
            <main class="not-found">
                <strong>{"404"}</strong>
                <h1>{"Halaman tidak ditemukan"}</h1>
                <p>{"Halaman yang Anda cari mungkin telah dipindahkan atau tidak pernah ada."}</p>
                <div class="not-found-actions">
                    <Link<Route> to={Route::Home} classes="primary">{"Kembali ke Beranda"}</Link<Route>>
                    <Link<Route> to={Route::Portfolio}>{"Lihat Portfolio"}</Link<Route>>
                </div>
            </main>
            <Footer />
        </div>
    }
}
