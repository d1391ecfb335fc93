use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};

use crate::api::{fetch_people, portrait_url, Person};
use crate::state::RosterState;

fn portrait_seed() -> u32 {
    (js_sys::Math::random() * 1000.0) as u32
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let state = RwSignal::new(RosterState::default());
    let page = Memo::new(move |_| state.with(|s| s.page));

    // One request per page change (and one on mount). Search input never
    // reaches the network; filtering is local.
    Effect::new(move |_| {
        let page_number = page.get();
        let Some(ticket) = state.try_update(|s| s.begin_fetch()) else {
            return;
        };

        leptos::task::spawn_local(async move {
            let outcome = fetch_people(page_number).await.map(|body| body.results);
            if let Err(err) = &outcome {
                log::error!("listing fetch for page {page_number} failed: {err}");
            }

            if state.try_update(|s| s.finish_fetch(ticket, outcome)) == Some(false) {
                log::debug!("dropping superseded response for page {page_number}");
            }
        });
    });

    view! {
        <Title text="Star Wars Characters" />
        <div class="app">
            <header>
                <h1>"Star Wars Characters"</h1>
                <p class="subtitle">"Browse the galactic roster, five to a page"</p>
            </header>

            {move || state.with(|s| s.error.clone()).map(|message| view! {
                <div class="error">
                    <strong>"Error: "</strong>{message}
                </div>
            })}

            {move || {
                if state.with(|s| s.loading) {
                    view! { <div class="loading">"Loading characters..."</div> }.into_any()
                } else {
                    view! {
                        <div>
                            <input
                                type="text"
                                class="search-input"
                                placeholder="Search by Name"
                                prop:value=move || state.with(|s| s.search.clone())
                                on:input=move |ev| {
                                    let value = event_target::<web_sys::HtmlInputElement>(&ev).value();
                                    state.update(|s| s.search = value);
                                }
                            />

                            <div class="card-grid">
                                {move || state.with(|s| s.visible_people())
                                    .into_iter()
                                    .map(|person| view! { <PersonCard person /> })
                                    .collect::<Vec<_>>()}
                            </div>

                            <div class="pagination">
                                {move || {
                                    let current = page.get();
                                    (1..=state.with(|s| s.page_count())).map(|n| {
                                        view! {
                                            <button
                                                class=if n == current { "page-button current" } else { "page-button" }
                                                on:click=move |_| state.update(|s| s.go_to_page(n))
                                            >
                                                {n}
                                            </button>
                                        }
                                    }).collect::<Vec<_>>()
                                }}
                            </div>
                        </div>
                    }.into_any()
                }
            }}

            <footer>
                <p>"Powered by SWAPI | Built with Rust + Leptos"</p>
            </footer>
        </div>
    }
}

#[component]
fn PersonCard(person: Person) -> impl IntoView {
    // The raw hair color doubles as the accent; unknown values ("n/a",
    // "none") just leave the border unpainted.
    let accent = format!("border-left: 4px solid {}", person.hair_color);
    let portrait = portrait_url(portrait_seed());
    let alt = format!("Random portrait - {}", person.name);

    view! {
        <div class="person-card" style=accent>
            <img src=portrait alt=alt class="person-image" />
            <div class="person-info">
                <h2 class="person-name">{person.name.clone()}</h2>
                <p>"Hair Color: "{person.hair_color.clone()}</p>
                <p>"Skin Color: "{person.skin_color.clone()}</p>
                <p>"Gender: "{person.gender.clone()}</p>
                <p>"Vehicles Count: "{person.vehicle_count()}</p>
            </div>
        </div>
    }
}
