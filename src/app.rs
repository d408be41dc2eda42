use leptos::*;
use strum::IntoEnumIterator;

use crate::application::log_failure;
use crate::domain::items::{Item, ItemRepository, ListFilter, ListKind, filter_and_sort};
use crate::domain::logging::LogComponent;
use crate::global_state::{
    celebrating, current_filter, current_tab, delete_target, is_spinning, items, roulette_config,
    roulette_empty, roulette_open, roulette_result, roulette_track, toast_message,
};
use crate::presentation::{
    cancel_delete, close_selection, confirm_delete, edit_item, new_item, open_selection,
    request_delete, select_tab, spin,
};

fn filter_label(filter: ListFilter) -> &'static str {
    match filter {
        ListFilter::All => "Todos",
        ListFilter::Pending => "⏳ Pendientes",
        ListFilter::Visited => "✅ Visitados",
    }
}

fn tab_label(kind: ListKind) -> &'static str {
    match kind {
        ListKind::Restaurants => "🍽️ Lugares para comer",
        ListKind::Activities => "🎬 Actividades",
    }
}

/// Root component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <style>
            {r#"
            .lists-app {
                font-family: 'Nunito', -apple-system, BlinkMacSystemFont, sans-serif;
                max-width: 640px;
                margin: 0 auto;
                padding: 16px;
            }

            .tabs, .filters {
                display: flex;
                gap: 8px;
                margin-bottom: 12px;
            }

            .tab.active, .filter-btn.active {
                background: #ff7a59;
                color: white;
            }

            .item-card {
                border-radius: 12px;
                padding: 12px;
                margin-bottom: 10px;
                background: white;
                box-shadow: 0 2px 6px rgba(0, 0, 0, 0.08);
            }

            .item-card.visitado {
                opacity: 0.75;
            }

            .star.filled {
                color: #ffb400;
            }

            .roulette-window {
                position: relative;
                overflow: hidden;
                border-radius: 12px;
                background: #1f1b2e;
            }

            .roulette-track {
                will-change: transform;
            }

            .roulette-item {
                display: flex;
                align-items: center;
                justify-content: center;
                color: #d8d4ea;
                font-size: 20px;
            }

            .roulette-item.winner {
                color: #ffd166;
                font-weight: 800;
                transform: scale(1.1);
            }

            .confetti {
                display: none;
            }

            .confetti.active {
                display: block;
                position: fixed;
                inset: 0;
                pointer-events: none;
                animation: burst 2.5s ease-out;
            }

            .toast {
                position: fixed;
                bottom: 24px;
                left: 50%;
                transform: translateX(-50%);
                background: #333;
                color: white;
                padding: 10px 18px;
                border-radius: 20px;
            }
            "#}
        </style>
        <div class="lists-app">
            <Tabs />
            <Filters />
            <ItemList />
            <button class="fab-add" on:click=move |_| new_item()>
                "➕"
            </button>
            <button class="fab-roulette" on:click=move |_| {
                log_failure(LogComponent::Presentation("Roulette"), "open roulette", open_selection());
            }>
                "🎰 Ruleta"
            </button>
            <RouletteModal />
            <DeleteModal />
            <div class="confetti" class:active=move || celebrating().get()></div>
            {move || toast_message().get().map(|message| view! { <div class="toast">{message}</div> })}
        </div>
    }
}

#[component]
fn Tabs() -> impl IntoView {
    view! {
        <div class="tabs">
            {ListKind::iter()
                .map(|kind| {
                    view! {
                        <button
                            class="tab"
                            class:active=move || current_tab().get() == kind
                            on:click=move |_| select_tab(kind)
                        >
                            {tab_label(kind)}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn Filters() -> impl IntoView {
    view! {
        <div class="filters">
            {ListFilter::iter()
                .map(|filter| {
                    view! {
                        <button
                            class="filter-btn"
                            class:active=move || current_filter().get() == filter
                            on:click=move |_| current_filter().set(filter)
                        >
                            {filter_label(filter)}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ItemList() -> impl IntoView {
    let visible = move || {
        let kind = current_tab().get();
        let filter = current_filter().get();
        items().with(|repo| filter_and_sort(&repo.items(kind), filter))
    };

    view! {
        <div class="items-list">
            <Show
                when=move || !visible().is_empty()
                fallback=|| view! { <div class="empty-state">"Nada por acá todavía 🌱"</div> }
            >
                <For
                    each=visible
                    key=|item: &Item| item.clone()
                    children=move |item: Item| view! { <ItemCard item=item /> }
                />
            </Show>
        </div>
    }
}

#[component]
fn ItemCard(item: Item) -> impl IntoView {
    let kind = current_tab().get_untracked();
    let badge = if item.is_pending() {
        view! { <span class="card-badge badge-pendiente">"⏳ Pendiente"</span> }
    } else {
        view! { <span class="card-badge badge-visitado">{kind.visited_label()}</span> }
    };
    let edit_id = item.id.clone();
    let delete_id = item.id.clone();

    let details = if item.shows_details() {
        let stars = item
            .rating
            .star_flags()
            .into_iter()
            .map(|filled| view! { <span class="star" class:filled=filled>"★"</span> })
            .collect_view();
        let description = item
            .description
            .clone()
            .map(|d| view! { <div class="card-description">{d}</div> });
        view! {
            <div class="card-rating">{stars}</div>
            {description}
        }
        .into_view()
    } else {
        ().into_view()
    };

    view! {
        <div class=format!("item-card {}", item.status)>
            <div class="card-top">
                <span class="card-name">{kind.card_title(&item.name)}</span>
                {badge}
            </div>
            {item.activity_type.clone().map(|t| view! { <span class="card-type">{t}</span> })}
            {item
                .location
                .clone()
                .map(|l| view! { <div class="card-location">{format!("📍 {}", l)}</div> })}
            {details}
            <div class="card-actions">
                <button class="card-btn card-btn-edit" on:click=move |_| edit_item(&edit_id)>
                    "✏️ Editar"
                </button>
                <button
                    class="card-btn card-btn-delete"
                    on:click=move |_| request_delete(delete_id.clone())
                >
                    "🗑️"
                </button>
            </div>
        </div>
    }
}

#[component]
fn DeleteModal() -> impl IntoView {
    view! {
        <Show when=move || delete_target().with(Option::is_some)>
            <div class="modal-overlay">
                <div class="modal delete-modal">
                    <h2>"¿Eliminar?"</h2>
                    <p>"Esta acción no se puede deshacer."</p>
                    <button class="btn-danger" on:click=move |_| confirm_delete()>
                        "Sí, eliminar 🗑️"
                    </button>
                    <button class="btn-close" on:click=move |_| cancel_delete()>
                        "Cancelar"
                    </button>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn RouletteModal() -> impl IntoView {
    let item_height = move || roulette_config().with(|c| c.item_height);
    let window_height = move || roulette_config().with(|c| c.item_height * c.visible_slots as f64);

    view! {
        <Show when=move || roulette_open().get()>
            <div class="modal-overlay">
                <div class="modal roulette-modal">
                    <h2>"🎰 ¿Qué hacemos hoy?"</h2>
                    <Show
                        when=move || !roulette_empty().get()
                        fallback=|| view! { <div class="empty-state">"No hay nada pendiente 🤷"</div> }
                    >
                        <div class="roulette-window" style=move || format!("height: {}px", window_height())>
                            <div
                                class="roulette-track"
                                style=move || {
                                    format!(
                                        "transform: translateY({}px)",
                                        roulette_track().with(|t| t.pixel_offset),
                                    )
                                }
                            >
                                {move || {
                                    roulette_track()
                                        .with(|track| {
                                            track
                                                .slot_contents
                                                .iter()
                                                .enumerate()
                                                .map(|(slot, name)| {
                                                    let winner = track.highlighted_slot == Some(slot);
                                                    view! {
                                                        <div
                                                            class="roulette-item"
                                                            class:winner=winner
                                                            style=format!("height: {}px", item_height())
                                                        >
                                                            {name.clone()}
                                                        </div>
                                                    }
                                                })
                                                .collect_view()
                                        })
                                }}
                            </div>
                        </div>
                        {move || {
                            roulette_result()
                                .get()
                                .map(|result| {
                                    view! {
                                        <div class="roulette-result">
                                            <div class="winner-name">{format!("🎉 {}", result.winner_name)}</div>
                                            <div class="winner-sub">{result.subtitle()}</div>
                                        </div>
                                    }
                                })
                        }}
                        <button
                            class="btn-spin"
                            disabled=move || is_spinning().get()
                            on:click=move |_| {
                                log_failure(LogComponent::Presentation("Roulette"), "spin", spin());
                            }
                        >
                            {move || if is_spinning().get() { "Girando..." } else { "¡Girar! 🎲" }}
                        </button>
                    </Show>
                    <button class="btn-close" on:click=move |_| close_selection()>
                        "Cerrar"
                    </button>
                </div>
            </div>
        </Show>
    }
}
