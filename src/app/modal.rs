use leptos::{either::Either, prelude::*};

use crate::gallery::{MediaItem, ModalState};
use crate::i18n::Translations;

use super::language::use_language_store;

/// The project detail modal.
///
/// Renders nothing at all while no project is selected. While a selection
/// exists the panel stays mounted and visibility follows the open flag,
/// so the exit transition plays over real content; the page shell clears
/// the selection once that transition is done.
#[component]
pub fn ProjectModal(modal: RwSignal<ModalState>, on_close: Callback<()>) -> impl IntoView {
    let store = use_language_store();

    view! {
        {move || {
            let state = modal.get();
            let project = state.selected().copied()?;
            let t = Translations::get(store.get());
            let cursor = state.cursor();
            let len = cursor.len();
            let position = cursor.position();
            let current = cursor.current().copied();

            let visibility = if state.is_open() {
                "opacity-100"
            } else {
                "opacity-0 pointer-events-none"
            };

            let media_pane = current.map(|item| {
                let gallery_nav = (len > 1).then(|| {
                    let indicators = (0..len)
                        .map(|i| {
                            view! {
                                <button
                                    class=if i == position {
                                        "w-2.5 h-2.5 rounded-full bg-white"
                                    } else {
                                        "w-2.5 h-2.5 rounded-full bg-white/30 hover:bg-white/60"
                                    }
                                    aria-label=format!("Show media {}", i + 1)
                                    on:click=move |_| modal.update(|m| m.jump_to_media(i))
                                />
                            }
                        })
                        .collect_view();
                    view! {
                        <button
                            class="absolute left-2 top-1/2 -translate-y-1/2 p-2 rounded-full bg-black/50 hover:bg-black/70"
                            aria-label="Previous media"
                            on:click=move |_| modal.update(|m| m.previous_media())
                        >
                            <i class="icon-chevron-left" />
                        </button>
                        <button
                            class="absolute right-2 top-1/2 -translate-y-1/2 p-2 rounded-full bg-black/50 hover:bg-black/70"
                            aria-label="Next media"
                            on:click=move |_| modal.update(|m| m.next_media())
                        >
                            <i class="icon-chevron-right" />
                        </button>
                        <div class="absolute top-2 right-2 px-2 py-1 rounded-md bg-black/60 text-xs">
                            {format!("{} / {}", position + 1, len)}
                        </div>
                        <div class="absolute bottom-2 left-1/2 -translate-x-1/2 flex gap-2">
                            {indicators}
                        </div>
                    }
                });
                let media = match item {
                    MediaItem::Video { source, poster } => Either::Left(view! {
                        <video src=source controls=true poster=poster class="w-full h-auto" />
                    }),
                    MediaItem::Image { source } => Either::Right(view! {
                        <img src=source alt=project.title class="w-full h-auto object-cover" />
                    }),
                };
                view! {
                    <div class="relative mb-6 rounded-lg overflow-hidden">{media} {gallery_nav}</div>
                }
            });

            let technologies = (!project.technologies.is_empty()).then(|| {
                view! {
                    <div class="mb-6">
                        <h3 class="text-xl font-semibold mb-3">"Technologies Used"</h3>
                        <div class="flex flex-wrap gap-2">
                            {project
                                .technologies
                                .iter()
                                .map(|tech| {
                                    view! {
                                        <span class="px-3 py-1 bg-muted/20 rounded-full text-sm border border-border/50">
                                            {*tech}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                }
            });

            Some(
                view! {
                    <div class=format!(
                        "fixed inset-0 z-50 transition-opacity duration-200 {visibility}",
                    )>
                        <div
                            class="fixed inset-0 bg-black/80 backdrop-blur-sm"
                            on:click=move |_| on_close.run(())
                        />
                        <div class="fixed left-1/2 top-1/2 -translate-x-1/2 -translate-y-1/2 w-full max-w-4xl max-h-[90vh] overflow-y-auto bg-card border border-border rounded-lg shadow-2xl p-6">
                            <button
                                class="absolute right-4 top-4 p-2 rounded-md hover:bg-white/10"
                                aria-label="Close"
                                on:click=move |_| on_close.run(())
                            >
                                <i class="icon-x" />
                            </button>

                            <h2 class="text-3xl font-bold mb-4">{project.title}</h2>

                            {media_pane}

                            <p class="text-lg text-muted-foreground mb-6">
                                {project.long_description.unwrap_or(project.description)}
                            </p>

                            {technologies}

                            <div class="flex gap-4">
                                {project
                                    .demo_link
                                    .map(|href| {
                                        view! {
                                            <a
                                                href=href
                                                target="_blank"
                                                rel="noreferrer"
                                                class="px-4 py-2 rounded-md bg-gradient-to-r from-blue-600 to-purple-600 hover:from-blue-700 hover:to-purple-700"
                                            >
                                                {t.projects.view_project}
                                            </a>
                                        }
                                    })}
                                {project
                                    .code_link
                                    .map(|href| {
                                        view! {
                                            <a
                                                href=href
                                                target="_blank"
                                                rel="noreferrer"
                                                class="px-4 py-2 rounded-md border border-border/50 hover:bg-white/10"
                                            >
                                                {t.projects.view_code}
                                            </a>
                                        }
                                    })}
                            </div>
                        </div>
                    </div>
                },
            )
        }}
    }
}
