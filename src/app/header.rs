use leptos::{html, prelude::*};
use leptos_use::on_click_outside;

use crate::i18n::Translations;

use super::language::{use_language_store, LanguageToggle};

/// Fixed top navigation: brand glyph, per-section anchors, the language
/// toggle, and a disclosure menu for narrow viewports.
#[component]
pub fn Header() -> impl IntoView {
    let store = use_language_store();
    let nav = Signal::derive(move || &Translations::get(store.get()).nav);

    let is_mobile_menu_open = RwSignal::new(false);
    // Covers the hamburger button and the open panel; a pointer event
    // anywhere else dismisses the menu.
    let nav_region_ref = NodeRef::<html::Div>::new();
    let _ = on_click_outside(nav_region_ref, move |_| {
        if is_mobile_menu_open.get_untracked() {
            is_mobile_menu_open.set(false);
        }
    });

    let nav_links = move |link_class: &'static str| {
        nav.get()
            .entries()
            .into_iter()
            .map(|(anchor, label)| {
                view! {
                    <a
                        href=format!("#{anchor}")
                        class=link_class
                        on:click=move |_| is_mobile_menu_open.set(false)
                    >
                        {label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header class="fixed top-0 w-full z-40 backdrop-blur-sm bg-background/80 border-b border-border/40">
            <div node_ref=nav_region_ref class="container mx-auto px-6 py-4">
                <div class="flex justify-between items-center">
                    <a
                        href="#hero"
                        class="text-2xl font-bold bg-gradient-to-r from-primary to-blue-400 bg-clip-text text-transparent"
                    >
                        "F"
                    </a>
                    <div class="flex items-center gap-6">
                        <nav class="hidden md:flex gap-6">
                            {move || nav_links(
                                "text-sm text-muted-foreground hover:text-foreground transition-colors",
                            )}
                        </nav>
                        <LanguageToggle />
                        <button
                            class="md:hidden p-2 rounded-md hover:bg-white/10"
                            aria-label="Toggle navigation menu"
                            on:click=move |_| is_mobile_menu_open.update(|open| *open = !*open)
                        >
                            <i class=move || {
                                if is_mobile_menu_open.get() { "icon-x" } else { "icon-menu" }
                            } />
                        </button>
                    </div>
                </div>
                {move || {
                    is_mobile_menu_open
                        .get()
                        .then(|| {
                            view! {
                                <nav class="md:hidden flex flex-col gap-2 mt-4 pb-2">
                                    {nav_links(
                                        "text-sm text-muted-foreground hover:text-foreground py-2",
                                    )}
                                </nav>
                            }
                        })
                }}
            </div>
        </header>
    }
}
