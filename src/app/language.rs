use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use codee::string::FromToStringCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use crate::lang::Language;
#[cfg(feature = "hydrate")]
use crate::lang::LANGUAGE_STORAGE_KEY;

/// The tab-wide language store, provided as context at the app root.
///
/// On the client the backing signal comes from local storage: writes
/// persist synchronously, and a missing or unrecognized stored tag decodes
/// to the default (`en`). On the server it is a plain signal holding the
/// default. Subscription is Leptos reactivity; anything reading
/// [`LanguageStore::get`] in a reactive scope re-runs on `set`.
#[derive(Clone, Copy)]
pub struct LanguageStore {
    language: Signal<Language>,
    set_language: WriteSignal<Language>,
}

impl LanguageStore {
    pub fn get(&self) -> Language {
        self.language.get()
    }

    pub fn set(&self, language: Language) {
        self.set_language.set(language);
    }
}

pub fn provide_language_store() {
    #[cfg(feature = "hydrate")]
    let (language, set_language, _) =
        use_local_storage::<Language, FromToStringCodec>(LANGUAGE_STORAGE_KEY);

    #[cfg(not(feature = "hydrate"))]
    let (language, set_language) = {
        let (language, set_language) = signal(Language::default());
        (Signal::from(language), set_language)
    };

    provide_context(LanguageStore {
        language,
        set_language,
    });
}

pub fn use_language_store() -> LanguageStore {
    expect_context::<LanguageStore>()
}

/// One pill button per language, in the fixed `[En, Id]` order.
#[component]
pub fn LanguageToggle() -> impl IntoView {
    let store = use_language_store();

    view! {
        <div class="flex gap-1 bg-muted/20 rounded-full p-1 border border-white/10">
            {Language::ALL
                .into_iter()
                .map(|lang| {
                    view! {
                        <button
                            class=move || {
                                if store.get() == lang {
                                    "text-xs px-3 py-1 h-8 rounded-full bg-gradient-to-r from-blue-500 to-purple-600 text-white shadow-lg shadow-blue-500/25"
                                } else {
                                    "text-xs px-3 py-1 h-8 rounded-full hover:bg-white/10 text-muted-foreground hover:text-white"
                                }
                            }
                            on:click=move |_| store.set(lang)
                        >
                            {lang.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
