use leptos::prelude::*;
use leptos_meta::Title;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::catalog::{Catalog, Project};
use crate::gallery::ModalState;
use crate::i18n::Translations;

use super::language::use_language_store;
use super::modal::ProjectModal;

/// How long the modal exit transition runs; the selection is cleared only
/// after this so the panel never goes blank mid-transition.
const MODAL_EXIT_MS: f64 = 200.0;

static WEB2_SKILLS: &[&str] = &[
    "React",
    "TypeScript",
    "Node.js",
    "Next.js",
    "Tailwind CSS",
    "PostgreSQL",
];
static WEB3_SKILLS: &[&str] = &[
    "Solidity",
    "Web3.js",
    "Ethers.js",
    "Hardhat",
    "IPFS",
    "MetaMask",
];
static TOOL_SKILLS: &[&str] = &["Git", "Docker", "AWS", "Figma", "Vercel", "MongoDB"];

#[component]
pub fn HomePage() -> impl IntoView {
    let store = use_language_store();
    let t = Signal::derive(move || Translations::get(store.get()));
    let catalog = Signal::derive(move || Catalog::build(store.get()));

    let modal = RwSignal::new(ModalState::default());
    let UseTimeoutFnReturn {
        start: start_clear, ..
    } = use_timeout_fn(
        move |_: ()| modal.update(|m| m.clear_selection()),
        MODAL_EXIT_MS,
    );
    let on_close = Callback::new(move |_: ()| {
        modal.update(|m| m.close());
        start_clear(());
    });
    let on_open = Callback::new(move |project: Project| modal.update(|m| m.open(project)));

    let bucket = move |projects: Vec<Project>| {
        projects
            .into_iter()
            .map(|project| view! { <ProjectCard project on_open /> })
            .collect_view()
    };

    view! {
        <Title text="Portfolio" />
        <div class="min-h-screen bg-gradient-to-br from-background via-background to-muted/20">
            // Hero
            <section id="hero" class="pt-24 pb-12 px-6">
                <div class="container mx-auto max-w-4xl text-center">
                    <h1 class="text-6xl md:text-8xl font-bold mb-4 bg-gradient-to-r from-white via-blue-100 to-purple-100 bg-clip-text text-transparent">
                        {move || t.get().hero.title}
                    </h1>
                    <h2 class="text-xl md:text-2xl text-muted-foreground mb-6 font-medium">
                        {move || t.get().hero.subtitle}
                    </h2>
                    <p class="text-lg text-muted-foreground/80 mb-12 max-w-2xl mx-auto leading-relaxed">
                        {move || t.get().hero.description}
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <a
                            href="#projects"
                            class="px-6 py-3 rounded-lg bg-gradient-to-r from-blue-600 to-purple-600 hover:from-blue-700 hover:to-purple-700 shadow-lg shadow-blue-500/25"
                        >
                            {move || t.get().hero.cta}
                        </a>
                        <a
                            href="#contact"
                            class="px-6 py-3 rounded-lg border border-border/50 hover:bg-white/10"
                        >
                            {move || t.get().hero.contact}
                        </a>
                    </div>
                </div>
            </section>

            // About
            <section id="about" class="py-20 px-6">
                <div class="container mx-auto max-w-4xl">
                    <h2 class="text-4xl font-bold text-center mb-12">
                        {move || t.get().about.title}
                    </h2>
                    <div class="bg-card/50 border border-border/50 rounded-lg p-8">
                        <p class="text-lg text-muted-foreground leading-relaxed text-center">
                            {move || t.get().about.description}
                        </p>
                    </div>
                </div>
            </section>

            // Services
            <section id="services" class="py-20 px-6 bg-muted/5">
                <div class="container mx-auto max-w-6xl">
                    <div class="text-center mb-16">
                        <h2 class="text-4xl font-bold mb-4">{move || t.get().services.title}</h2>
                        <p class="text-lg text-muted-foreground">
                            {move || t.get().services.subtitle}
                        </p>
                    </div>
                    <div class="grid md:grid-cols-3 gap-8">
                        {move || {
                            let services = &t.get().services;
                            [
                                ("icon-globe", "text-blue-400", &services.web2),
                                ("icon-cpu", "text-purple-400", &services.web3),
                                ("icon-database", "text-green-400", &services.fullstack),
                            ]
                                .into_iter()
                                .map(|(icon, icon_color, service)| {
                                    view! {
                                        <div class="bg-card/50 border border-border/50 rounded-lg p-8 text-center hover:bg-card/70 transition-colors">
                                            <i class=format!("{icon} {icon_color} text-3xl mb-6 inline-block") />
                                            <h3 class="text-xl font-semibold mb-4">{service.title}</h3>
                                            <p class="text-muted-foreground">{service.description}</p>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </div>
            </section>

            // Projects
            <section id="projects" class="py-20 px-6">
                <div class="container mx-auto max-w-6xl">
                    <h2 class="text-4xl font-bold text-center mb-16">
                        {move || t.get().projects.title}
                    </h2>
                    <div class="space-y-12">
                        <div>
                            <h3 class="text-2xl font-semibold mb-8 text-purple-400">
                                {move || t.get().projects.web3}
                            </h3>
                            <div class="grid md:grid-cols-2 gap-8">
                                {move || bucket(catalog.get().web3)}
                            </div>
                        </div>
                        <div>
                            <h3 class="text-2xl font-semibold mb-8 text-blue-400">
                                {move || t.get().projects.web2}
                            </h3>
                            <div class="grid md:grid-cols-2 gap-8">
                                {move || bucket(catalog.get().web2)}
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            // Skills
            <section id="skills" class="py-20 px-6 bg-muted/5">
                <div class="container mx-auto max-w-6xl">
                    <h2 class="text-4xl font-bold text-center mb-16">
                        {move || t.get().skills.title}
                    </h2>
                    <div class="grid md:grid-cols-3 gap-8">
                        {move || {
                            let skills = &t.get().skills;
                            [
                                (skills.web2, "text-blue-400", WEB2_SKILLS),
                                (skills.web3, "text-purple-400", WEB3_SKILLS),
                                (skills.tools, "text-green-400", TOOL_SKILLS),
                            ]
                                .into_iter()
                                .map(|(title, title_color, entries)| {
                                    view! {
                                        <div class="bg-card/50 border border-border/50 rounded-lg p-6">
                                            <h3 class=format!("text-xl font-semibold mb-4 {title_color}")>
                                                {title}
                                            </h3>
                                            <div class="flex flex-wrap gap-2">
                                                {entries
                                                    .iter()
                                                    .map(|skill| {
                                                        view! {
                                                            <span class="px-3 py-1 bg-muted/20 rounded-full text-sm border border-border/50">
                                                                {*skill}
                                                            </span>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </div>
            </section>

            // Contact
            <section id="contact" class="py-20 px-6">
                <div class="container mx-auto max-w-4xl text-center">
                    <h2 class="text-4xl font-bold mb-4">{move || t.get().contact.title}</h2>
                    <h3 class="text-2xl font-semibold mb-6 text-muted-foreground">
                        {move || t.get().contact.subtitle}
                    </h3>
                    <p class="text-lg text-muted-foreground mb-12 max-w-2xl mx-auto">
                        {move || t.get().contact.description}
                    </p>
                    <a
                        href="mailto:fabian@fabianfahlesi.dev"
                        class="inline-block px-6 py-3 rounded-lg bg-gradient-to-r from-blue-600 to-purple-600 hover:from-blue-700 hover:to-purple-700 shadow-lg shadow-blue-500/25 mb-12"
                    >
                        {move || t.get().contact.cta}
                    </a>
                    <div class="flex justify-center gap-6">
                        <a
                            href="https://github.com/fabianfahlesi"
                            target="_blank"
                            rel="noreferrer"
                            class="p-3 rounded-md border border-border/50 hover:bg-white/10 text-2xl"
                            aria-label="GitHub Profile"
                        >
                            <i class="devicon-github-plain"></i>
                        </a>
                        <a
                            href="https://linkedin.com/in/fabianfahlesi"
                            target="_blank"
                            rel="noreferrer"
                            class="p-3 rounded-md border border-border/50 hover:bg-white/10 text-2xl"
                            aria-label="LinkedIn Profile"
                        >
                            <i class="devicon-linkedin-plain"></i>
                        </a>
                    </div>
                </div>
            </section>

            <footer class="py-8 px-6 border-t border-border/40">
                <div class="container mx-auto max-w-4xl text-center text-sm text-muted-foreground">
                    <p>{move || format!("© 2024 Fabian. {}", t.get().footer)}</p>
                </div>
            </footer>

            <ProjectModal modal on_close />
        </div>
    }
}

/// One project card; clicking anywhere on it opens the modal.
#[component]
fn ProjectCard(project: Project, on_open: Callback<Project>) -> impl IntoView {
    let store = use_language_store();
    let t = Signal::derive(move || Translations::get(store.get()));

    view! {
        <div
            class="group bg-card/50 border border-border/50 rounded-lg p-6 cursor-pointer hover:shadow-lg hover:shadow-blue-500/10 transition-all"
            on:click=move |_| on_open.run(project)
        >
            <div class="flex items-center gap-2 mb-4">
                <i class=format!("{} text-purple-400", project.icon.class()) />
                <h4 class="text-xl font-semibold">{project.title}</h4>
            </div>
            <p class="text-muted-foreground mb-4">{project.description}</p>
            <div class="flex gap-2">
                <button
                    class="px-3 py-1.5 text-sm rounded-md border border-border/50 hover:bg-white/10"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_open.run(project);
                    }
                >
                    {move || t.get().projects.view_project}
                </button>
                {project
                    .code_link
                    .map(|href| {
                        view! {
                            <a
                                href=href
                                target="_blank"
                                rel="noreferrer"
                                class="px-3 py-1.5 text-sm rounded-md hover:bg-white/10"
                                on:click=move |ev| ev.stop_propagation()
                            >
                                {move || t.get().projects.view_code}
                            </a>
                        }
                    })}
            </div>
        </div>
    }
}
