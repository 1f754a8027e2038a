//! Static bilingual copy for every section of the page.
//!
//! Components never branch on [`Language`] themselves; they take the
//! resolved [`Translations`] table and read fields off it.

use crate::lang::Language;

#[derive(Debug, PartialEq, Eq)]
pub struct Translations {
    pub nav: Nav,
    pub hero: Hero,
    pub about: About,
    pub services: Services,
    pub projects: Projects,
    pub skills: Skills,
    pub contact: Contact,
    pub footer: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Nav {
    pub about: &'static str,
    pub projects: &'static str,
    pub services: &'static str,
    pub skills: &'static str,
    pub contact: &'static str,
}

impl Nav {
    /// Anchor/label pairs in display order. The anchors are the section
    /// element ids, shared between the nav links and the sections.
    pub fn entries(&self) -> [(&'static str, &'static str); 5] {
        [
            ("about", self.about),
            ("projects", self.projects),
            ("services", self.services),
            ("skills", self.skills),
            ("contact", self.contact),
        ]
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Hero {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub cta: &'static str,
    pub contact: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct About {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Services {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub web2: Service,
    pub web3: Service,
    pub fullstack: Service,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Projects {
    pub title: &'static str,
    pub web3: &'static str,
    pub web2: &'static str,
    pub view_project: &'static str,
    pub view_code: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Skills {
    pub title: &'static str,
    pub web2: &'static str,
    pub web3: &'static str,
    pub tools: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Contact {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub cta: &'static str,
}

impl Translations {
    pub fn get(language: Language) -> &'static Translations {
        match language {
            Language::En => &EN,
            Language::Id => &ID,
        }
    }
}

static EN: Translations = Translations {
    nav: Nav {
        about: "About",
        projects: "Projects",
        services: "Services",
        skills: "Skills",
        contact: "Contact",
    },
    hero: Hero {
        title: "Habib Fabian Fahlesi",
        subtitle: "Full-Stack Developer",
        description: "Passionate Web2 & Web3 developer building innovative solutions for both traditional web applications and blockchain ecosystems.",
        cta: "View My Work",
        contact: "Get In Touch",
    },
    about: About {
        title: "About Me",
        description: "I'm a passionate developer with expertise in both traditional web development and cutting-edge blockchain technologies. I love creating innovative solutions that bridge Web2 and Web3 ecosystems.",
    },
    services: Services {
        title: "Services",
        subtitle: "What I Offer",
        web2: Service {
            title: "Web Development",
            description: "Modern, responsive websites and web applications using latest technologies",
        },
        web3: Service {
            title: "Blockchain Development",
            description: "Smart contracts, DeFi protocols, and decentralized applications",
        },
        fullstack: Service {
            title: "Full-Stack Solutions",
            description: "End-to-end development from frontend to backend and database",
        },
    },
    projects: Projects {
        title: "Featured Projects",
        web3: "Blockchain Projects",
        web2: "Web Development & Mobile Applications",
        view_project: "View Project",
        view_code: "View Code",
    },
    skills: Skills {
        title: "Skills & Technologies",
        web2: "Web Development",
        web3: "Blockchain",
        tools: "Tools & Others",
    },
    contact: Contact {
        title: "Let's Work Together",
        subtitle: "Ready to start your next project?",
        description: "I'm available for freelance projects and full-time opportunities. Let's discuss how we can bring your ideas to life.",
        cta: "Get In Touch",
    },
    footer: "All rights reserved.",
};

static ID: Translations = Translations {
    nav: Nav {
        about: "Tentang",
        projects: "Proyek",
        services: "Layanan",
        skills: "Keahlian",
        contact: "Kontak",
    },
    hero: Hero {
        title: "Habib Fabian Fahlesi",
        subtitle: "Full-Stack Developer",
        description: "Developer Web2 & Web3 yang berpengalaman dalam membangun solusi inovatif untuk aplikasi web tradisional dan ekosistem blockchain.",
        cta: "Lihat Karya Saya",
        contact: "Hubungi Saya",
    },
    about: About {
        title: "Tentang Saya",
        description: "Saya adalah developer berpengalaman dengan keahlian dalam pengembangan web tradisional dan teknologi blockchain terdepan. Saya senang menciptakan solusi inovatif yang menghubungkan ekosistem Web2 dan Web3.",
    },
    services: Services {
        title: "Layanan",
        subtitle: "Apa yang Saya Tawarkan",
        web2: Service {
            title: "Jasa Pembuatan Website",
            description: "Website dan aplikasi web modern, responsif menggunakan teknologi terkini",
        },
        web3: Service {
            title: "Pengembangan Blockchain",
            description: "Smart contract, protokol DeFi, dan aplikasi terdesentralisasi",
        },
        fullstack: Service {
            title: "Solusi Full-Stack",
            description: "Pengembangan end-to-end dari frontend hingga backend dan database",
        },
    },
    projects: Projects {
        title: "Proyek Unggulan",
        web3: "Proyek Blockchain",
        web2: "Pengembangan Web & Aplikasi Mobile",
        view_project: "Lihat Proyek",
        view_code: "Lihat Kode",
    },
    skills: Skills {
        title: "Keahlian & Teknologi",
        web2: "Pengembangan Web",
        web3: "Blockchain",
        tools: "Tools & Lainnya",
    },
    contact: Contact {
        title: "Mari Berkolaborasi",
        subtitle: "Siap memulai proyek Anda selanjutnya?",
        description: "Saya tersedia untuk proyek freelance dan peluang full-time. Mari diskusikan bagaimana kita dapat mewujudkan ide Anda.",
        cta: "Hubungi Saya",
    },
    footer: "Hak cipta dilindungi.",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_language_resolves_to_its_own_table() {
        assert_eq!(Translations::get(Language::En), &EN);
        assert_eq!(Translations::get(Language::Id), &ID);
        assert_ne!(&EN, &ID);
    }

    #[test]
    fn nav_entries_keep_display_order() {
        let anchors = EN
            .nav
            .entries()
            .map(|(anchor, _)| anchor);
        assert_eq!(
            anchors,
            ["about", "projects", "services", "skills", "contact"]
        );
        // Anchors are structural, so both languages must agree on them.
        assert_eq!(anchors, ID.nav.entries().map(|(anchor, _)| anchor));
    }

    #[test]
    fn no_copy_is_empty() {
        for t in [&EN, &ID] {
            for (_, label) in t.nav.entries() {
                assert!(!label.is_empty());
            }
            for text in [
                t.hero.title,
                t.hero.subtitle,
                t.hero.description,
                t.hero.cta,
                t.hero.contact,
                t.about.title,
                t.about.description,
                t.services.title,
                t.services.subtitle,
                t.services.web2.title,
                t.services.web3.title,
                t.services.fullstack.title,
                t.projects.title,
                t.projects.web2,
                t.projects.web3,
                t.projects.view_project,
                t.projects.view_code,
                t.skills.title,
                t.contact.title,
                t.contact.cta,
                t.footer,
            ] {
                assert!(!text.is_empty());
            }
        }
    }
}
