//! The project catalog: static definitions resolved per language.
//!
//! Definitions carry both language variants for the text fields; building
//! the catalog picks one variant and leaves everything else untouched, so
//! a language switch is just a rebuild.

use crate::lang::Language;

/// A language-resolved portfolio project. All data is static; the record
/// is `Copy` so cards and the modal can hold it by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    /// Unique within the catalog, stable across languages.
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub long_description: Option<&'static str>,
    /// Primary image; also the gallery fallback and the video poster.
    pub image: Option<&'static str>,
    /// Gallery images in display order. Supersedes `image` when non-empty.
    pub images: &'static [&'static str],
    pub video: Option<&'static str>,
    /// Display order preserved, not deduplicated.
    pub technologies: &'static [&'static str],
    pub icon: ProjectIcon,
    pub demo_link: Option<&'static str>,
    pub code_link: Option<&'static str>,
}

/// Category glyph shown on a project card. Marker only, no behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectIcon {
    Zap,
    Cpu,
    Globe,
    Rocket,
    Database,
    Code,
}

impl ProjectIcon {
    pub fn class(&self) -> &'static str {
        match self {
            ProjectIcon::Zap => "icon-zap",
            ProjectIcon::Cpu => "icon-cpu",
            ProjectIcon::Globe => "icon-globe",
            ProjectIcon::Rocket => "icon-rocket",
            ProjectIcon::Database => "icon-database",
            ProjectIcon::Code => "icon-code",
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct LocalizedText {
    en: &'static str,
    id: &'static str,
}

impl LocalizedText {
    fn get(&self, language: Language) -> &'static str {
        match language {
            Language::En => self.en,
            Language::Id => self.id,
        }
    }
}

/// Static project definition: a [`Project`] with unresolved text fields.
struct ProjectDef {
    id: &'static str,
    title: &'static str,
    description: LocalizedText,
    long_description: Option<LocalizedText>,
    image: Option<&'static str>,
    images: &'static [&'static str],
    video: Option<&'static str>,
    technologies: &'static [&'static str],
    icon: ProjectIcon,
    demo_link: Option<&'static str>,
    code_link: Option<&'static str>,
}

impl ProjectDef {
    fn resolve(&self, language: Language) -> Project {
        Project {
            id: self.id,
            title: self.title,
            description: self.description.get(language),
            long_description: self.long_description.as_ref().map(|t| t.get(language)),
            image: self.image,
            images: self.images,
            video: self.video,
            technologies: self.technologies,
            icon: self.icon,
            demo_link: self.demo_link,
            code_link: self.code_link,
        }
    }
}

/// The language-resolved catalog, one ordered bucket per category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub web2: Vec<Project>,
    pub web3: Vec<Project>,
}

impl Catalog {
    /// Pure function of the static definitions and the requested language.
    /// Bucket order is definition order and stable across calls.
    pub fn build(language: Language) -> Catalog {
        Catalog {
            web2: WEB2_DEFS.iter().map(|d| d.resolve(language)).collect(),
            web3: WEB3_DEFS.iter().map(|d| d.resolve(language)).collect(),
        }
    }

    pub fn projects(&self) -> impl Iterator<Item = &Project> {
        self.web3.iter().chain(self.web2.iter())
    }
}

static WEB3_DEFS: &[ProjectDef] = &[
    ProjectDef {
        id: "defi-protocol",
        title: "DeFi Protocol",
        description: LocalizedText {
            en: "Decentralized finance protocol with yield farming and staking capabilities.",
            id: "Protokol keuangan terdesentralisasi dengan kemampuan yield farming dan staking.",
        },
        long_description: Some(LocalizedText {
            en: "A decentralized finance protocol built on Ethereum. Users stake tokens into audited vault contracts, earn yield from automated farming strategies, and track positions through a real-time dashboard.",
            id: "Protokol keuangan terdesentralisasi yang dibangun di atas Ethereum. Pengguna melakukan staking token ke kontrak vault yang teraudit, memperoleh yield dari strategi farming otomatis, dan memantau posisi melalui dashboard real-time.",
        }),
        image: Some("/projects/defi-protocol/cover.png"),
        images: &[],
        video: Some("/projects/defi-protocol/demo.mp4"),
        technologies: &["Solidity", "Hardhat", "React", "Ethers.js", "The Graph"],
        icon: ProjectIcon::Zap,
        demo_link: Some("https://defi.fabianfahlesi.dev"),
        code_link: Some("https://github.com/fabianfahlesi/defi-protocol"),
    },
    ProjectDef {
        id: "nft-marketplace",
        title: "NFT Marketplace",
        description: LocalizedText {
            en: "Full-featured NFT marketplace with minting, trading, and auction features.",
            id: "Marketplace NFT lengkap dengan fitur minting, trading, dan auction.",
        },
        long_description: Some(LocalizedText {
            en: "An NFT marketplace supporting lazy minting, fixed-price listings, and timed auctions. IPFS pins the artwork and metadata; MetaMask and WalletConnect handle signing.",
            id: "Marketplace NFT yang mendukung lazy minting, listing harga tetap, dan auction berbatas waktu. IPFS menyimpan karya dan metadata; MetaMask dan WalletConnect menangani penandatanganan.",
        }),
        image: Some("/projects/nft-marketplace/cover.png"),
        images: &[
            "/projects/nft-marketplace/browse.png",
            "/projects/nft-marketplace/mint.png",
            "/projects/nft-marketplace/auction.png",
        ],
        video: None,
        technologies: &["Solidity", "Next.js", "IPFS", "Web3.js", "MetaMask"],
        icon: ProjectIcon::Cpu,
        demo_link: Some("https://nft.fabianfahlesi.dev"),
        code_link: Some("https://github.com/fabianfahlesi/nft-marketplace"),
    },
];

static WEB2_DEFS: &[ProjectDef] = &[
    ProjectDef {
        id: "ecommerce-platform",
        title: "E-Commerce Platform",
        description: LocalizedText {
            en: "Full-stack e-commerce solution with payment integration and admin dashboard.",
            id: "Solusi e-commerce full-stack dengan integrasi pembayaran dan dashboard admin.",
        },
        long_description: Some(LocalizedText {
            en: "A storefront and admin dashboard for a local retailer: product catalog, cart, Midtrans payment integration, and order tracking, backed by PostgreSQL.",
            id: "Storefront dan dashboard admin untuk retailer lokal: katalog produk, keranjang, integrasi pembayaran Midtrans, dan pelacakan pesanan, didukung PostgreSQL.",
        }),
        image: Some("/projects/ecommerce/cover.png"),
        images: &[
            "/projects/ecommerce/storefront.png",
            "/projects/ecommerce/checkout.png",
            "/projects/ecommerce/admin.png",
        ],
        video: None,
        technologies: &["React", "TypeScript", "Node.js", "PostgreSQL", "Tailwind CSS"],
        icon: ProjectIcon::Globe,
        demo_link: Some("https://shop.fabianfahlesi.dev"),
        code_link: None,
    },
    ProjectDef {
        id: "saas-dashboard",
        title: "SaaS Dashboard",
        description: LocalizedText {
            en: "Modern analytics dashboard with real-time data visualization and reporting.",
            id: "Dashboard analytics modern dengan visualisasi data real-time dan reporting.",
        },
        long_description: None,
        image: Some("/projects/saas-dashboard/cover.png"),
        images: &[],
        video: None,
        technologies: &["Next.js", "TypeScript", "Recharts", "MongoDB"],
        icon: ProjectIcon::Rocket,
        demo_link: None,
        code_link: Some("https://github.com/fabianfahlesi/saas-dashboard"),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_across_buckets() {
        let catalog = Catalog::build(Language::En);
        let ids: Vec<_> = catalog.projects().map(|p| p.id).collect();
        let mut deduped = ids.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len(), "duplicate project id: {ids:?}");
    }

    #[test]
    fn text_fields_follow_the_requested_language() {
        let en = Catalog::build(Language::En);
        let id = Catalog::build(Language::Id);
        for (p_en, p_id) in en.projects().zip(id.projects()) {
            assert_eq!(p_en.id, p_id.id);
            // The seed data localizes every description.
            assert_ne!(p_en.description, p_id.description);
            if let (Some(l_en), Some(l_id)) = (p_en.long_description, p_id.long_description) {
                assert_ne!(l_en, l_id);
            } else {
                assert_eq!(
                    p_en.long_description.is_none(),
                    p_id.long_description.is_none()
                );
            }
        }
    }

    #[test]
    fn non_text_fields_are_identical_across_languages() {
        let en = Catalog::build(Language::En);
        let id = Catalog::build(Language::Id);
        for (p_en, p_id) in en.projects().zip(id.projects()) {
            assert_eq!(p_en.image, p_id.image);
            assert_eq!(p_en.images, p_id.images);
            assert_eq!(p_en.video, p_id.video);
            assert_eq!(p_en.technologies, p_id.technologies);
            assert_eq!(p_en.icon, p_id.icon);
            assert_eq!(p_en.demo_link, p_id.demo_link);
            assert_eq!(p_en.code_link, p_id.code_link);
        }
    }

    #[test]
    fn bucket_order_is_stable() {
        let first = Catalog::build(Language::En);
        let second = Catalog::build(Language::En);
        assert_eq!(first, second);
    }
}
