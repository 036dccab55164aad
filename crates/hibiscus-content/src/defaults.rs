//! Built-in default content for every section.
//!
//! The catalog is the single source of truth whenever remote data is
//! missing, malformed, or not yet loaded: every scalar is non-empty,
//! display-ready copy, and every sequence has at least one element, so a
//! section rendered straight from the catalog is complete.
//!
//! The catalog is constructed once at startup and passed into the pipeline
//! explicitly (`Arc<DefaultCatalog>`), never read as ambient global state —
//! tests supply their own catalogs.

use crate::about::{AboutContent, Feature};
use crate::contact::{ContactContent, ContactInfo, SocialLinks};
use crate::hero::{HeroContent, Stat};
use crate::services::{Service, ServiceCategory};

/// Complete fallback content for all four sections.
#[derive(Clone, Debug, PartialEq)]
pub struct DefaultCatalog {
    pub hero: HeroContent,
    pub about: AboutContent,
    pub services: Vec<ServiceCategory>,
    pub contact: ContactContent,
}

impl Default for DefaultCatalog {
    fn default() -> Self {
        Self {
            hero: default_hero(),
            about: default_about(),
            services: default_services(),
            contact: default_contact(),
        }
    }
}

fn default_hero() -> HeroContent {
    HeroContent {
        badge_text: "🌺 Peluang Kemitraan & Franchise".to_string(),
        title: "Raih Kesuksesan Bersama Kami".to_string(),
        subtitle: "Bisnis Terpercaya".to_string(),
        description: "Hibiscus Efsya membuka kesempatan kemitraan franchise untuk Anda \
                      yang ingin memulai bisnis dengan sistem yang sudah teruji dan \
                      dukungan penuh dari tim profesional kami."
            .to_string(),
        primary_button_text: "Daftar Franchise".to_string(),
        primary_button_link: "#contact".to_string(),
        secondary_button_text: "Pelajari Lebih Lanjut".to_string(),
        secondary_button_link: "#services".to_string(),
        background_image: "/assets/hero-hibiscus.jpg".to_string(),
        stats: vec![
            stat("4+", "Unit Bisnis"),
            stat("50+", "Mitra Aktif"),
            stat("5+", "Tahun Pengalaman"),
        ],
    }
}

fn default_about() -> AboutContent {
    AboutContent {
        section_title: "Tentang Kami".to_string(),
        section_subtitle: "Hibiscus Efsya".to_string(),
        heading: "Mengapa Bermitra dengan Hibiscus Efsya?".to_string(),
        description: "Hibiscus Efsya adalah korporasi bisnis yang membuka kesempatan \
                      kemitraan untuk berbagai unit bisnis kami. Bergabunglah dengan \
                      jaringan bisnis yang sudah teruji dan raih kesuksesan bersama kami."
            .to_string(),
        features: vec![
            feature(
                "Lightbulb",
                "Sistem Teruji",
                "Model bisnis yang sudah terbukti sukses dan siap direplikasi",
            ),
            feature(
                "Users",
                "Dukungan Penuh",
                "Tim support yang siap membantu mitra dalam setiap tahap",
            ),
            feature("Zap", "Proses Cepat", "Pendaftaran dan setup bisnis yang efisien"),
            feature(
                "Shield",
                "Brand Terpercaya",
                "Reputasi dan kualitas yang sudah diakui",
            ),
        ],
        stats: vec![stat("5+", "Tahun"), stat("4", "Unit Bisnis"), stat("50+", "Mitra")],
        image: "/assets/about-hibiscus.jpg".to_string(),
    }
}

fn default_services() -> Vec<ServiceCategory> {
    vec![
        ServiceCategory {
            id: 1,
            title: "Body Care".to_string(),
            icon: "Sparkles".to_string(),
            services: vec![Service {
                name: "Body Care".to_string(),
                description: "Perawatan tubuh profesional dengan treatment spa, massage \
                              therapy, dan skincare berkualitas tinggi."
                    .to_string(),
                image: "/assets/service-bodycare.jpg".to_string(),
                link: Some("https://bodycare.hibiscusefsya.com".to_string()),
                is_coming_soon: false,
                is_active: true,
                sort_order: 1,
            }],
        },
        ServiceCategory {
            id: 2,
            title: "Travel".to_string(),
            icon: "Plane".to_string(),
            services: vec![Service {
                name: "Travel".to_string(),
                description: "Paket wisata eksklusif, domestik hingga internasional, \
                              dengan akomodasi premium."
                    .to_string(),
                image: "/assets/service-travel.jpg".to_string(),
                link: None,
                is_coming_soon: true,
                is_active: true,
                sort_order: 1,
            }],
        },
        ServiceCategory {
            id: 3,
            title: "Fashion".to_string(),
            icon: "Shirt".to_string(),
            services: vec![Service {
                name: "Fashion".to_string(),
                description: "Koleksi busana terkini, dari casual hingga formal, dengan \
                              desain modern."
                    .to_string(),
                image: "/assets/service-fashion.jpg".to_string(),
                link: None,
                is_coming_soon: true,
                is_active: true,
                sort_order: 1,
            }],
        },
        ServiceCategory {
            id: 4,
            title: "Akuntansi".to_string(),
            icon: "Calculator".to_string(),
            services: vec![Service {
                name: "Akuntansi".to_string(),
                description: "Layanan pembukuan, laporan keuangan, perpajakan, dan \
                              konsultasi finansial untuk bisnis Anda."
                    .to_string(),
                image: "/assets/service-akuntansi.jpg".to_string(),
                link: Some("https://akuntansi.hibiscusefsya.com".to_string()),
                is_coming_soon: false,
                is_active: true,
                sort_order: 1,
            }],
        },
    ]
}

fn default_contact() -> ContactContent {
    ContactContent {
        section_title: "Hubungi Kami".to_string(),
        section_subtitle: "Tertarik Bermitra?".to_string(),
        heading: "Tertarik Bermitra?".to_string(),
        description: "Ceritakan minat Anda untuk bermitra dengan kami dan tim kami akan \
                      segera menghubungi untuk memberikan informasi lengkap tentang \
                      peluang franchise."
            .to_string(),
        contact_info: ContactInfo {
            email: "admin@hibiscusefsya.com".to_string(),
            phone: "+62 812 3456 7890".to_string(),
            address: "Jakarta, Indonesia".to_string(),
        },
        social_links: SocialLinks {
            whatsapp: Some("https://wa.me/6281234567890".to_string()),
            ..SocialLinks::default()
        },
        map_embed: "https://maps.google.com/?q=Jakarta,+Indonesia".to_string(),
    }
}

fn stat(value: &str, label: &str) -> Stat {
    Stat {
        value: value.to_string(),
        label: label.to_string(),
    }
}

fn feature(icon: &str, title: &str, description: &str) -> Feature {
    Feature {
        icon: icon.to_string(),
        title: title.to_string(),
        description: description.to_string(),
    }
}
