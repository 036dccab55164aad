//! The hydration pipeline: gateway → decode → merge → resolve.
//!
//! [`Hydrator`] wraps a [`ContentGateway`] and an injected default catalog
//! and exposes one infallible async method per section. [`PageStores`] wires
//! a hydrator into four independent [`SectionStore`]s, the shape a page
//! mount uses: every section fetches concurrently, completes in any order,
//! and falls back to defaults on its own.

use std::sync::Arc;

use hibiscus_content::{
    AboutContent, ContactContent, DefaultCatalog, HeroContent, Section, ServiceCategory,
    normalize_about, normalize_contact, normalize_hero, normalize_services,
};

use crate::gateway::ContentGateway;
use crate::store::{SectionStore, spawn_hydration};

/// Fetches and normalizes per-section content. Infallible by design: every
/// failure path inside terminates in a complete model built from the
/// injected catalog.
#[derive(Clone)]
pub struct Hydrator {
    gateway: ContentGateway,
    catalog: Arc<DefaultCatalog>,
}

impl Hydrator {
    pub fn new(gateway: ContentGateway, catalog: Arc<DefaultCatalog>) -> Self {
        Self { gateway, catalog }
    }

    pub fn gateway(&self) -> &ContentGateway {
        &self.gateway
    }

    pub fn catalog(&self) -> &Arc<DefaultCatalog> {
        &self.catalog
    }

    /// Hydrated hero model.
    pub async fn hero(&self) -> HeroContent {
        let raw = self.gateway.fetch_section(Section::Hero).await;
        normalize_hero(raw.as_ref(), &self.catalog)
    }

    /// Hydrated about model, feature icons resolved.
    pub async fn about(&self) -> AboutContent {
        let raw = self.gateway.fetch_section(Section::About).await;
        normalize_about(raw.as_ref(), &self.catalog)
    }

    /// Hydrated service catalog, category icons resolved, inactive services
    /// dropped.
    pub async fn services(&self) -> Vec<ServiceCategory> {
        let raw = self.gateway.fetch_section(Section::Services).await;
        normalize_services(raw.as_ref(), &self.catalog)
    }

    /// Hydrated contact model.
    pub async fn contact(&self) -> ContactContent {
        let raw = self.gateway.fetch_section(Section::Contact).await;
        normalize_contact(raw.as_ref(), &self.catalog)
    }
}

/// One store per section, hydrating concurrently from the same hydrator.
///
/// Stores are seeded from the catalog before any network activity, so a
/// page rendered immediately after [`PageStores::mount`] is already
/// complete.
pub struct PageStores {
    pub hero: Arc<SectionStore<HeroContent>>,
    pub about: Arc<SectionStore<AboutContent>>,
    pub services: Arc<SectionStore<Vec<ServiceCategory>>>,
    pub contact: Arc<SectionStore<ContactContent>>,
}

impl PageStores {
    /// Create all four stores and kick off their one-shot hydrations.
    pub fn mount(hydrator: &Hydrator) -> Self {
        let catalog = hydrator.catalog();

        let hero = SectionStore::new(catalog.hero.clone());
        let about = SectionStore::new(catalog.about.clone());
        let services = SectionStore::new(catalog.services.clone());
        let contact = SectionStore::new(catalog.contact.clone());

        let h = hydrator.clone();
        spawn_hydration(&hero, async move { h.hero().await });
        let h = hydrator.clone();
        spawn_hydration(&about, async move { h.about().await });
        let h = hydrator.clone();
        spawn_hydration(&services, async move { h.services().await });
        let h = hydrator.clone();
        spawn_hydration(&contact, async move { h.contact().await });

        Self {
            hero,
            about,
            services,
            contact,
        }
    }
}
