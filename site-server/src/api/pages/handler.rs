//! Page document handlers
//!
//! View models for the navigation shell and the six marketing pages. Copy
//! mirrors the live site (French). Page transition effects are cosmetic and
//! live entirely client-side.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use shared::models::{Brand, MenuCategory};

use crate::booking::slots;
use crate::catalog;
use crate::core::ServerState;
use crate::utils::time;

/// Navigation entry of the page shell
#[derive(Debug, Clone, Serialize)]
pub struct NavLink {
    pub path: &'static str,
    pub label: &'static str,
}

/// Shell shared by every page: brand record + navigation
#[derive(Debug, Serialize)]
pub struct Shell {
    pub brand: Brand,
    pub nav: Vec<NavLink>,
}

/// Page document: shell + page payload
#[derive(Debug, Serialize)]
pub struct PageDocument<T> {
    pub shell: Shell,
    pub page: T,
}

fn nav() -> Vec<NavLink> {
    vec![
        NavLink { path: "/", label: "Accueil" },
        NavLink { path: "/menu", label: "Menu" },
        NavLink { path: "/reservations", label: "Réservations" },
        NavLink { path: "/gallery", label: "Galerie" },
        NavLink { path: "/about", label: "À propos" },
        NavLink { path: "/contact", label: "Contact" },
    ]
}

fn document<T>(state: &ServerState, page: T) -> Json<PageDocument<T>> {
    Json(PageDocument {
        shell: Shell {
            brand: state.brand.as_ref().clone(),
            nav: nav(),
        },
        page,
    })
}

// ========== Home ==========

#[derive(Debug, Serialize)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HomePage {
    pub title: &'static str,
    pub hero_images: Vec<String>,
    pub features: Vec<Feature>,
    pub quotes: Vec<&'static str>,
}

pub async fn home(State(state): State<ServerState>) -> Json<PageDocument<HomePage>> {
    document(
        &state,
        HomePage {
            title: "Smash it. Love it.",
            hero_images: catalog::hero_images(),
            features: vec![
                Feature {
                    title: "Ingrédients premium",
                    description: "Bœuf sélectionné, buns briochés, fromages affinés.",
                },
                Feature {
                    title: "Cuisson smash",
                    description: "Caramélisation intense, croustillant dehors, juteux dedans.",
                },
                Feature {
                    title: "Sur place, à emporter, livraison",
                    description: "Commandez comme vous aimez — on s'adapte.",
                },
            ],
            quotes: vec![
                "“Le smash parfait.”",
                "“Le meilleur bun de Paris.”",
                "“Service rapide et chaleureux.”",
            ],
        },
    )
}

// ========== Menu ==========

#[derive(Debug, Serialize)]
pub struct MenuPage {
    pub title: &'static str,
    pub intro: &'static str,
    pub categories: Vec<MenuCategory>,
}

pub async fn menu(State(state): State<ServerState>) -> Json<PageDocument<MenuPage>> {
    let categories = state.menu.as_ref().clone();
    document(
        &state,
        MenuPage {
            title: "Menu",
            intro: "Burgers, sides, boissons et desserts — tout est smashé avec amour.",
            categories,
        },
    )
}

// ========== Reservations ==========

#[derive(Debug, Serialize)]
pub struct ReservationsPage {
    pub title: &'static str,
    pub intro: &'static str,
    /// Bookable 30-minute slots
    pub slots: Vec<String>,
    /// Selectable party sizes
    pub party_sizes: Vec<u8>,
    /// Earliest selectable date (today)
    pub min_date: String,
    pub help_phone: String,
}

pub async fn reservations(State(state): State<ServerState>) -> Json<PageDocument<ReservationsPage>> {
    let help_phone = state.brand.phone.clone();
    document(
        &state,
        ReservationsPage {
            title: "Réserver une table",
            intro: "Sélectionnez votre créneau — confirmation instantanée.",
            slots: slots::dinner_slots(),
            party_sizes: (1..=10).collect(),
            min_date: time::today().to_string(),
            help_phone,
        },
    )
}

// ========== Gallery ==========

#[derive(Debug, Serialize)]
pub struct GalleryPage {
    pub title: &'static str,
    pub intro: &'static str,
    pub images: Vec<String>,
}

pub async fn gallery(State(state): State<ServerState>) -> Json<PageDocument<GalleryPage>> {
    document(
        &state,
        GalleryPage {
            title: "Galerie",
            intro: "Un aperçu de nos smashs, sides et moments en salle.",
            images: catalog::gallery_images(),
        },
    )
}

// ========== About ==========

#[derive(Debug, Serialize)]
pub struct AboutPage {
    pub title: &'static str,
    pub story: String,
    pub commitments: Vec<&'static str>,
    pub image_url: &'static str,
}

pub async fn about(State(state): State<ServerState>) -> Json<PageDocument<AboutPage>> {
    let story = format!(
        "Né dans une cuisine de 12 m² à Oberkampf, {} est devenu un club pour \
         amoureux de burgers smash : cuisson ultra-chaude, bords crousti-caramélisés, \
         fromages qui fondent — et buns moelleux.",
        state.brand.name
    );
    document(
        &state,
        AboutPage {
            title: "Notre histoire",
            story,
            commitments: vec![
                "Fournisseurs locaux & saisonnalité",
                "Options végétariennes & vegan",
                "Hygiène irréprochable",
                "Service sous 10 minutes à midi",
            ],
            image_url: "https://images.unsplash.com/photo-1543353071-10c8ba85a904?auto=format&fit=crop&w=1400&q=80",
        },
    )
}

// ========== Contact ==========

#[derive(Debug, Serialize)]
pub struct ContactPage {
    pub title: &'static str,
    pub address: String,
    pub phone: String,
    pub maps_url: String,
    pub maps_embed: String,
}

pub async fn contact(State(state): State<ServerState>) -> Json<PageDocument<ContactPage>> {
    let brand = state.brand.as_ref();
    let page = ContactPage {
        title: "Nous trouver",
        address: brand.address.clone(),
        phone: brand.phone.clone(),
        maps_url: brand.socials.maps.clone(),
        maps_embed: format!("{}&output=embed", brand.socials.maps),
    };
    document(&state, page)
}

// ========== Not Found ==========

#[derive(Debug, Serialize)]
pub struct NotFoundPage {
    pub title: &'static str,
    pub message: &'static str,
    /// Path of the control leading back to the home page
    pub home: &'static str,
}

pub async fn not_found(
    State(state): State<ServerState>,
) -> (StatusCode, Json<PageDocument<NotFoundPage>>) {
    (
        StatusCode::NOT_FOUND,
        document(
            &state,
            NotFoundPage {
                title: "404",
                message: "Cette page n'existe pas.",
                home: "/",
            },
        ),
    )
}
