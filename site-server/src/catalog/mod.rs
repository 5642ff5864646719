//! Static catalog and brand data
//!
//! Build-time data, never mutated at runtime. The record types live in
//! `shared::models`; this module owns the BunLab content itself.

use shared::models::{Brand, MenuCategory, MenuItem, OpeningHours, SocialLinks};

/// Business metadata
pub fn brand() -> Brand {
    Brand {
        name: "BunLab Smash Club".to_string(),
        slogan: "Smash burgers. Big flavor. Zero compromise.".to_string(),
        address: "27 Rue Oberkampf, 75011 Paris".to_string(),
        phone: "+33 1 86 76 54 32".to_string(),
        hours: vec![OpeningHours {
            days: "Lun – Dim".to_string(),
            hours: "11:30 – 23:00".to_string(),
        }],
        socials: SocialLinks {
            instagram: "https://instagram.com/bunlab".to_string(),
            tiktok: "https://tiktok.com/@bunlab".to_string(),
            maps: "https://www.google.com/maps?q=27+Rue+Oberkampf,+75011+Paris".to_string(),
        },
    }
}

fn item(name: &str, description: &str, price: &str, image_url: &str, tags: &[&str]) -> MenuItem {
    MenuItem {
        name: name.to_string(),
        description: description.to_string(),
        price: price.to_string(),
        image_url: image_url.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

/// Full menu, category order preserved
pub fn menu() -> Vec<MenuCategory> {
    vec![
        MenuCategory {
            name: "Burgers".to_string(),
            items: vec![
                item(
                    "Smash Classic",
                    "Double smash, cheddar affiné, pickles, oignons, sauce BunLab.",
                    "12€",
                    "https://images.unsplash.com/photo-1606756790138-8ecb8a00ad7d?auto=format&fit=crop&w=1200&q=80",
                    &["signature"],
                ),
                item(
                    "BBQ Blaze",
                    "Smash + bacon croustillant, sauce BBQ maison, oignons frits.",
                    "14€",
                    "https://images.unsplash.com/photo-1550547660-d9450f859349?auto=format&fit=crop&w=1200&q=80",
                    &["best-seller"],
                ),
                item(
                    "Green Power (Vegan)",
                    "Steak végétal, houmous, roquette, pain complet.",
                    "11€",
                    "https://images.unsplash.com/photo-1615717414013-1f4e1da5a45f?auto=format&fit=crop&w=1200&q=80",
                    &["vegan"],
                ),
            ],
        },
        MenuCategory {
            name: "Accompagnements".to_string(),
            items: vec![
                item(
                    "Frites maison",
                    "Pommes de terre françaises, double cuisson.",
                    "4€",
                    "https://images.unsplash.com/photo-1544025162-d76694265947?auto=format&fit=crop&w=1200&q=80",
                    &[],
                ),
                item(
                    "Onion Rings",
                    "Oignons sweet & crispy.",
                    "5€",
                    "https://images.unsplash.com/photo-1571091718767-18b5b1457add?auto=format&fit=crop&w=1200&q=80",
                    &[],
                ),
            ],
        },
        MenuCategory {
            name: "Boissons".to_string(),
            items: vec![
                item(
                    "Bissap maison",
                    "Hibiscus, menthe fraîche, peu sucré.",
                    "4€",
                    "https://images.unsplash.com/photo-1582106245688-4e93d0f4af7f?auto=format&fit=crop&w=1200&q=80",
                    &[],
                ),
                item(
                    "Limonade artisanale",
                    "Citron pressé, bulles fines.",
                    "3.5€",
                    "https://images.unsplash.com/photo-1553531888-a7f2a4b4cbae?auto=format&fit=crop&w=1200&q=80",
                    &[],
                ),
            ],
        },
        MenuCategory {
            name: "Desserts".to_string(),
            items: vec![item(
                "Cheesecake vanille",
                "Crème légère, base sablée croustillante.",
                "5€",
                "https://images.unsplash.com/photo-1599785209796-9e396f9a5b3e?auto=format&fit=crop&w=1200&q=80",
                &[],
            )],
        },
    ]
}

/// Hero collage on the home page
pub fn hero_images() -> Vec<String> {
    [
        "https://images.unsplash.com/photo-1607013407627-6ac4e4a6438e?auto=format&fit=crop&w=900&q=80",
        "https://images.unsplash.com/photo-1550317138-10000687a72b?auto=format&fit=crop&w=900&q=80",
        "https://images.unsplash.com/photo-1550547660-d9450f859349?auto=format&fit=crop&w=900&q=80",
        "https://images.unsplash.com/photo-1526312426976-593c2b9990f5?auto=format&fit=crop&w=900&q=80",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Gallery image set
pub fn gallery_images() -> Vec<String> {
    [
        "https://images.unsplash.com/photo-1550317138-10000687a72b?auto=format&fit=crop&w=1400&q=80",
        "https://images.unsplash.com/photo-1607013407627-6ac4e4a6438e?auto=format&fit=crop&w=1400&q=80",
        "https://images.unsplash.com/photo-1526312426976-593c2b9990f5?auto=format&fit=crop&w=1400&q=80",
        "https://images.unsplash.com/photo-1601924582971-b0c5be3c2d1e?auto=format&fit=crop&w=1400&q=80",
        "https://images.unsplash.com/photo-1490474418585-ba9bad8fd0ea?auto=format&fit=crop&w=1400&q=80",
        "https://images.unsplash.com/photo-1499028344343-cd173ffc68a9?auto=format&fit=crop&w=1400&q=80",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_keeps_category_order() {
        let categories: Vec<String> = menu().into_iter().map(|c| c.name).collect();
        assert_eq!(
            categories,
            ["Burgers", "Accompagnements", "Boissons", "Desserts"]
        );
    }

    #[test]
    fn every_item_has_price_and_image() {
        for category in menu() {
            assert!(!category.items.is_empty(), "{} is empty", category.name);
            for item in category.items {
                assert!(item.price.ends_with('€'), "{} price", item.name);
                assert!(item.image_url.starts_with("https://"), "{} image", item.name);
            }
        }
    }

    #[test]
    fn brand_record_is_complete() {
        let brand = brand();
        assert_eq!(brand.name, "BunLab Smash Club");
        assert!(!brand.hours.is_empty());
        assert!(brand.socials.maps.contains("Oberkampf"));
    }
}
