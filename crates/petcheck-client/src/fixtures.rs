//! Random test-data generators for pet, order and user payloads
//!
//! Every generator takes the caller's RNG so suites can seed for
//! reproduction. Models use the Pet Store wire names; `with_*` overrides
//! pin individual fields for targeted negative tests.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Category names the Pet Store ships with.
pub const CATEGORIES: &[&str] = &["Dog", "Cat", "Bird", "Fish", "Reptile"];

/// Valid pet lifecycle states.
pub const PET_STATUSES: &[&str] = &["available", "pending", "sold"];

/// Valid order lifecycle states.
pub const ORDER_STATUSES: &[&str] = &["placed", "approved", "delivered"];

const FIRST_NAMES: &[&str] = &[
    "Rex", "Misu", "Charlie", "Luna", "Max", "Bella", "Rocky", "Daisy", "Buddy", "Coco",
];

const WORDS: &[&str] = &[
    "fluffy", "spotted", "friendly", "shy", "loud", "sleepy", "playful", "tiny", "brave",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: u32,
    pub category: Category,
    pub name: String,
    pub photo_urls: Vec<String>,
    pub tags: Vec<Tag>,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: u32,
    pub pet_id: u32,
    pub quantity: u32,
    pub ship_date: String,
    pub status: String,
    pub complete: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u32,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub user_status: u32,
}

impl Pet {
    /// Generate a pet with 1–3 photo URLs and 1–3 tags.
    pub fn random(rng: &mut impl Rng) -> Self {
        let name = pick(FIRST_NAMES, rng);
        Self {
            id: random_id(rng),
            category: Category {
                id: random_id(rng),
                name: pick(CATEGORIES, rng),
            },
            name,
            photo_urls: (0..rng.gen_range(1..=3)).map(|_| random_url(rng)).collect(),
            tags: (0..rng.gen_range(1..=3))
                .map(|_| Tag {
                    id: random_id(rng),
                    name: pick(WORDS, rng),
                })
                .collect(),
            status: pick(PET_STATUSES, rng),
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: u32) -> Self {
        self.id = id;
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Wire payload for request building and field-level mutation.
    #[must_use]
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

impl Order {
    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            id: random_id(rng),
            pet_id: random_id(rng),
            quantity: rng.gen_range(1..=10),
            ship_date: random_timestamp(rng),
            status: pick(ORDER_STATUSES, rng),
            complete: rng.gen_bool(0.5),
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: u32) -> Self {
        self.id = id;
        self
    }

    #[must_use]
    pub fn with_pet_id(mut self, pet_id: u32) -> Self {
        self.pet_id = pet_id;
        self
    }

    #[must_use]
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    #[must_use]
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

impl User {
    pub fn random(rng: &mut impl Rng) -> Self {
        let first_name = pick(FIRST_NAMES, rng);
        let last_name = pick(WORDS, rng);
        let username = format!(
            "{}_{}{}",
            first_name.to_lowercase(),
            last_name,
            rng.gen_range(1..10_000_u32)
        );
        Self {
            id: random_id(rng),
            email: format!("{username}@example.com"),
            first_name,
            last_name,
            password: random_alnum(rng, 12),
            phone: format!("555-{:04}", rng.gen_range(0..10_000_u32)),
            user_status: rng.gen_range(0..=1),
            username,
        }
    }

    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    #[must_use]
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

fn random_id(rng: &mut impl Rng) -> u32 {
    rng.gen_range(1..=10_000)
}

fn pick(choices: &[&str], rng: &mut impl Rng) -> String {
    choices
        .choose(rng)
        .copied()
        .unwrap_or_default()
        .to_string()
}

fn random_url(rng: &mut impl Rng) -> String {
    format!("https://example.com/photos/{}.jpg", random_alnum(rng, 8))
}

fn random_alnum(rng: &mut impl Rng, len: usize) -> String {
    const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
    (0..len)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect()
}

fn random_timestamp(rng: &mut impl Rng) -> String {
    format!(
        "2026-{:02}-{:02}T{:02}:00:00Z",
        rng.gen_range(1..=12_u32),
        rng.gen_range(1..=28_u32),
        rng.gen_range(0..24_u32)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(7)
    }

    #[test]
    fn random_pet_is_well_formed() {
        let pet = Pet::random(&mut rng());
        assert!((1..=10_000).contains(&pet.id));
        assert!(CATEGORIES.contains(&pet.category.name.as_str()));
        assert!(PET_STATUSES.contains(&pet.status.as_str()));
        assert!((1..=3).contains(&pet.photo_urls.len()));
        assert!((1..=3).contains(&pet.tags.len()));
        assert!(pet.photo_urls[0].starts_with("https://"));
    }

    #[test]
    fn pet_serializes_with_wire_names() {
        let value = Pet::random(&mut rng()).to_value();
        assert!(value.get("photoUrls").is_some());
        assert!(value.get("photo_urls").is_none());
        assert!(value.get("category").and_then(|c| c.get("id")).is_some());
    }

    #[test]
    fn pet_overrides_pin_fields() {
        let pet = Pet::random(&mut rng())
            .with_id(42)
            .with_name("Bolt")
            .with_status("sold");
        assert_eq!(pet.id, 42);
        assert_eq!(pet.name, "Bolt");
        assert_eq!(pet.status, "sold");
    }

    #[test]
    fn random_order_is_well_formed() {
        let order = Order::random(&mut rng());
        assert!((1..=10).contains(&order.quantity));
        assert!(ORDER_STATUSES.contains(&order.status.as_str()));
        assert!(order.ship_date.ends_with(":00:00Z"));
    }

    #[test]
    fn order_serializes_with_wire_names() {
        let value = Order::random(&mut rng()).to_value();
        assert!(value.get("petId").is_some());
        assert!(value.get("shipDate").is_some());
        assert!(value.get("pet_id").is_none());
    }

    #[test]
    fn random_user_is_well_formed() {
        let user = User::random(&mut rng());
        assert!(user.email.contains('@'));
        assert!(user.username.contains('_'));
        assert_eq!(user.password.len(), 12);
        assert!(user.user_status <= 1);
    }

    #[test]
    fn user_serializes_with_wire_names() {
        let value = User::random(&mut rng()).to_value();
        assert!(value.get("firstName").is_some());
        assert!(value.get("userStatus").is_some());
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let a = Pet::random(&mut SmallRng::seed_from_u64(99));
        let b = Pet::random(&mut SmallRng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}
