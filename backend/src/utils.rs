use uuid::Uuid;

/// New poll id: a random v4 UUID in hyphenated form. Collisions are left to
/// the generator's 122 random bits; the store is never consulted.
pub fn generate_poll_id() -> String {
    Uuid::new_v4().to_string()
}
