use crate::entity::{Body, Entity};

/// Removes every entity whose hitbox overlaps `player`'s.
///
/// Detection and removal happen in one pass, so an entity can be counted at
/// most once. Returns how many were removed.
pub fn sweep(player: &impl Body, entities: &mut Vec<Entity>) -> usize {
    let hitbox = player.hitbox();
    let before = entities.len();
    entities.retain(|e| !e.hitbox().overlaps(hitbox));
    before - entities.len()
}
