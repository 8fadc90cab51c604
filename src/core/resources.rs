//! Core domain: player identity and spawned actor bookkeeping.

use bevy::prelude::*;

/// One of the two duelling players.
///
/// Only indices 0 and 1 can be constructed, so `[T; 2]` lookups through
/// `index()` never go out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerIndex(usize);

impl PlayerIndex {
    pub const ONE: Self = Self(0);
    pub const TWO: Self = Self(1);
    pub const ALL: [Self; 2] = [Self::ONE, Self::TWO];

    pub fn new(index: usize) -> Option<Self> {
        (index < 2).then_some(Self(index))
    }

    /// Zero-based array index
    pub fn index(self) -> usize {
        self.0
    }

    /// One-based number shown to players ("P1", "P2")
    pub fn number(self) -> usize {
        self.0 + 1
    }

    pub fn opponent(self) -> Self {
        Self(1 - self.0)
    }
}

impl std::fmt::Display for PlayerIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P{}", self.number())
    }
}

/// Character actors spawned for the current round
#[derive(Resource, Debug, Default)]
pub struct ArenaActors {
    actors: [Option<Entity>; 2],
}

impl ArenaActors {
    pub fn get(&self, player: PlayerIndex) -> Option<Entity> {
        self.actors[player.index()]
    }

    pub fn set(&mut self, player: PlayerIndex, entity: Entity) {
        self.actors[player.index()] = Some(entity);
    }

    /// Forget every tracked actor and hand them back for despawning
    pub fn take_all(&mut self) -> impl Iterator<Item = Entity> + use<> {
        std::mem::take(&mut self.actors).into_iter().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_index_bounds() {
        assert_eq!(PlayerIndex::new(0), Some(PlayerIndex::ONE));
        assert_eq!(PlayerIndex::new(1), Some(PlayerIndex::TWO));
        assert_eq!(PlayerIndex::new(2), None);
    }

    #[test]
    fn test_opponent_is_symmetric() {
        for player in PlayerIndex::ALL {
            assert_ne!(player.opponent(), player);
            assert_eq!(player.opponent().opponent(), player);
        }
        assert_eq!(PlayerIndex::TWO.to_string(), "P2");
    }

    #[test]
    fn test_arena_actors_take_all_clears() {
        let mut world = World::new();
        let mut arena = ArenaActors::default();
        arena.set(PlayerIndex::ONE, world.spawn_empty().id());
        arena.set(PlayerIndex::TWO, world.spawn_empty().id());
        assert!(arena.get(PlayerIndex::TWO).is_some());

        assert_eq!(arena.take_all().count(), 2);
        assert!(arena.get(PlayerIndex::ONE).is_none());
        assert!(arena.get(PlayerIndex::TWO).is_none());
        assert_eq!(arena.take_all().count(), 0);
    }
}
