//! Reveal sequence state machine.
//!
//! The sequence only moves forward:
//! `Hidden -> HeartFadingIn -> CharactersAndTitleFadingIn -> Settled`.
//! Transitions are driven by the observers in
//! [`crate::systems::reveal`]; this resource just records where the sequence
//! is and which entities take part in it.

use bevy_ecs::prelude::{Entity, Resource};

/// Fade durations and labels used by the reveal.
pub const HEART_FADE_SECS: f32 = 1.5;
pub const CHARACTER_FADE_SECS: f32 = 1.0;
pub const TITLE_FADE_SECS: f32 = 1.2;
pub const HEART_SIGNAL: &str = "reveal_heart";
pub const CHARACTER_SIGNAL: &str = "reveal_character";
pub const TITLE_SIGNAL: &str = "reveal_title";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealStage {
    #[default]
    Hidden,
    HeartFadingIn,
    CharactersAndTitleFadingIn,
    Settled,
}

impl RevealStage {
    pub fn label(self) -> &'static str {
        match self {
            RevealStage::Hidden => "hidden",
            RevealStage::HeartFadingIn => "heart fading in",
            RevealStage::CharactersAndTitleFadingIn => "characters and title fading in",
            RevealStage::Settled => "settled",
        }
    }
}

#[derive(Resource, Debug, Clone)]
pub struct RevealSequence {
    pub stage: RevealStage,
    /// Zone whose first entry starts the reveal.
    pub zone: Entity,
    pub heart: Entity,
    pub lovely: Entity,
    pub pooks: Entity,
    pub title: Entity,
    /// Entities whose fade of the current stage has not finished yet.
    pub pending: Vec<Entity>,
}

impl RevealSequence {
    pub fn new(zone: Entity, heart: Entity, lovely: Entity, pooks: Entity, title: Entity) -> Self {
        Self {
            stage: RevealStage::Hidden,
            zone,
            heart,
            lovely,
            pooks,
            title,
            pending: Vec::new(),
        }
    }

    /// Entities faded in during the second stage.
    pub fn second_stage(&self) -> [Entity; 3] {
        [self.lovely, self.pooks, self.title]
    }

    /// Mark `entity`'s fade as finished. Returns true when it was the last one pending.
    pub fn complete(&mut self, entity: Entity) -> bool {
        let before = self.pending.len();
        self.pending.retain(|e| *e != entity);
        before != self.pending.len() && self.pending.is_empty()
    }
}
