use bevy_ecs::prelude::Component;

/// Playback state of a frame animation defined in
/// [`AnimationStore`](crate::resources::animationstore::AnimationStore).
#[derive(Debug, Clone, Component)]
pub struct Animation {
    pub animation_key: String,
    pub frame_index: usize,
    pub elapsed_time: f32,
}
impl Animation {
    pub fn new(animation_key: impl Into<String>) -> Self {
        Self {
            animation_key: animation_key.into(),
            frame_index: 0,
            elapsed_time: 0.0,
        }
    }
}

// Animation Controller Component

// Generic, data-driven conditions over Signals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Ne,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    IntegerCmp { key: String, op: CmpOp, value: i32 },
    HasFlag { key: String },
    LacksFlag { key: String },
    All(Vec<Condition>),
    Any(Vec<Condition>),
    Not(Box<Condition>),
}

impl Condition {
    pub fn has_flag(key: impl Into<String>) -> Self {
        Condition::HasFlag { key: key.into() }
    }
    pub fn lacks_flag(key: impl Into<String>) -> Self {
        Condition::LacksFlag { key: key.into() }
    }
    pub fn integer_eq(key: impl Into<String>, value: i32) -> Self {
        Condition::IntegerCmp {
            key: key.into(),
            op: CmpOp::Eq,
            value,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AnimRule {
    pub when: Condition,
    pub set_key: String,
}

/// Picks the active animation from an ordered list of rules.
///
/// The first rule whose condition holds wins; `fallback_key` applies when none does.
#[derive(Debug, Clone, Component)]
pub struct AnimationController {
    pub current_key: String,
    pub rules: Vec<AnimRule>,
    pub fallback_key: String,
}

impl AnimationController {
    pub fn new(fallback_key: impl Into<String>) -> Self {
        let fallback_key = fallback_key.into();
        Self {
            current_key: fallback_key.clone(),
            rules: Vec::new(),
            fallback_key,
        }
    }
    pub fn with_rule(mut self, when: Condition, set_key: impl Into<String>) -> Self {
        self.rules.push(AnimRule {
            when,
            set_key: set_key.into(),
        });
        self
    }
}
