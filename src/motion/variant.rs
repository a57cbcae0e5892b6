//! Style descriptors and validated animation variants.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::easing::Easing;

/// Largest offset, in terminal rows, a style may translate by.
pub const MAX_TRANSLATE_ROWS: f32 = 1000.0;

/// Logical visibility state driving a scope's target style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Signal {
    #[default]
    Hidden,
    Visible,
}

impl Signal {
    pub fn as_str(self) -> &'static str {
        match self {
            Signal::Hidden => "hidden",
            Signal::Visible => "visible",
        }
    }
}

/// Errors raised while building variants. Fatal at construction time.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MotionError {
    #[error("Variant '{variant}' is missing the '{state}' state")]
    MissingState {
        variant: String,
        state: &'static str,
    },

    #[error("Variant '{variant}' has a negative stagger ({stagger_ms}ms)")]
    NegativeStagger { variant: String, stagger_ms: i64 },

    #[error("Variant '{variant}' state '{state}' has a negative duration ({duration_ms}ms)")]
    NegativeDuration {
        variant: String,
        state: &'static str,
        duration_ms: i64,
    },

    #[error("Variant '{variant}' state '{state}' has opacity {opacity} outside 0..=1")]
    OpacityOutOfRange {
        variant: String,
        state: &'static str,
        opacity: f32,
    },

    #[error("Variant '{variant}' state '{state}' has translate_y {translate_y} outside -{max}..={max} rows", max = MAX_TRANSLATE_ROWS)]
    TranslateOutOfRange {
        variant: String,
        state: &'static str,
        translate_y: f32,
    },

    #[error("Scope '{child}' cannot be attached to leaf scope '{parent}'")]
    LeafParent { parent: String, child: String },

    #[error("Scope '{child}' references a parent outside its tree")]
    UnknownScope { child: String },
}

/// Target style for one signal state.
///
/// `duration` and `easing` describe the transition *into* this state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleDescriptor {
    pub opacity: f32,
    /// Vertical offset in terminal rows (positive pushes content down).
    pub translate_y: f32,
    pub duration: Duration,
    pub easing: Easing,
}

impl StyleDescriptor {
    pub fn new(opacity: f32, translate_y: f32) -> Self {
        Self {
            opacity,
            translate_y,
            duration: Duration::ZERO,
            easing: Easing::default(),
        }
    }

    pub fn with_transition(mut self, duration: Duration, easing: Easing) -> Self {
        self.duration = duration;
        self.easing = easing;
        self
    }
}

/// A named transition between `hidden` and `visible`.
///
/// Only obtainable through [`AnimationVariant::new`] or
/// [`AnimationVariant::from_spec`], both of which validate.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationVariant {
    name: String,
    hidden: StyleDescriptor,
    visible: StyleDescriptor,
    stagger: Duration,
}

impl AnimationVariant {
    pub fn new(
        name: impl Into<String>,
        hidden: StyleDescriptor,
        visible: StyleDescriptor,
        stagger: Duration,
    ) -> Result<Self, MotionError> {
        let name = name.into();
        check_opacity(&name, Signal::Hidden, hidden.opacity)?;
        check_opacity(&name, Signal::Visible, visible.opacity)?;
        check_translate(&name, Signal::Hidden, hidden.translate_y)?;
        check_translate(&name, Signal::Visible, visible.translate_y)?;
        Ok(Self {
            name,
            hidden,
            visible,
            stagger,
        })
    }

    /// Build a variant from its serialized form.
    pub fn from_spec(name: &str, spec: &VariantSpec) -> Result<Self, MotionError> {
        let hidden = spec.hidden.as_ref().ok_or_else(|| MotionError::MissingState {
            variant: name.to_string(),
            state: Signal::Hidden.as_str(),
        })?;
        let visible = spec
            .visible
            .as_ref()
            .ok_or_else(|| MotionError::MissingState {
                variant: name.to_string(),
                state: Signal::Visible.as_str(),
            })?;

        if spec.stagger_ms < 0 {
            return Err(MotionError::NegativeStagger {
                variant: name.to_string(),
                stagger_ms: spec.stagger_ms,
            });
        }

        Self::new(
            name,
            hidden.to_descriptor(name, Signal::Hidden)?,
            visible.to_descriptor(name, Signal::Visible)?,
            Duration::from_millis(spec.stagger_ms as u64),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Style for the given signal.
    pub fn style(&self, signal: Signal) -> &StyleDescriptor {
        match signal {
            Signal::Hidden => &self.hidden,
            Signal::Visible => &self.visible,
        }
    }

    /// Delay between successive children's reveal start.
    pub fn stagger(&self) -> Duration {
        self.stagger
    }
}

fn check_opacity(variant: &str, state: Signal, opacity: f32) -> Result<(), MotionError> {
    if (0.0..=1.0).contains(&opacity) {
        Ok(())
    } else {
        Err(MotionError::OpacityOutOfRange {
            variant: variant.to_string(),
            state: state.as_str(),
            opacity,
        })
    }
}

fn check_translate(variant: &str, state: Signal, translate_y: f32) -> Result<(), MotionError> {
    if translate_y.is_finite() && translate_y.abs() <= MAX_TRANSLATE_ROWS {
        Ok(())
    } else {
        Err(MotionError::TranslateOutOfRange {
            variant: variant.to_string(),
            state: state.as_str(),
            translate_y,
        })
    }
}

/// Serialized style for one state, as written in config files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleSpec {
    pub opacity: f32,
    #[serde(default)]
    pub translate_y: f32,
    #[serde(default)]
    pub duration_ms: i64,
    #[serde(default)]
    pub easing: Easing,
}

impl StyleSpec {
    fn to_descriptor(&self, variant: &str, state: Signal) -> Result<StyleDescriptor, MotionError> {
        if self.duration_ms < 0 {
            return Err(MotionError::NegativeDuration {
                variant: variant.to_string(),
                state: state.as_str(),
                duration_ms: self.duration_ms,
            });
        }
        Ok(StyleDescriptor::new(self.opacity, self.translate_y)
            .with_transition(Duration::from_millis(self.duration_ms as u64), self.easing))
    }
}

/// Serialized variant. Both states are optional here so that a missing one
/// is reported as a [`MotionError`] instead of a generic parse failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantSpec {
    #[serde(default)]
    pub hidden: Option<StyleSpec>,
    #[serde(default)]
    pub visible: Option<StyleSpec>,
    #[serde(default)]
    pub stagger_ms: i64,
}

impl VariantSpec {
    /// Fade-in container that staggers its children.
    pub fn fade_container(stagger_ms: i64) -> Self {
        Self {
            hidden: Some(StyleSpec {
                opacity: 0.0,
                translate_y: 0.0,
                duration_ms: 0,
                easing: Easing::EaseOut,
            }),
            visible: Some(StyleSpec {
                opacity: 1.0,
                translate_y: 0.0,
                duration_ms: 300,
                easing: Easing::EaseOut,
            }),
            stagger_ms,
        }
    }

    /// Leaf that fades in while sliding from `offset` rows to its resting place.
    pub fn rise(offset: f32, duration_ms: i64) -> Self {
        Self {
            hidden: Some(StyleSpec {
                opacity: 0.0,
                translate_y: offset,
                duration_ms: 0,
                easing: Easing::EaseOut,
            }),
            visible: Some(StyleSpec {
                opacity: 1.0,
                translate_y: 0.0,
                duration_ms,
                easing: Easing::EaseOut,
            }),
            stagger_ms: 0,
        }
    }
}
