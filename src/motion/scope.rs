//! The stagger tree: scopes, reveal propagation and style interpolation.

use std::sync::Arc;
use std::time::Duration;

use super::timer::{CancelHandle, TimerFacility};
use super::variant::{AnimationVariant, MotionError, Signal};

/// Index of a scope inside its [`ScopeTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScopeId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    /// Reveals its children one after another, `stagger` apart.
    Container,
    /// Animates itself only.
    Leaf,
}

/// Timer payload: a container's deferred `enter` for one of its children.
///
/// `generation` is the child's mount generation at scheduling time; a reveal
/// from an older generation is stale and ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    pub scope: ScopeId,
    pub generation: u64,
}

/// Interpolated style of a scope at a point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedStyle {
    pub opacity: f32,
    pub translate_y: f32,
}

impl ResolvedStyle {
    pub const HIDDEN: ResolvedStyle = ResolvedStyle {
        opacity: 0.0,
        translate_y: 0.0,
    };

    /// Translation rounded to whole terminal rows.
    pub fn row_offset(&self) -> i32 {
        self.translate_y.round() as i32
    }
}

#[derive(Debug)]
struct ScopeNode {
    variant: Arc<AnimationVariant>,
    kind: ScopeKind,
    parent: Option<ScopeId>,
    children: Vec<ScopeId>,
    /// Follows its own signal instead of its parent's reveal.
    independent: bool,
    mounted: bool,
    signal: Signal,
    started_at: Option<Duration>,
    generation: u64,
    /// Reveals this scope scheduled for its children and that have not fired.
    pending: Vec<CancelHandle>,
}

/// Arena of animation scopes.
///
/// Regular scopes are mounted for the lifetime of the tree and enter once.
/// Independent scopes start unmounted and may be mounted and unmounted any
/// number of times.
#[derive(Debug, Default)]
pub struct ScopeTree {
    nodes: Vec<ScopeNode>,
}

impl ScopeTree {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Add a top-level scope.
    pub fn add_root(&mut self, variant: Arc<AnimationVariant>, kind: ScopeKind) -> ScopeId {
        self.push(variant, kind, None, false)
    }

    /// Add a scope revealed by its parent's stagger.
    pub fn add_child(
        &mut self,
        parent: ScopeId,
        variant: Arc<AnimationVariant>,
        kind: ScopeKind,
    ) -> Result<ScopeId, MotionError> {
        self.check_parent(parent, &variant)?;
        let id = self.push(variant, kind, Some(parent), false);
        self.nodes[parent.0].children.push(id);
        Ok(id)
    }

    /// Add an independently triggered scope. It takes no stagger slot and
    /// stays unmounted until [`ScopeTree::mount`] is called.
    pub fn add_independent(
        &mut self,
        parent: ScopeId,
        variant: Arc<AnimationVariant>,
        kind: ScopeKind,
    ) -> Result<ScopeId, MotionError> {
        self.check_parent(parent, &variant)?;
        let id = self.push(variant, kind, Some(parent), true);
        self.nodes[parent.0].children.push(id);
        Ok(id)
    }

    fn check_parent(
        &self,
        parent: ScopeId,
        variant: &AnimationVariant,
    ) -> Result<(), MotionError> {
        match self.nodes.get(parent.0) {
            Some(node) if node.kind == ScopeKind::Container => Ok(()),
            Some(node) => Err(MotionError::LeafParent {
                parent: node.variant.name().to_string(),
                child: variant.name().to_string(),
            }),
            None => Err(MotionError::UnknownScope {
                child: variant.name().to_string(),
            }),
        }
    }

    fn push(
        &mut self,
        variant: Arc<AnimationVariant>,
        kind: ScopeKind,
        parent: Option<ScopeId>,
        independent: bool,
    ) -> ScopeId {
        let id = ScopeId(self.nodes.len());
        self.nodes.push(ScopeNode {
            variant,
            kind,
            parent,
            children: Vec::new(),
            independent,
            mounted: !independent,
            signal: Signal::Hidden,
            started_at: None,
            generation: 0,
            pending: Vec::new(),
        });
        id
    }

    /// Reveal a scope.
    ///
    /// Starts the transition to the `visible` style at the current clock time
    /// and, for containers, schedules child `i` at `i * stagger`. Returns
    /// `false` without scheduling anything if the scope is already visible or
    /// is not attached to a mounted chain.
    pub fn enter<T, F>(&mut self, id: ScopeId, timers: &mut F) -> bool
    where
        T: From<Reveal>,
        F: TimerFacility<T> + ?Sized,
    {
        if !self.is_attached(id) {
            return false;
        }
        let now = timers.now();
        let (stagger, children) = {
            let node = &mut self.nodes[id.0];
            if node.signal == Signal::Visible {
                return false;
            }
            node.signal = Signal::Visible;
            node.started_at = Some(now);

            tracing::trace!(
                variant = node.variant.name(),
                scope = id.0,
                at_ms = now.as_millis() as u64,
                "Scope entering"
            );

            if node.kind == ScopeKind::Leaf {
                return true;
            }
            (node.variant.stagger(), node.children.clone())
        };

        let staggered: Vec<ScopeId> = children
            .into_iter()
            .filter(|child| !self.nodes[child.0].independent)
            .collect();

        for (index, child) in staggered.into_iter().enumerate() {
            let delay = stagger.saturating_mul(index as u32);
            let reveal = Reveal {
                scope: child,
                generation: self.nodes[child.0].generation,
            };
            let handle = timers.schedule(delay, T::from(reveal));
            self.nodes[id.0].pending.push(handle);
        }
        true
    }

    /// Handle a fired reveal timer.
    ///
    /// Stale reveals (unknown scope, detached scope, older generation, handle
    /// no longer pending on the parent) are ignored.
    pub fn on_reveal<T, F>(&mut self, handle: CancelHandle, reveal: Reveal, timers: &mut F) -> bool
    where
        T: From<Reveal>,
        F: TimerFacility<T> + ?Sized,
    {
        let Some(node) = self.nodes.get(reveal.scope.0) else {
            return false;
        };
        if node.generation != reveal.generation {
            tracing::trace!(scope = reveal.scope.0, "Ignoring stale reveal");
            return false;
        }
        let Some(parent) = node.parent else {
            return false;
        };
        let pending = &mut self.nodes[parent.0].pending;
        let Some(position) = pending.iter().position(|h| *h == handle) else {
            return false;
        };
        pending.swap_remove(position);
        self.enter(reveal.scope, timers)
    }

    /// Mount a scope and play its entrance from `hidden`.
    ///
    /// No-op if it is already mounted.
    pub fn mount<T, F>(&mut self, id: ScopeId, timers: &mut F) -> bool
    where
        T: From<Reveal>,
        F: TimerFacility<T> + ?Sized,
    {
        match self.nodes.get_mut(id.0) {
            Some(node) if !node.mounted => node.mounted = true,
            _ => return false,
        }
        self.enter(id, timers)
    }

    /// Unmount a scope: cancel every pending reveal scheduled by it or its
    /// descendants and return the whole subtree to `hidden`.
    pub fn unmount<T, F>(&mut self, id: ScopeId, timers: &mut F) -> bool
    where
        F: TimerFacility<T> + ?Sized,
    {
        match self.nodes.get_mut(id.0) {
            Some(node) if node.mounted => node.mounted = false,
            _ => return false,
        }
        let mut cancelled = 0usize;
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let node = &mut self.nodes[current.0];
            for handle in node.pending.drain(..) {
                if timers.cancel(handle) {
                    cancelled += 1;
                }
            }
            node.signal = Signal::Hidden;
            node.started_at = None;
            node.generation += 1;
            stack.extend(node.children.iter().copied());
        }
        tracing::trace!(
            variant = self.nodes[id.0].variant.name(),
            scope = id.0,
            cancelled,
            "Scope unmounted"
        );
        true
    }

    /// Cancel all pending reveals in the tree.
    pub fn teardown<T, F>(&mut self, timers: &mut F)
    where
        F: TimerFacility<T> + ?Sized,
    {
        for node in &mut self.nodes {
            for handle in node.pending.drain(..) {
                timers.cancel(handle);
            }
        }
    }

    /// True if the scope and all its ancestors are mounted.
    pub fn is_attached(&self, id: ScopeId) -> bool {
        let mut current = Some(id);
        while let Some(scope) = current {
            match self.nodes.get(scope.0) {
                Some(node) if node.mounted => current = node.parent,
                _ => return false,
            }
        }
        true
    }

    pub fn is_mounted(&self, id: ScopeId) -> bool {
        self.nodes.get(id.0).is_some_and(|node| node.mounted)
    }

    pub fn signal(&self, id: ScopeId) -> Signal {
        self.nodes
            .get(id.0)
            .map(|node| node.signal)
            .unwrap_or_default()
    }

    pub fn started_at(&self, id: ScopeId) -> Option<Duration> {
        self.nodes.get(id.0).and_then(|node| node.started_at)
    }

    pub fn children(&self, id: ScopeId) -> &[ScopeId] {
        self.nodes
            .get(id.0)
            .map(|node| node.children.as_slice())
            .unwrap_or(&[])
    }

    /// Reveals scheduled by this scope that have not fired yet.
    pub fn pending_reveals(&self, id: ScopeId) -> &[CancelHandle] {
        self.nodes
            .get(id.0)
            .map(|node| node.pending.as_slice())
            .unwrap_or(&[])
    }

    /// The scope's own style at `now`, interpolated from `hidden` toward
    /// `visible` with the visible state's duration and easing.
    pub fn style_at(&self, id: ScopeId, now: Duration) -> ResolvedStyle {
        let Some(node) = self.nodes.get(id.0) else {
            return ResolvedStyle::HIDDEN;
        };
        let hidden = node.variant.style(Signal::Hidden);
        let (Signal::Visible, Some(start)) = (node.signal, node.started_at) else {
            return ResolvedStyle {
                opacity: hidden.opacity,
                translate_y: hidden.translate_y,
            };
        };

        let visible = node.variant.style(Signal::Visible);
        let progress = if visible.duration.is_zero() {
            1.0
        } else {
            now.saturating_sub(start).as_secs_f32() / visible.duration.as_secs_f32()
        };
        let eased = visible.easing.apply(progress);
        ResolvedStyle {
            opacity: lerp(hidden.opacity, visible.opacity, eased),
            translate_y: lerp(hidden.translate_y, visible.translate_y, eased),
        }
    }

    /// Style as seen on screen: opacity multiplies down the ancestor chain
    /// and translations add up. Detached scopes are fully transparent.
    pub fn effective_style(&self, id: ScopeId, now: Duration) -> ResolvedStyle {
        if !self.is_attached(id) {
            return ResolvedStyle::HIDDEN;
        }
        let mut style = self.style_at(id, now);
        let mut current = self.nodes[id.0].parent;
        while let Some(parent) = current {
            let own = self.style_at(parent, now);
            style.opacity *= own.opacity;
            style.translate_y += own.translate_y;
            current = self.nodes[parent.0].parent;
        }
        style
    }

    /// True when no reveal is pending and no transition is still running.
    pub fn is_settled(&self, now: Duration) -> bool {
        self.nodes.iter().all(|node| {
            if !node.pending.is_empty() {
                return false;
            }
            match (node.signal, node.started_at) {
                (Signal::Visible, Some(start)) => {
                    now.saturating_sub(start) >= node.variant.style(Signal::Visible).duration
                }
                _ => true,
            }
        })
    }
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}
