mod common;

use std::sync::Arc;
use std::time::Duration;

use common::ms;
use termfolio::config::VariantsConfig;
use termfolio::motion::{
    AnimationVariant, Easing, Reveal, Scheduler, ScopeId, ScopeKind, ScopeTree, Signal,
    StyleDescriptor, TimerFacility,
};

fn fade(name: &str, stagger_ms: u64) -> Arc<AnimationVariant> {
    Arc::new(
        AnimationVariant::new(
            name,
            StyleDescriptor::new(0.0, 0.0),
            StyleDescriptor::new(1.0, 0.0).with_transition(ms(200), Easing::Linear),
            ms(stagger_ms),
        )
        .expect("valid variant"),
    )
}

fn rise(name: &str) -> Arc<AnimationVariant> {
    Arc::new(
        AnimationVariant::new(
            name,
            StyleDescriptor::new(0.0, 2.0),
            StyleDescriptor::new(1.0, 0.0).with_transition(ms(500), Easing::EaseOut),
            Duration::ZERO,
        )
        .expect("valid variant"),
    )
}

/// Drain every reveal due at or before `until`, recording when each scope
/// started.
fn run_until(
    tree: &mut ScopeTree,
    timers: &mut Scheduler<Reveal>,
    until: Duration,
) -> Vec<(ScopeId, Duration)> {
    let mut started = Vec::new();
    while let Some(fired) = timers.pop_due(until) {
        if tree.on_reveal::<Reveal, _>(fired.handle, fired.payload, timers) {
            started.push((fired.payload.scope, fired.at));
        }
    }
    timers.settle(until);
    started
}

struct Page {
    tree: ScopeTree,
    root: ScopeId,
    list: ScopeId,
    items: Vec<ScopeId>,
    status: ScopeId,
}

/// section(150ms) -> [header, list(100ms) -> 4 items, status (independent)]
fn page() -> Page {
    let mut tree = ScopeTree::new();
    let root = tree.add_root(fade("section", 150), ScopeKind::Container);
    tree.add_child(root, rise("header"), ScopeKind::Leaf).unwrap();
    let list = tree
        .add_child(root, fade("list", 100), ScopeKind::Container)
        .unwrap();
    let items = (0..4)
        .map(|i| {
            tree.add_child(list, rise(&format!("item-{i}")), ScopeKind::Leaf)
                .unwrap()
        })
        .collect();
    let status = tree
        .add_independent(root, rise("status"), ScopeKind::Leaf)
        .unwrap();
    Page {
        tree,
        root,
        list,
        items,
        status,
    }
}

#[test]
fn children_are_offset_by_index_times_stagger() {
    let mut page = page();
    let mut timers: Scheduler<Reveal> = Scheduler::new();
    timers.settle(ms(1000));

    assert!(page.tree.enter::<Reveal, _>(page.root, &mut timers));

    // Independent scope takes no slot: header at +0, list at +150.
    let due: Vec<Duration> = timers.pending().map(|(_, at, _)| at).collect();
    assert_eq!(due, vec![ms(1000), ms(1150)]);

    let started = run_until(&mut page.tree, &mut timers, ms(5000));
    let item_starts: Vec<Duration> = started
        .iter()
        .filter(|(scope, _)| page.items.contains(scope))
        .map(|(_, at)| *at)
        .collect();
    assert_eq!(item_starts, vec![ms(1150), ms(1250), ms(1350), ms(1450)]);
    assert_eq!(page.tree.signal(page.status), Signal::Hidden);
}

#[test]
fn enter_is_idempotent() {
    let mut page = page();
    let mut timers: Scheduler<Reveal> = Scheduler::new();
    assert!(page.tree.enter::<Reveal, _>(page.root, &mut timers));
    let scheduled = timers.pending_count();

    timers.settle(ms(50));
    assert!(!page.tree.enter::<Reveal, _>(page.root, &mut timers));
    assert_eq!(timers.pending_count(), scheduled);
    assert_eq!(page.tree.started_at(page.root), Some(Duration::ZERO));
}

#[test]
fn unmount_cancels_pending_reveals_in_subtree() {
    let mut page = page();
    let mut timers: Scheduler<Reveal> = Scheduler::new();
    page.tree.enter::<Reveal, _>(page.root, &mut timers);
    run_until(&mut page.tree, &mut timers, ms(260));
    assert_eq!(page.tree.signal(page.items[1]), Signal::Visible);
    assert!(!page.tree.pending_reveals(page.list).is_empty());

    assert!(page.tree.unmount::<Reveal, _>(page.root, &mut timers));
    assert_eq!(timers.pending_count(), 0);
    run_until(&mut page.tree, &mut timers, ms(10_000));
    for item in &page.items {
        assert_eq!(page.tree.signal(*item), Signal::Hidden);
    }
}

#[test]
fn independent_scope_replays_on_each_mount() {
    let mut page = page();
    let mut timers: Scheduler<Reveal> = Scheduler::new();
    page.tree.enter::<Reveal, _>(page.root, &mut timers);
    run_until(&mut page.tree, &mut timers, ms(2000));

    assert!(page.tree.mount::<Reveal, _>(page.status, &mut timers));
    assert_eq!(page.tree.started_at(page.status), Some(ms(2000)));
    assert!(!page.tree.mount::<Reveal, _>(page.status, &mut timers));

    run_until(&mut page.tree, &mut timers, ms(3000));
    page.tree.unmount::<Reveal, _>(page.status, &mut timers);
    assert_eq!(page.tree.signal(page.status), Signal::Hidden);
    let hidden = page.tree.effective_style(page.status, ms(3000));
    assert_eq!(hidden.opacity, 0.0);

    run_until(&mut page.tree, &mut timers, ms(4000));
    page.tree.mount::<Reveal, _>(page.status, &mut timers);
    assert_eq!(page.tree.started_at(page.status), Some(ms(4000)));
    let midway = page.tree.style_at(page.status, ms(4100));
    assert!(midway.opacity > 0.0 && midway.opacity < 1.0);
}

#[test]
fn child_opacity_is_capped_by_ancestors() {
    let mut page = page();
    let mut timers: Scheduler<Reveal> = Scheduler::new();
    page.tree.enter::<Reveal, _>(page.root, &mut timers);
    run_until(&mut page.tree, &mut timers, ms(5000));

    let item = page.items[0];
    let own = page.tree.style_at(item, ms(5000));
    let seen = page.tree.effective_style(item, ms(5000));
    assert_eq!(own.opacity, 1.0);
    assert_eq!(seen.opacity, 1.0);
    assert!(page.tree.is_settled(ms(5000)));

    // Item 3 starts at 450ms and is still rising at 500ms.
    let rising = page.tree.effective_style(page.items[3], ms(500));
    assert!(rising.translate_y > 0.0);
    assert!(!page.tree.is_settled(ms(500)));
}

#[test]
fn leaf_parent_is_rejected() {
    let mut tree = ScopeTree::new();
    let leaf = tree.add_root(rise("leaf"), ScopeKind::Leaf);
    assert!(tree.add_child(leaf, rise("child"), ScopeKind::Leaf).is_err());
}

#[test]
fn configured_variants_drive_the_tree() {
    let variants = VariantsConfig::default().build().expect("defaults are valid");
    let mut tree = ScopeTree::new();
    let root = tree.add_root(variants.section.clone(), ScopeKind::Container);
    let first = tree
        .add_child(root, variants.item.clone(), ScopeKind::Leaf)
        .unwrap();
    let second = tree
        .add_child(root, variants.item.clone(), ScopeKind::Leaf)
        .unwrap();

    let mut timers: Scheduler<Reveal> = Scheduler::new();
    tree.enter::<Reveal, _>(root, &mut timers);
    let started = run_until(&mut tree, &mut timers, ms(1000));
    assert_eq!(started, vec![(first, ms(0)), (second, ms(150))]);
    assert_eq!(timers.now(), ms(1000));
}
