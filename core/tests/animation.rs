mod support;

use folio_core::{AnimationTrigger, RevealEffect, Role};
use support::{AppliedEffect, Harness};

fn settle(at_ms: f64, index: usize, transform: &'static str) -> AppliedEffect {
    AppliedEffect {
        at_ms,
        index,
        effect: RevealEffect::Settle { transform },
    }
}

#[test]
fn project_cards_reveal_two_hundred_ms_apart() {
    let harness = Harness::new();
    harness.stage.with_elements(Role::ProjectCard, 3);
    harness.portfolio.go_to_page(3);
    harness.clock.advance(1000.0);
    assert_eq!(
        harness.stage.applied(Role::ProjectCard),
        vec![
            settle(0.0, 0, "translateY(0)"),
            settle(200.0, 1, "translateY(0)"),
            settle(400.0, 2, "translateY(0)"),
        ]
    );
}

#[test]
fn timeline_and_contact_use_their_own_steps() {
    let harness = Harness::new();
    harness.stage.with_elements(Role::TimelineItem, 3);
    harness.stage.with_elements(Role::ContactItem, 3);
    harness.portfolio.go_to_page(4);
    harness.clock.advance(1000.0);
    let timeline: Vec<f64> = harness
        .stage
        .applied(Role::TimelineItem)
        .iter()
        .map(|applied| applied.at_ms)
        .collect();
    assert_eq!(timeline, vec![0.0, 300.0, 600.0]);
    assert!(harness.stage.applied(Role::ContactItem).is_empty());

    harness.portfolio.go_to_page(6);
    harness.clock.advance(1000.0);
    assert_eq!(
        harness.stage.applied(Role::ContactItem),
        vec![
            settle(1000.0, 0, "translateY(0)"),
            settle(1100.0, 1, "translateY(0)"),
            settle(1200.0, 2, "translateY(0)"),
        ]
    );
}

#[test]
fn hero_cards_restart_together_with_offset_floats() {
    let harness = Harness::new();
    harness.stage.with_elements(Role::FloatingCard, 3);
    harness.portfolio.go_to_page(1);
    harness.clock.advance(99.0);
    assert!(harness.stage.applied(Role::FloatingCard).is_empty());
    harness.clock.advance(1.0);
    let applied = harness.stage.applied(Role::FloatingCard);
    assert_eq!(applied.len(), 3);
    for (index, effect) in applied.iter().enumerate() {
        assert_eq!(effect.at_ms, 100.0);
        assert_eq!(
            effect.effect,
            RevealEffect::RestartFloat {
                delay_ms: index as u32 * 200
            }
        );
    }
}

#[test]
fn skill_bars_replay_width() {
    let harness = Harness::new();
    harness.stage.with_elements(Role::SkillProgress, 2);
    harness.portfolio.go_to_page(5);
    harness.clock.advance(500.0);
    let applied = harness.stage.applied(Role::SkillProgress);
    assert_eq!(applied.len(), 2);
    assert_eq!(applied[1].at_ms, 200.0);
    assert_eq!(applied[1].effect, RevealEffect::ReplayWidth);
}

#[test]
fn only_the_shown_page_animates() {
    let harness = Harness::new();
    harness.stage.with_elements(Role::ProjectCard, 2);
    harness.stage.with_elements(Role::TimelineItem, 2);
    harness.portfolio.go_to_page(3);
    harness.portfolio.go_to_page(9);
    harness.clock.advance(2000.0);
    assert_eq!(harness.stage.applied(Role::ProjectCard).len(), 2);
    assert!(harness.stage.applied(Role::TimelineItem).is_empty());
}

#[test]
fn routine_table_covers_six_pages() {
    assert!(!AnimationTrigger::has_routine(0));
    for page in 1..=6 {
        assert!(AnimationTrigger::has_routine(page));
    }
    assert!(!AnimationTrigger::has_routine(7));
}
