use std::rc::Rc;

use crate::counter::CounterAnimator;
use crate::schedule::Scheduler;
use crate::surface::{RevealEffect, Role, Stage};

type Routine = fn(&AnimationTrigger);

/// Page-shown routines, indexed by page number minus one.
const ROUTINES: [Routine; 6] = [
    animate_hero,
    animate_stats,
    animate_projects,
    animate_timeline,
    animate_skills,
    animate_contact,
];

const HERO_DELAY_MS: u32 = 100;
const HERO_FLOAT_STEP_MS: u32 = 200;
const PROJECT_STEP_MS: u32 = 200;
const TIMELINE_STEP_MS: u32 = 300;
const SKILL_STEP_MS: u32 = 200;
const CONTACT_STEP_MS: u32 = 100;

pub fn stagger_delay(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(step_ms)
}

pub struct AnimationTrigger {
    stage: Rc<dyn Stage>,
    scheduler: Rc<dyn Scheduler>,
    counters: Rc<CounterAnimator>,
    counter_duration_ms: u32,
}

impl AnimationTrigger {
    pub fn new(
        stage: Rc<dyn Stage>,
        scheduler: Rc<dyn Scheduler>,
        counter_duration_ms: u32,
    ) -> Self {
        let counters = CounterAnimator::new(Rc::clone(&stage), Rc::clone(&scheduler));
        Self {
            stage,
            scheduler,
            counters,
            counter_duration_ms,
        }
    }

    pub fn counters(&self) -> &Rc<CounterAnimator> {
        &self.counters
    }

    pub fn has_routine(page: u32) -> bool {
        Self::routine(page).is_some()
    }

    pub fn on_page_shown(&self, page: u32) {
        if let Some(routine) = Self::routine(page) {
            routine(self);
        }
    }

    fn routine(page: u32) -> Option<Routine> {
        let slot = usize::try_from(page).ok()?.checked_sub(1)?;
        ROUTINES.get(slot).copied()
    }

    fn stagger<F>(&self, role: Role, base_ms: u32, step_ms: u32, effect_for: F)
    where
        F: Fn(usize) -> RevealEffect,
    {
        for index in 0..self.stage.count(role) {
            let stage = Rc::clone(&self.stage);
            let effect = effect_for(index);
            let delay = base_ms.saturating_add(stagger_delay(index, step_ms));
            self.scheduler.set_timeout(
                delay,
                Box::new(move || stage.apply(role, index, &effect)),
            );
        }
    }
}

fn animate_hero(trigger: &AnimationTrigger) {
    trigger.stagger(Role::FloatingCard, HERO_DELAY_MS, 0, |index| {
        RevealEffect::RestartFloat {
            delay_ms: stagger_delay(index, HERO_FLOAT_STEP_MS),
        }
    });
}

fn animate_stats(trigger: &AnimationTrigger) {
    let role = Role::StatNumber;
    for index in 0..trigger.stage.count(role) {
        let Some(target) = trigger.counters.initial_target(role, index) else {
            continue;
        };
        trigger
            .counters
            .animate_number(role, index, 0, target, trigger.counter_duration_ms);
    }
}

fn animate_projects(trigger: &AnimationTrigger) {
    trigger.stagger(Role::ProjectCard, 0, PROJECT_STEP_MS, |_| RevealEffect::Settle {
        transform: "translateY(0)",
    });
}

fn animate_timeline(trigger: &AnimationTrigger) {
    trigger.stagger(Role::TimelineItem, 0, TIMELINE_STEP_MS, |_| {
        RevealEffect::Settle {
            transform: "translateX(0)",
        }
    });
}

fn animate_skills(trigger: &AnimationTrigger) {
    trigger.stagger(Role::SkillProgress, 0, SKILL_STEP_MS, |_| {
        RevealEffect::ReplayWidth
    });
}

fn animate_contact(trigger: &AnimationTrigger) {
    trigger.stagger(Role::ContactItem, 0, CONTACT_STEP_MS, |_| RevealEffect::Settle {
        transform: "translateY(0)",
    });
}
