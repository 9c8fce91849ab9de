pub mod animation;
pub mod config;
pub mod controller;
pub mod counter;
pub mod navigation;
pub mod overlay;
pub mod page;
pub mod reveal;
pub mod router;
pub mod schedule;
pub mod surface;

pub use animation::{stagger_delay, AnimationTrigger};
pub use config::{ConfigError, SiteConfig, CONFIG_ELEMENT_ID};
pub use controller::Portfolio;
pub use counter::{format_counter, parse_counter_target, CounterAnimator, CounterRun};
pub use navigation::Navigator;
pub use overlay::Overlay;
pub use page::{parse_int_prefix, PageError, PageIndex, DEFAULT_TOTAL_PAGES};
pub use reveal::{RevealOptions, RevealTracker, REVEAL_CLASS, REVEAL_SELECTOR};
pub use router::{route_anchor, AnchorRoute, IN_PAGE_ANCHOR_SELECTOR};
pub use schedule::{FrameTask, Scheduler, SimulatedScheduler, Task};
pub use surface::{OverlaySurface, PageSurface, RevealEffect, Role, Stage};
