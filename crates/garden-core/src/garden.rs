//! The Motion Garden panel: one instance of every interaction, ticked together

use std::time::Instant;

use tracing::{debug, info};

use crate::actions::ActionResolver;
use crate::detail::DetailTransition;
use crate::feedback::{FeedbackController, FeedbackEvent};
use crate::geometry::MeasurePort;
use crate::motion::MotionPreference;
use crate::navigation::{NavigationState, NavigationTab};
use crate::scroll::{ScrollListener, ScrollMetrics};
use crate::stage::DepthStages;
use crate::swipe::SwipeController;

/// What changed during one `Garden::tick`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// Scroll progress published by this frame
    pub progress: Option<f64>,
    pub feedback: Vec<FeedbackEvent>,
    /// A removed item came back
    pub action_reset: bool,
    /// The detail overlay finished closing
    pub detail_closed: bool,
}

impl TickReport {
    pub fn is_empty(&self) -> bool {
        self.progress.is_none() && self.feedback.is_empty() && !self.action_reset && !self.detail_closed
    }
}

#[derive(Debug, Clone)]
pub struct Garden {
    motion: MotionPreference,
    scroll: ScrollListener,
    navigation: NavigationState,
    swipe: SwipeController,
    actions: ActionResolver,
    feedback: FeedbackController,
    detail: DetailTransition,
    disposed: bool,
}

impl Garden {
    pub fn new(motion: MotionPreference, now: Instant) -> Self {
        info!(reduced_motion = motion.is_reduced(), "motion garden created");
        Self {
            motion,
            scroll: ScrollListener::new(),
            navigation: NavigationState::new(motion, now),
            swipe: SwipeController::new(motion),
            actions: ActionResolver::new(motion, now),
            feedback: FeedbackController::new(motion, now),
            detail: DetailTransition::new(motion),
            disposed: false,
        }
    }

    pub fn motion(&self) -> MotionPreference {
        self.motion
    }

    pub fn scroll(&self) -> &ScrollListener {
        &self.scroll
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    pub fn navigation_mut(&mut self) -> &mut NavigationState {
        &mut self.navigation
    }

    pub fn swipe(&self) -> &SwipeController {
        &self.swipe
    }

    pub fn swipe_mut(&mut self) -> &mut SwipeController {
        &mut self.swipe
    }

    pub fn actions(&self) -> &ActionResolver {
        &self.actions
    }

    pub fn feedback(&self) -> &FeedbackController {
        &self.feedback
    }

    pub fn feedback_mut(&mut self) -> &mut FeedbackController {
        &mut self.feedback
    }

    pub fn detail(&self) -> &DetailTransition {
        &self.detail
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    // Scroll & depth

    pub fn on_scroll(&mut self, metrics: ScrollMetrics) {
        self.scroll.on_scroll(metrics);
    }

    /// Stages derived from the last published scroll progress
    pub fn depth_stages(&self) -> DepthStages {
        DepthStages::from_progress(self.scroll.progress())
    }

    // Navigation

    pub fn select_tab(&mut self, tab: NavigationTab, now: Instant) {
        if self.disposed {
            return;
        }
        self.navigation.select(tab, now);
    }

    pub fn cycle_tab(&mut self, now: Instant) {
        if self.disposed {
            return;
        }
        self.navigation.cycle(now);
        debug!(tab = %self.navigation.tab(), "tab cycled");
    }

    /// Open the detail of an item in the current tab.
    ///
    /// Items that do not open a detail (settings rows) are ignored.
    pub fn open_detail(&mut self, item: usize, measure: &impl MeasurePort, now: Instant) -> bool {
        if self.disposed {
            return false;
        }
        let opens = self
            .navigation
            .tab()
            .items()
            .get(item)
            .is_some_and(|i| i.opens_detail);
        if !opens {
            return false;
        }
        self.navigation.set_cursor(item);
        self.detail.open(item, measure, now)
    }

    pub fn close_detail(&mut self, now: Instant) -> bool {
        self.detail.close(now)
    }

    /// Escape key; consumed only while the detail is open
    pub fn on_escape(&mut self, now: Instant) -> bool {
        self.detail.on_escape(now)
    }

    // Gesture

    pub fn pointer_down(&mut self, pointer_id: u64, x: f64, measure: &impl MeasurePort, now: Instant) -> bool {
        if self.disposed {
            return false;
        }
        self.swipe.pointer_down(pointer_id, x, measure, now)
    }

    pub fn pointer_move(&mut self, pointer_id: u64, x: f64) -> bool {
        self.swipe.pointer_move(pointer_id, x)
    }

    pub fn pointer_up(&mut self, now: Instant) -> Option<bool> {
        self.swipe.pointer_up(now)
    }

    pub fn swipe_hint(&mut self, measure: &impl MeasurePort, now: Instant) -> bool {
        if self.disposed {
            return false;
        }
        self.swipe.hint(measure, now)
    }

    /// Save the item. The action buttons only exist while the panel is revealed.
    pub fn save(&mut self, now: Instant) -> bool {
        if self.disposed || !self.swipe.is_open() {
            return false;
        }
        self.actions.save(&mut self.swipe, now);
        true
    }

    /// Remove the item (it comes back after a while)
    pub fn remove(&mut self, now: Instant) -> bool {
        if self.disposed || !self.swipe.is_open() {
            return false;
        }
        self.actions.remove(&mut self.swipe, now);
        true
    }

    // Feedback

    pub fn submit_feedback(&mut self, now: Instant) -> bool {
        if self.disposed {
            return false;
        }
        self.feedback.submit(now)
    }

    /// Advance every interaction to `now`
    pub fn tick(&mut self, now: Instant) -> TickReport {
        if self.disposed {
            return TickReport::default();
        }
        let progress = self.scroll.on_frame();
        self.swipe.tick(now);
        let action_reset = self.actions.tick(now);
        let feedback = self.feedback.tick(now);
        let detail_closed = self.detail.tick(now);

        TickReport {
            progress,
            feedback,
            action_reset,
            detail_closed,
        }
    }

    /// Whether an animation or timer is pending, so frames should come fast
    pub fn needs_frame(&self, now: Instant) -> bool {
        !self.disposed
            && (self.scroll.has_pending_frame()
                || self.navigation.is_animating(now)
                || self.swipe.is_animating()
                || self.actions.is_animating(now)
                || self.feedback.is_animating(now)
                || self.detail.is_animating())
    }

    /// Cancel every timer, frame request and animation
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.scroll.dispose();
        self.swipe.dispose();
        self.actions.dispose();
        self.feedback.dispose();
        self.detail.dispose();
        self.disposed = true;
        info!("motion garden disposed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Element, LayoutSnapshot, Rect};
    use std::time::Duration;

    fn layout() -> LayoutSnapshot {
        LayoutSnapshot::new()
            .with(Element::SwipeItem, Rect::new(0.0, 0.0, 400.0, 40.0))
            .with(Element::NavigationStage, Rect::new(0.0, 0.0, 40.0, 20.0))
            .with(Element::NavigationItem(0), Rect::new(2.0, 2.0, 10.0, 5.0))
    }

    #[test]
    fn test_actions_need_open_panel() {
        let t0 = Instant::now();
        let mut garden = Garden::new(MotionPreference::full(), t0);
        assert!(!garden.save(t0));
        assert!(!garden.remove(t0));
    }

    #[test]
    fn test_settings_rows_do_not_open() {
        let t0 = Instant::now();
        let mut garden = Garden::new(MotionPreference::full(), t0);
        garden.select_tab(NavigationTab::Settings, t0);
        assert!(!garden.open_detail(0, &layout(), t0));
        garden.select_tab(NavigationTab::Favorites, t0);
        assert!(garden.open_detail(0, &layout(), t0));
    }

    #[test]
    fn test_needs_frame_follows_activity() {
        let t0 = Instant::now();
        let mut garden = Garden::new(MotionPreference::full(), t0);
        assert!(!garden.needs_frame(t0));

        garden.on_scroll(ScrollMetrics::new(50.0, 200.0, 100.0));
        assert!(garden.needs_frame(t0));
        let report = garden.tick(t0);
        assert_eq!(report.progress, Some(0.5));
        assert!(!garden.needs_frame(t0));

        garden.swipe_hint(&layout(), t0);
        assert!(garden.needs_frame(t0));
        garden.tick(t0 + Duration::from_millis(640));
        assert!(!garden.needs_frame(t0 + Duration::from_millis(640)));
    }

    #[test]
    fn test_dispose_is_idempotent() {
        let t0 = Instant::now();
        let mut garden = Garden::new(MotionPreference::full(), t0);
        garden.dispose();
        garden.dispose();
        assert!(garden.is_disposed());
        assert!(garden.tick(t0).is_empty());
    }
}
