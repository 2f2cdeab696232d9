use log::debug;

use super::strategy::{Alignment, MeasurementStrategy, ScrollGeometry, SlideBox};

/// Visible window of the scrollable container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scroll_left: f64,
    pub client_width: f64,
}

/// The rendering surface that owns the scroll position.
///
/// Every read returns `Option` so an unmounted container turns into "no
/// update" instead of an error.
pub trait ScrollHost {
    fn viewport(&self) -> Option<Viewport>;

    /// Geometry of slide `index`, relative to the container's scroll origin.
    fn slide_box(&self, index: usize) -> Option<SlideBox>;

    /// Request a smooth scroll. Fire-and-forget: a later call retargets.
    fn scroll_to(&self, left: f64);

    fn geometry(&self, slide_count: usize) -> Option<ScrollGeometry> {
        let viewport = self.viewport()?;
        let slides = (0..slide_count)
            .map(|i| self.slide_box(i))
            .collect::<Option<Vec<_>>>()?;
        Some(ScrollGeometry {
            scroll_left: viewport.scroll_left,
            client_width: viewport.client_width,
            slides,
        })
    }
}

/// Keeps a discrete active slide index in sync with the scroll position of
/// a horizontal rail.
///
/// The controller is attached at mount and starts at index 0. It never moves
/// the index on its own when asked to scroll; the scroll is expected to
/// produce measurements that converge on the target. Out-of-range scroll
/// requests are ignored rather than clamped.
#[derive(Debug)]
pub struct CarouselController<K, S> {
    strategy: S,
    slides: Vec<K>,
    active: Option<usize>,
}

impl<K, S> CarouselController<K, S>
where
    S: MeasurementStrategy<K>,
{
    pub fn new(strategy: S) -> Self {
        Self {
            strategy,
            slides: Vec::new(),
            active: None,
        }
    }

    /// Starts tracking `slides`. An empty list leaves the controller detached.
    pub fn attach(&mut self, slides: Vec<K>) {
        if slides.is_empty() {
            debug!("carousel attach skipped, no slides");
            self.detach();
            return;
        }
        debug!("carousel attached to {} slides", slides.len());
        self.slides = slides;
        self.active = Some(0);
    }

    pub fn detach(&mut self) {
        self.slides.clear();
        self.active = None;
    }

    pub fn is_attached(&self) -> bool {
        !self.slides.is_empty()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn alignment(&self) -> Alignment {
        self.strategy.alignment()
    }

    /// Feeds one measurement event. Returns the new index only when it changed.
    pub fn on_measurement(&mut self, event: &S::Event) -> Option<usize> {
        if !self.is_attached() {
            return None;
        }
        let candidate = self.strategy.candidate(&self.slides, event)?;
        if candidate >= self.slides.len() || self.active == Some(candidate) {
            return None;
        }
        self.active = Some(candidate);
        Some(candidate)
    }

    /// Asks `host` to bring slide `index` into its aligned position and
    /// returns the requested scroll offset.
    pub fn scroll_to_index<H: ScrollHost + ?Sized>(&self, index: usize, host: &H) -> Option<f64> {
        if index >= self.slides.len() {
            debug!("carousel scroll to {} ignored, {} slides", index, self.slides.len());
            return None;
        }
        let slide = host.slide_box(index)?;
        let target = match self.alignment() {
            Alignment::LeadingEdge => slide.offset_left,
            Alignment::Center => {
                let viewport = host.viewport()?;
                slide.offset_left - (viewport.client_width - slide.width) / 2.0
            }
        };
        host.scroll_to(target);
        Some(target)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;
    use crate::carousel::strategy::{CenterDistance, IntersectionRatio, IntersectionSample};

    /// In-memory rail: equal-width slides laid out back to back.
    struct FakeRail {
        scroll_left: Cell<f64>,
        client_width: f64,
        slide_width: f64,
        slide_count: usize,
        mounted: bool,
        requests: RefCell<Vec<f64>>,
    }

    impl FakeRail {
        fn new(slide_count: usize, client_width: f64, slide_width: f64) -> Self {
            Self {
                scroll_left: Cell::new(0.0),
                client_width,
                slide_width,
                slide_count,
                mounted: true,
                requests: RefCell::new(Vec::new()),
            }
        }

        fn unmounted() -> Self {
            Self { mounted: false, ..Self::new(5, 300.0, 300.0) }
        }

        fn settle(&self) {
            if let Some(&left) = self.requests.borrow().last() {
                self.scroll_left.set(left);
            }
        }
    }

    impl ScrollHost for FakeRail {
        fn viewport(&self) -> Option<Viewport> {
            self.mounted.then(|| Viewport {
                scroll_left: self.scroll_left.get(),
                client_width: self.client_width,
            })
        }

        fn slide_box(&self, index: usize) -> Option<SlideBox> {
            (self.mounted && index < self.slide_count)
                .then(|| SlideBox::new(index as f64 * self.slide_width, self.slide_width))
        }

        fn scroll_to(&self, left: f64) {
            self.requests.borrow_mut().push(left);
        }
    }

    fn center_controller(n: usize) -> CarouselController<usize, CenterDistance> {
        let mut controller = CarouselController::new(CenterDistance);
        controller.attach((0..n).collect());
        controller
    }

    #[test]
    fn attach_starts_at_first_slide() {
        let controller = center_controller(5);
        assert!(controller.is_attached());
        assert_eq!(controller.active_index(), Some(0));
    }

    #[test]
    fn empty_slide_list_has_no_active_index() {
        let rail = FakeRail::new(0, 300.0, 300.0);
        let mut controller: CarouselController<usize, CenterDistance> = CarouselController::new(CenterDistance);
        controller.attach(Vec::new());

        assert!(!controller.is_attached());
        assert_eq!(controller.active_index(), None);
        assert_eq!(controller.scroll_to_index(0, &rail), None);
        assert!(rail.requests.borrow().is_empty());
    }

    #[test]
    fn scrolled_slide_center_becomes_active() {
        let rail = FakeRail::new(5, 300.0, 300.0);
        let mut controller = center_controller(5);

        // slide 2 spans 600..900, its center meets the viewport center at 600
        rail.scroll_left.set(600.0);
        let geometry = rail.geometry(5).expect("mounted rail");
        assert_eq!(controller.on_measurement(&geometry), Some(2));
        assert_eq!(controller.active_index(), Some(2));
    }

    #[test]
    fn repeated_measurement_does_not_renotify() {
        let rail = FakeRail::new(5, 300.0, 300.0);
        let mut controller = center_controller(5);
        rail.scroll_left.set(310.0);
        let geometry = rail.geometry(5).unwrap();

        assert_eq!(controller.on_measurement(&geometry), Some(1));
        assert_eq!(controller.on_measurement(&geometry), None);
        assert_eq!(controller.active_index(), Some(1));
    }

    #[test]
    fn intersection_tie_resolves_to_first_slide() {
        let mut controller = CarouselController::new(IntersectionRatio);
        controller.attach(vec!["hall", "kitchen", "loft", "bath", "garden"]);
        controller.on_measurement(&vec![IntersectionSample { target: "loft", is_intersecting: true, ratio: 0.9 }]);
        assert_eq!(controller.active_index(), Some(2));

        let batch = vec![
            IntersectionSample { target: "kitchen", is_intersecting: true, ratio: 0.4 },
            IntersectionSample { target: "hall", is_intersecting: true, ratio: 0.4 },
        ];
        assert_eq!(controller.on_measurement(&batch), Some(0));
        assert_eq!(controller.active_index(), Some(0));
    }

    #[test]
    fn empty_intersection_batch_keeps_index() {
        let mut controller = CarouselController::new(IntersectionRatio);
        controller.attach(vec![1u8, 2, 3]);
        controller.on_measurement(&vec![IntersectionSample { target: 3, is_intersecting: true, ratio: 0.8 }]);

        assert_eq!(controller.on_measurement(&Vec::new()), None);
        assert_eq!(controller.active_index(), Some(2));
    }

    #[test]
    fn leading_edge_scroll_targets_slide_offset() {
        let rail = FakeRail::new(5, 320.0, 280.0);
        let mut controller = CarouselController::new(IntersectionRatio);
        controller.attach(vec!['a', 'b', 'c', 'd', 'e']);

        assert_eq!(controller.scroll_to_index(3, &rail), Some(840.0));
        assert_eq!(*rail.requests.borrow(), vec![840.0]);
    }

    #[test]
    fn center_scroll_targets_centered_offset() {
        let rail = FakeRail::new(3, 400.0, 300.0);
        let controller = center_controller(3);

        // slide 1 spans 300..600, centering it in a 400 wide viewport needs 250
        assert_eq!(controller.scroll_to_index(1, &rail), Some(250.0));
        assert_eq!(*rail.requests.borrow(), vec![250.0]);
    }

    #[test]
    fn scroll_request_leaves_index_until_measured() {
        let rail = FakeRail::new(5, 300.0, 300.0);
        let mut controller = center_controller(5);

        controller.scroll_to_index(4, &rail);
        assert_eq!(controller.active_index(), Some(0));

        rail.settle();
        let geometry = rail.geometry(5).unwrap();
        assert_eq!(controller.on_measurement(&geometry), Some(4));
    }

    #[test]
    fn second_scroll_request_retargets() {
        let rail = FakeRail::new(5, 300.0, 300.0);
        let mut controller = center_controller(5);

        controller.scroll_to_index(4, &rail);
        controller.scroll_to_index(1, &rail);
        rail.settle();

        let geometry = rail.geometry(5).unwrap();
        assert_eq!(controller.on_measurement(&geometry), Some(1));
    }

    #[test]
    fn out_of_range_scroll_is_ignored() {
        let rail = FakeRail::new(5, 300.0, 300.0);
        let mut controller = center_controller(5);
        rail.scroll_left.set(300.0);
        controller.on_measurement(&rail.geometry(5).unwrap());

        assert_eq!(controller.scroll_to_index(10, &rail), None);
        assert_eq!(controller.scroll_to_index(5, &rail), None);
        assert!(rail.requests.borrow().is_empty());
        assert_eq!(controller.active_index(), Some(1));
    }

    #[test]
    fn unmounted_container_degrades_to_no_update() {
        let rail = FakeRail::unmounted();
        let controller = center_controller(5);

        assert_eq!(rail.geometry(5), None);
        assert_eq!(controller.scroll_to_index(2, &rail), None);
        assert_eq!(controller.active_index(), Some(0));
    }

    #[test]
    fn detach_is_idempotent_and_drops_measurements() {
        let rail = FakeRail::new(5, 300.0, 300.0);
        let mut controller = center_controller(5);
        rail.scroll_left.set(900.0);
        let geometry = rail.geometry(5).unwrap();

        controller.detach();
        controller.detach();

        assert!(!controller.is_attached());
        assert_eq!(controller.active_index(), None);
        assert_eq!(controller.on_measurement(&geometry), None);
        assert_eq!(controller.scroll_to_index(1, &rail), None);
    }

    #[test]
    fn reattach_resets_to_first_slide() {
        let mut controller = center_controller(5);
        controller.detach();
        controller.attach((0..3).collect());
        assert_eq!(controller.slide_count(), 3);
        assert_eq!(controller.active_index(), Some(0));
    }
}
