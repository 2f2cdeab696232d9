/// Where a slide lands in the viewport after a programmatic scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    /// Slide's left edge meets the container's left edge (snap-start rails).
    LeadingEdge,
    /// Slide's center meets the container's center (snap-center rails).
    Center,
}

/// Horizontal extent of one slide, relative to the container's scroll origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideBox {
    pub offset_left: f64,
    pub width: f64,
}

impl SlideBox {
    pub fn new(offset_left: f64, width: f64) -> Self {
        Self { offset_left, width }
    }

    pub fn center(&self) -> f64 {
        self.offset_left + self.width / 2.0
    }
}

/// Snapshot of the scrollable container taken on a scroll event.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollGeometry {
    pub scroll_left: f64,
    pub client_width: f64,
    /// Index-aligned with the slide list the controller was attached to.
    pub slides: Vec<SlideBox>,
}

impl ScrollGeometry {
    pub fn visible_center(&self) -> f64 {
        self.scroll_left + self.client_width / 2.0
    }
}

/// One entry of an intersection batch. Entries arrive unordered and only for
/// the slides whose visibility crossed a threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionSample<K> {
    pub target: K,
    pub is_intersecting: bool,
    pub ratio: f64,
}

/// Derives a candidate active index from a raw measurement event.
pub trait MeasurementStrategy<K> {
    type Event;

    fn alignment(&self) -> Alignment;

    /// `None` means the event carries nothing usable and the current index
    /// should stay as it is.
    fn candidate(&self, slides: &[K], event: &Self::Event) -> Option<usize>;
}

/// Active slide = highest intersection ratio among intersecting slides.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntersectionRatio;

impl<K: PartialEq> MeasurementStrategy<K> for IntersectionRatio {
    type Event = Vec<IntersectionSample<K>>;

    fn alignment(&self) -> Alignment {
        Alignment::LeadingEdge
    }

    fn candidate(&self, slides: &[K], entries: &Self::Event) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;

        for entry in entries.iter().filter(|e| e.is_intersecting && !e.ratio.is_nan()) {
            // identity lookup, entry order says nothing about slide order
            let Some(index) = slides.iter().position(|s| *s == entry.target) else {
                continue;
            };
            let replaces = match best {
                None => true,
                Some((best_index, best_ratio)) => {
                    entry.ratio > best_ratio || (entry.ratio == best_ratio && index < best_index)
                }
            };
            if replaces {
                best = Some((index, entry.ratio));
            }
        }

        best.map(|(index, _)| index)
    }
}

/// Active slide = slide whose center is closest to the container's visible center.
#[derive(Debug, Clone, Copy, Default)]
pub struct CenterDistance;

impl<K> MeasurementStrategy<K> for CenterDistance {
    type Event = ScrollGeometry;

    fn alignment(&self) -> Alignment {
        Alignment::Center
    }

    fn candidate(&self, slides: &[K], geometry: &Self::Event) -> Option<usize> {
        let center = geometry.visible_center();
        let mut best: Option<(usize, f64)> = None;

        for (index, slide) in geometry.slides.iter().take(slides.len()).enumerate() {
            let distance = (slide.center() - center).abs();
            if distance.is_nan() {
                continue;
            }
            // strict comparison keeps the lowest index on ties
            if best.map_or(true, |(_, d)| distance < d) {
                best = Some((index, distance));
            }
        }

        best.map(|(index, _)| index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(target: &'static str, ratio: f64) -> IntersectionSample<&'static str> {
        IntersectionSample { target, is_intersecting: true, ratio }
    }

    #[test]
    fn highest_ratio_wins() {
        let slides = ["a", "b", "c"];
        let entries = vec![sample("a", 0.2), sample("c", 0.9), sample("b", 0.5)];
        assert_eq!(IntersectionRatio.candidate(&slides[..], &entries), Some(2));
    }

    #[test]
    fn equal_ratios_pick_lowest_index_regardless_of_entry_order() {
        let slides = ["a", "b", "c"];
        let forward = vec![sample("a", 0.4), sample("b", 0.4)];
        let reversed = vec![sample("b", 0.4), sample("a", 0.4)];
        for _ in 0..3 {
            assert_eq!(IntersectionRatio.candidate(&slides[..], &forward), Some(0));
            assert_eq!(IntersectionRatio.candidate(&slides[..], &reversed), Some(0));
        }
    }

    #[test]
    fn non_intersecting_and_unknown_entries_are_ignored() {
        let slides = ["a", "b"];
        let entries = vec![
            IntersectionSample { target: "a", is_intersecting: false, ratio: 0.0 },
            sample("zz", 1.0),
            sample("b", 0.6),
        ];
        assert_eq!(IntersectionRatio.candidate(&slides[..], &entries), Some(1));

        let nothing_visible = vec![IntersectionSample { target: "a", is_intersecting: false, ratio: 0.0 }];
        assert_eq!(IntersectionRatio.candidate(&slides[..], &nothing_visible), None);
    }

    #[test]
    fn closest_center_wins() {
        let geometry = ScrollGeometry {
            scroll_left: 250.0,
            client_width: 300.0,
            slides: (0..4).map(|i| SlideBox::new(i as f64 * 300.0, 300.0)).collect(),
        };
        // visible center 400, slide 1 center 450, slide 0 center 150
        let slides = [(); 4];
        assert_eq!(CenterDistance.candidate(&slides[..], &geometry), Some(1));
    }

    #[test]
    fn center_tie_picks_lowest_index() {
        let geometry = ScrollGeometry {
            scroll_left: 150.0,
            client_width: 300.0,
            slides: vec![SlideBox::new(0.0, 300.0), SlideBox::new(300.0, 300.0)],
        };
        // visible center 300 sits exactly between both slide centers
        let slides = [(); 2];
        assert_eq!(CenterDistance.candidate(&slides[..], &geometry), Some(0));
    }

    #[test]
    fn center_ignores_boxes_beyond_the_slide_list() {
        let geometry = ScrollGeometry {
            scroll_left: 900.0,
            client_width: 300.0,
            slides: (0..5).map(|i| SlideBox::new(i as f64 * 300.0, 300.0)).collect(),
        };
        let slides = [(); 2];
        assert_eq!(CenterDistance.candidate(&slides[..], &geometry), Some(1));
        let empty: [(); 0] = [];
        assert_eq!(CenterDistance.candidate(&empty[..], &geometry), None);
    }
}
