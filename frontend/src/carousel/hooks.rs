use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info};
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use super::controller::{CarouselController, ScrollHost, Viewport};
use super::strategy::{CenterDistance, IntersectionRatio, IntersectionSample, MeasurementStrategy, SlideBox};
use crate::config;
use crate::dom::{self, ListenerGuard, ObserverGuard};

/// A horizontally scrollable element whose element children are the slides.
pub struct DomRail {
    container: HtmlElement,
}

impl DomRail {
    pub fn new(container: HtmlElement) -> Self {
        Self { container }
    }

    pub fn slides(&self) -> Vec<Element> {
        dom::child_elements(&self.container)
    }

    pub fn slide_count(&self) -> usize {
        self.container.child_element_count() as usize
    }
}

impl ScrollHost for DomRail {
    fn viewport(&self) -> Option<Viewport> {
        if !self.container.is_connected() {
            return None;
        }
        Some(Viewport {
            scroll_left: self.container.scroll_left() as f64,
            client_width: self.container.client_width() as f64,
        })
    }

    fn slide_box(&self, index: usize) -> Option<SlideBox> {
        let slide = self.container.children().item(index as u32).and_then(dom::as_html)?;
        // offsetLeft is measured from the offset parent, which is the rail
        // only when the rail itself is positioned
        let parent_is_rail = slide
            .offset_parent()
            .map_or(false, |parent| parent.is_same_node(Some(self.container.as_ref())));
        Some(SlideBox::new(
            rail_relative(slide.offset_left(), self.container.offset_left(), parent_is_rail),
            slide.client_width() as f64,
        ))
    }

    fn scroll_to(&self, left: f64) {
        let options = web_sys::ScrollToOptions::new();
        options.set_left(left);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        self.container.scroll_to_with_scroll_to_options(&options);
    }
}

/// A slide's `offsetLeft` rebased onto the rail's content origin.
fn rail_relative(slide_left: i32, rail_left: i32, parent_is_rail: bool) -> f64 {
    if parent_is_rail {
        slide_left as f64
    } else {
        (slide_left - rail_left) as f64
    }
}

/// What a section needs to render indicator dots.
#[derive(Clone, PartialEq)]
pub struct CarouselHandle {
    pub active: Option<usize>,
    pub scroll_to: Callback<usize>,
}

impl CarouselHandle {
    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }
}

fn scroll_callback<K, S>(
    rail: NodeRef,
    controller: Rc<RefCell<CarouselController<K, S>>>,
) -> Callback<usize>
where
    K: 'static,
    S: MeasurementStrategy<K> + 'static,
{
    Callback::from(move |index: usize| {
        let Some(container) = rail.cast::<HtmlElement>() else {
            return;
        };
        let host = DomRail::new(container);
        if let Some(target) = controller.borrow().scroll_to_index(index, &host) {
            debug!("carousel scrolling to slide {} at {}px", index, target);
        }
    })
}

/// Tracks the slide whose center is nearest the rail's center, re-measuring
/// on every scroll event.
#[hook]
pub fn use_center_carousel(rail: NodeRef) -> CarouselHandle {
    let active = use_state(|| None::<usize>);
    let controller = use_mut_ref(|| CarouselController::<usize, CenterDistance>::new(CenterDistance));

    {
        let active = active.clone();
        let controller = controller.clone();
        use_effect_with_deps(
            move |rail: &NodeRef| {
                let mut listener = None;

                let rail = rail
                    .cast::<HtmlElement>()
                    .map(|container| (DomRail::new(container.clone()), container))
                    .filter(|(host, _)| host.slide_count() > 0);
                if let Some((host, container)) = rail {
                    let count = host.slide_count();
                    controller.borrow_mut().attach((0..count).collect());
                    active.set(controller.borrow().active_index());

                    let measure = {
                        let controller = controller.clone();
                        let active = active.clone();
                        move || {
                            // unmounted rails yield no geometry, which is a no-op
                            let Some(geometry) = host.geometry(count) else {
                                return;
                            };
                            if let Some(index) = controller.borrow_mut().on_measurement(&geometry) {
                                active.set(Some(index));
                            }
                        }
                    };
                    measure();
                    listener = ListenerGuard::passive(&container, "scroll", measure);
                    info!("center carousel attached with {} slides", count);
                }

                move || {
                    drop(listener);
                    controller.borrow_mut().detach();
                }
            },
            rail.clone(),
        );
    }

    CarouselHandle {
        active: *active,
        scroll_to: scroll_callback(rail, controller),
    }
}

/// Tracks the most visible slide through an `IntersectionObserver` rooted at
/// the rail.
#[hook]
pub fn use_intersection_carousel(rail: NodeRef) -> CarouselHandle {
    let active = use_state(|| None::<usize>);
    let controller = use_mut_ref(|| CarouselController::<Element, IntersectionRatio>::new(IntersectionRatio));

    {
        let active = active.clone();
        let controller = controller.clone();
        use_effect_with_deps(
            move |rail: &NodeRef| {
                let mut observer = None;

                let rail = rail
                    .cast::<HtmlElement>()
                    .map(|container| (DomRail::new(container.clone()).slides(), container))
                    .filter(|(slides, _)| !slides.is_empty());
                if let Some((slides, container)) = rail {
                    controller.borrow_mut().attach(slides.clone());
                    active.set(controller.borrow().active_index());

                    let root: &Element = &container;
                    let handler = {
                        let controller = controller.clone();
                        let active = active.clone();
                        move |entries: Vec<web_sys::IntersectionObserverEntry>, _: &web_sys::IntersectionObserver| {
                            let batch = entries
                                .iter()
                                .map(|entry| IntersectionSample {
                                    target: entry.target(),
                                    is_intersecting: entry.is_intersecting(),
                                    ratio: entry.intersection_ratio(),
                                })
                                .collect::<Vec<_>>();
                            if let Some(index) = controller.borrow_mut().on_measurement(&batch) {
                                active.set(Some(index));
                            }
                        }
                    };
                    observer = ObserverGuard::observe(Some(root), &config::CAROUSEL_THRESHOLDS, &slides, handler);
                    info!("intersection carousel attached with {} slides", slides.len());
                }

                move || {
                    drop(observer);
                    controller.borrow_mut().detach();
                }
            },
            rail.clone(),
        );
    }

    CarouselHandle {
        active: *active,
        scroll_to: scroll_callback(rail, controller),
    }
}

#[derive(Properties, PartialEq)]
pub struct CarouselDotsProps {
    pub handle: CarouselHandle,
    pub count: usize,
    #[prop_or_default]
    pub class: Classes,
}

/// Indicator dots; clicking one scrolls the rail to that slide.
#[function_component(CarouselDots)]
pub fn carousel_dots(props: &CarouselDotsProps) -> Html {
    html! {
        <div class={classes!("carousel-dots", props.class.clone())}>
            { for (0..props.count).map(|i| {
                let scroll_to = props.handle.scroll_to.clone();
                let onclick = Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    scroll_to.emit(i);
                });
                html! {
                    <button
                        type="button"
                        aria-label={format!("Go to slide {}", i + 1)}
                        aria-current={props.handle.is_active(i).then(|| "true")}
                        class={classes!("carousel-dot", props.handle.is_active(i).then(|| "active"))}
                        {onclick}
                    />
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positioned_rail_offsets_are_used_as_is() {
        assert_eq!(rail_relative(640, 24, true), 640.0);
    }

    #[test]
    fn unpositioned_rail_offsets_are_rebased() {
        // slides report offsetLeft from the page, so the rail's own offset comes off
        assert_eq!(rail_relative(664, 24, false), 640.0);
        assert_eq!(rail_relative(24, 24, false), 0.0);
    }

    #[test]
    fn rebased_offset_drives_center_scroll_target() {
        let slide = SlideBox::new(rail_relative(924, 24, false), 300.0);
        // centered in a 500px viewport
        assert_eq!(slide.offset_left - (500.0 - slide.width) / 2.0, 800.0);
    }
}
