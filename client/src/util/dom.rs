//! Browser geometry glue between DOM events/elements and `state::geometry`.

use crate::state::geometry::Point;
#[cfg(feature = "hydrate")]
use crate::state::geometry::Rect;

/// Viewport position of a pointer event.
pub fn pointer_point(ev: &leptos::ev::PointerEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

#[cfg(feature = "hydrate")]
pub fn element_rect(element: &web_sys::Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
}

/// Current box of the first descendant of `root` carrying `class`.
#[cfg(feature = "hydrate")]
pub fn class_rect(root: &web_sys::Element, class: &str) -> Option<Rect> {
    match root.query_selector(&format!(".{class}")) {
        Ok(found) => found.map(|element| element_rect(&element)),
        Err(e) => {
            log::debug!("cannot query .{class}: {e:?}");
            None
        }
    }
}
