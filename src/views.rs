use crate::core::{CardView, HeroView, Rect};
use crate::dom;
use glam::{Vec2, Vec3};
use wasm_bindgen::JsCast;
use web_sys as web;

const POSE_ON_CLASS: &str = "isOn";

/// `.impossibleCard` with its `.pose` children.
pub struct DomCard {
    el: web::HtmlElement,
    poses: Vec<web::Element>,
}

impl DomCard {
    pub fn from_element(el: web::Element) -> Option<Self> {
        let poses = dom::query_all(&el, ".pose");
        let el = el.dyn_into::<web::HtmlElement>().ok()?;
        Some(Self { el, poses })
    }
}

impl CardView for DomCard {
    fn pose_count(&self) -> usize {
        self.poses.len()
    }

    fn show_pose(&mut self, index: usize) {
        for (i, p) in self.poses.iter().enumerate() {
            _ = p.class_list().toggle_with_force(POSE_ON_CLASS, i == index);
        }
    }

    fn bounds(&self) -> Option<Rect> {
        let r = self.el.get_bounding_client_rect();
        Some(Rect {
            left: r.left() as f32,
            top: r.top() as f32,
            width: r.width() as f32,
            height: r.height() as f32,
        })
    }

    fn set_rotation(&mut self, rotation: Vec3) {
        let style = self.el.style();
        _ = style.set_property("--rx", &format!("{:.2}deg", rotation.x));
        _ = style.set_property("--ry", &format!("{:.2}deg", rotation.y));
        _ = style.set_property("--rz", &format!("{:.2}deg", rotation.z));
    }

    fn set_offset(&mut self, offset_px: Vec2) {
        let style = self.el.style();
        _ = style.set_property("--px", &format!("{:.2}px", offset_px.x));
        _ = style.set_property("--py", &format!("{:.2}px", offset_px.y));
    }
}

/// `#heroBgFigure`, centred with a `-50%` translate.
pub struct DomHero {
    el: web::HtmlElement,
}

impl DomHero {
    pub fn from_element(el: web::Element) -> Option<Self> {
        el.dyn_into::<web::HtmlElement>().ok().map(|el| Self { el })
    }
}

impl HeroView for DomHero {
    fn set_offset(&mut self, offset_px: Vec2) {
        _ = self.el.style().set_property(
            "transform",
            &format!(
                "translate(calc(-50% + {:.2}px), calc(-50% + {:.2}px))",
                offset_px.x, offset_px.y
            ),
        );
    }
}
