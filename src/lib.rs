pub mod core;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod render;
#[cfg(target_arch = "wasm32")]
mod storage;
#[cfg(target_arch = "wasm32")]
mod ui;
#[cfg(target_arch = "wasm32")]
mod views;

#[cfg(target_arch = "wasm32")]
pub use web_entry::start;

#[cfg(target_arch = "wasm32")]
mod web_entry {
    use crate::core::{
        AppContext, CardAnimator, CardView, HeroParallax, ParticleField, PreferenceStore,
        SeededRandom,
    };
    use crate::{dom, events, frame, render, storage, ui, views};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys as web;

    const CANVAS_ID: &str = "fx";
    const HERO_ID: &str = "heroBgFigure";
    const CARD_SELECTOR: &str = ".impossibleCard";

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("impossible-fx starting");

        if let Err(e) = init() {
            log::error!("init error: {:?}", e);
        }
        Ok(())
    }

    fn build_field(document: &web::Document, reduced_motion: bool) -> Option<ParticleField> {
        let canvas = document
            .get_element_by_id(CANVAS_ID)?
            .dyn_into::<web::HtmlCanvasElement>()
            .ok()?;
        match render::CanvasPainter::new(canvas) {
            Ok(p) => Some(ParticleField::new(
                Box::new(p),
                Box::new(SeededRandom::from_entropy()),
                reduced_motion,
            )),
            Err(e) => {
                log::warn!("[fx] canvas unusable: {:?}", e);
                None
            }
        }
    }

    fn init() -> anyhow::Result<()> {
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
        let env = dom::read_environment();
        log::info!(
            "[env] reduced_motion={} coarse={} touch={} dpr={:.2}",
            env.reduced_motion,
            env.coarse_pointer,
            env.touch,
            env.device_pixel_ratio
        );

        let mut prefs = PreferenceStore::load(Box::new(storage::LocalStorage), env.reduced_motion);
        ui::apply_prefs(&document, &prefs.prefs());
        let doc_for_prefs = document.clone();
        prefs.subscribe(move |p| ui::apply_prefs(&doc_for_prefs, p));

        let card_views: Vec<Box<dyn CardView>> =
            dom::query_all_in_document(&document, CARD_SELECTOR)
                .into_iter()
                .filter_map(views::DomCard::from_element)
                .map(|c| Box::new(c) as Box<dyn CardView>)
                .collect();
        log::info!("[cards] {} found", card_views.len());
        let cards = CardAnimator::new(
            card_views,
            0.0,
            prefs.quiet(),
            Box::new(SeededRandom::from_entropy()),
        );

        let mut app = AppContext::new(env, prefs, cards);
        match build_field(&document, env.reduced_motion) {
            Some(field) => app = app.with_field(field),
            None => log::warn!("[fx] #{} missing, background disabled", CANVAS_ID),
        }
        if let Some(hero) = document
            .get_element_by_id(HERO_ID)
            .and_then(views::DomHero::from_element)
        {
            app = app.with_hero(HeroParallax::new(Box::new(hero)));
        }

        let runtime = frame::install_loop(app);
        events::wire_toggles(&document, &runtime);
        events::wire_pointer(&runtime);
        events::wire_resize(&runtime);
        events::wire_visibility(&document, &runtime);

        let mut rt = runtime.borrow_mut();
        if env.reduced_motion {
            rt.render_static();
        } else {
            rt.start();
        }
        Ok(())
    }
}
