use crate::core::{AppContext, FrameHandle, FrameRequester, FrameScheduler};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` bound to the loop's own callback.
pub struct RafRequester {
    callback: FrameCallback,
}

impl FrameRequester for RafRequester {
    fn request(&mut self) -> Option<FrameHandle> {
        let window = web::window()?;
        let cb = self.callback.borrow();
        let f = cb.as_ref()?;
        let id = window
            .request_animation_frame(f.as_ref().unchecked_ref())
            .ok()?;
        Some(FrameHandle(id))
    }

    fn cancel(&mut self, handle: FrameHandle) {
        if let Some(w) = web::window() {
            _ = w.cancel_animation_frame(handle.0);
        }
    }
}

pub struct Runtime {
    pub scheduler: FrameScheduler<RafRequester>,
    pub app: AppContext,
    clock: Instant,
}

impl Runtime {
    pub fn now_ms(&self) -> f64 {
        self.clock.elapsed().as_secs_f64() * 1000.0
    }

    pub fn start(&mut self) {
        let now = self.now_ms();
        self.scheduler.start(now);
    }

    pub fn render_static(&mut self) {
        let now = self.now_ms();
        self.scheduler.render_static(now, &mut self.app);
    }

    pub fn visibility_changed(&mut self, hidden: bool) {
        let now = self.now_ms();
        self.scheduler.visibility_changed(hidden, now);
    }
}

/// Build the runtime and bind its animation-frame callback. Nothing runs
/// until `Runtime::start` is called.
pub fn install_loop(app: AppContext) -> Rc<RefCell<Runtime>> {
    let reduced_motion = app.env().reduced_motion;
    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let runtime = Rc::new(RefCell::new(Runtime {
        scheduler: FrameScheduler::new(
            RafRequester {
                callback: callback.clone(),
            },
            reduced_motion,
        ),
        app,
        clock: Instant::now(),
    }));

    let rt = runtime.clone();
    *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let mut guard = rt.borrow_mut();
        let now = guard.now_ms();
        let Runtime { scheduler, app, .. } = &mut *guard;
        scheduler.tick(now, app);
    }) as Box<dyn FnMut()>));

    runtime
}
