use crate::bridge::StageCamera;
use crate::captions::CaptionWriter;
use crate::dom::{self, ScrollLock};
use crate::overlay;
use crate::shutdown::Shutdown;
use instant::Instant;
use scrollcam_core::{Director, Phase};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub director: Rc<RefCell<Director>>,
    pub camera: Rc<RefCell<Option<StageCamera>>>,
    pub scroll_lock: Rc<RefCell<ScrollLock>>,
    pub shutdown: Rc<Shutdown>,
    pub captions: CaptionWriter,
    pub last_instant: Instant,
    pub last_percent: Option<u8>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        self.step();
        // a dispose() issued from inside the render callback lands here
        if self
            .shutdown
            .run(|| teardown(&self.director, &self.camera, &self.scroll_lock))
        {
            log::info!("[frame] deferred dispose complete");
        }
    }

    fn step(&mut self) {
        let now = Instant::now();
        // raw wall time: the ready timeout counts it, the scrub caps it itself
        let dt = now - self.last_instant;
        self.last_instant = now;

        if self.shutdown.is_requested() {
            return;
        }
        let Some(viewport) = dom::DomViewport::current() else {
            return;
        };
        let document = viewport.document();
        let mut director = self.director.borrow_mut();
        if director.phase() == Phase::Disposed {
            return;
        }

        director.tick(dt, &viewport);

        let percent = director.load_percent();
        if self.last_percent != Some(percent) {
            overlay::set_progress(document, percent);
            self.last_percent = Some(percent);
        }
        if director.take_ready() {
            overlay::hide(document);
            self.scroll_lock.borrow_mut().release(document);
        }

        if director.phase() == Phase::Active {
            if let Some(camera) = self.camera.borrow_mut().as_mut() {
                director.render(camera);
            }
            if !self.shutdown.is_requested() {
                self.captions.write(document, director.targets());
            }
        }
    }
}

/// Dispose the director and camera and restore the page.
///
/// Returns `false` without touching anything while a frame holds the stage.
pub fn teardown(
    director: &RefCell<Director>,
    camera: &RefCell<Option<StageCamera>>,
    scroll_lock: &RefCell<ScrollLock>,
) -> bool {
    let (Ok(mut director), Ok(mut camera), Ok(mut scroll_lock)) = (
        director.try_borrow_mut(),
        camera.try_borrow_mut(),
        scroll_lock.try_borrow_mut(),
    ) else {
        return false;
    };
    let disposed = director.dispose();
    if let Some(camera) = camera.take() {
        camera.js_dispose();
    }
    if let Some(document) = dom::window_document() {
        scroll_lock.release(&document);
        overlay::hide(&document);
    }
    log::info!("[stage] disposed ({disposed} segments)");
    true
}

/// A running requestAnimationFrame loop.
pub struct FrameLoop {
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    raf_id: Rc<Cell<Option<i32>>>,
    stopped: Rc<Cell<bool>>,
    in_frame: Rc<Cell<bool>>,
}

impl FrameLoop {
    /// Stop the loop. Safe to call from inside a frame: the running closure
    /// then drops itself once the frame returns.
    pub fn cancel(&self) {
        self.stopped.set(true);
        if let (Some(id), Some(w)) = (self.raf_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        if !self.in_frame.get() {
            self.tick.borrow_mut().take();
        }
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>, raf_id: &Rc<Cell<Option<i32>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        raf_id.set(w.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
    }
}

pub fn start_loop(frame_ctx: FrameContext) -> FrameLoop {
    let frame_ctx = Rc::new(RefCell::new(frame_ctx));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let stopped = Rc::new(Cell::new(false));
    let in_frame = Rc::new(Cell::new(false));
    let tick_clone = tick.clone();
    let raf_clone = raf_id.clone();
    let stopped_clone = stopped.clone();
    let in_frame_clone = in_frame.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        raf_clone.set(None);
        in_frame_clone.set(true);
        frame_ctx.borrow_mut().frame();
        in_frame_clone.set(false);
        if stopped_clone.get() {
            // cancelled during this frame; the closure releases itself
            let finished = tick_clone.borrow_mut().take();
            drop(finished);
            return;
        }
        request_frame(&tick_clone, &raf_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick, &raf_id);
    FrameLoop {
        tick,
        raf_id,
        stopped,
        in_frame,
    }
}
