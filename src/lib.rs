#![cfg(target_arch = "wasm32")]
use crate::bridge::{AssetSource, StageCamera};
use crate::shutdown::Shutdown;
use instant::Instant;
use scrollcam_core::{ChoreographyError, Director, DirectorConfig, Phase, SHOTS};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

mod bridge;
mod captions;
mod constants;
mod dom;
mod events;
mod frame;
mod overlay;
mod shutdown;
mod style;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("scrollcam-web starting");
    Ok(())
}

/// Scroll-driven camera for one page: created by the page script with its
/// camera and loader, then `mount()`ed and eventually `dispose()`d.
#[wasm_bindgen]
pub struct ScrollStage {
    director: Rc<RefCell<Director>>,
    camera: Rc<RefCell<Option<StageCamera>>>,
    assets: Option<AssetSource>,
    scroll_lock: Rc<RefCell<dom::ScrollLock>>,
    shutdown: Rc<Shutdown>,
    resize: Option<events::Listener>,
    frame_loop: Option<frame::FrameLoop>,
}

#[wasm_bindgen]
impl ScrollStage {
    #[wasm_bindgen(constructor)]
    pub fn new(camera: StageCamera, assets: AssetSource) -> Result<ScrollStage, JsValue> {
        let director = Director::new(SHOTS, DirectorConfig::default())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self {
            director: Rc::new(RefCell::new(director)),
            camera: Rc::new(RefCell::new(Some(camera))),
            assets: Some(assets),
            scroll_lock: Rc::new(RefCell::new(dom::ScrollLock::default())),
            shutdown: Rc::new(Shutdown::default()),
            resize: None,
            frame_loop: None,
        })
    }

    /// Lock scrolling, show the loader, start loading and run the frame loop.
    pub fn mount(&mut self) -> Result<(), JsValue> {
        self.mount_inner()
            .map_err(|e| JsValue::from_str(&format!("{:#}", e)))
    }

    /// Current lifecycle phase, e.g. `"active"`.
    #[wasm_bindgen(getter)]
    pub fn phase(&self) -> String {
        // only a frame holds the director across a JS call, and frames render only when active
        self.director
            .try_borrow()
            .map_or(Phase::Active, |d| d.phase())
            .to_string()
    }

    #[wasm_bindgen(getter, js_name = loadPercent)]
    pub fn load_percent(&self) -> u8 {
        self.director
            .try_borrow()
            .map_or(100, |d| d.load_percent())
    }

    /// Tear everything down. After this returns the camera is never touched
    /// again. Called from inside the camera's render callback, the teardown
    /// completes as soon as that frame returns.
    pub fn dispose(&mut self) {
        if let Some(frame_loop) = self.frame_loop.take() {
            frame_loop.cancel();
        }
        self.resize = None;
        self.shutdown.request();
        if !self
            .shutdown
            .run(|| frame::teardown(&self.director, &self.camera, &self.scroll_lock))
            && !self.shutdown.is_done()
        {
            log::debug!("[stage] dispose requested mid-frame, deferring");
        }
    }
}

impl ScrollStage {
    fn mount_inner(&mut self) -> anyhow::Result<()> {
        if self.shutdown.is_requested() {
            anyhow::bail!("stage already disposed");
        }
        let Some(assets) = self.assets.take() else {
            log::warn!("[stage] mount called twice");
            return Ok(());
        };
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;

        self.scroll_lock.borrow_mut().engage(&document);
        overlay::show(&document);
        overlay::set_progress(&document, 0);
        self.director.borrow_mut().begin_loading();

        let director_resize = self.director.clone();
        self.resize = events::Listener::add(&window, "resize", move || {
            if let Ok(mut director) = director_resize.try_borrow_mut() {
                director.on_resize();
            }
        });
        if self.resize.is_none() {
            log::warn!("[stage] could not listen for resize");
        }

        self.frame_loop = Some(frame::start_loop(frame::FrameContext {
            director: self.director.clone(),
            camera: self.camera.clone(),
            scroll_lock: self.scroll_lock.clone(),
            shutdown: self.shutdown.clone(),
            captions: captions::CaptionWriter::default(),
            last_instant: Instant::now(),
            last_percent: None,
        }));

        let director = self.director.clone();
        spawn_local(async move {
            if let Err(e) = load_model(assets, director).await {
                log::error!("load error: {:?}", e);
            }
        });
        Ok(())
    }
}

async fn load_model(assets: AssetSource, director: Rc<RefCell<Director>>) -> anyhow::Result<()> {
    let director_progress = director.clone();
    let on_progress = Closure::wrap(Box::new(move |loaded: f64, total: JsValue| {
        director_progress.borrow_mut().on_load_progress(
            style::progress_loaded(loaded),
            style::progress_total(total.as_f64()),
        );
    }) as Box<dyn FnMut(f64, JsValue)>);

    let result = JsFuture::from(assets.js_load(on_progress.as_ref().unchecked_ref())).await;
    drop(on_progress);

    let viewport = dom::DomViewport::current().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let mut director = director.borrow_mut();
    match result
        .map_err(|e| anyhow::anyhow!(bridge::describe_error(&e)))
        .and_then(|info| bridge::parse_model_info(&info))
    {
        Ok((bounds, base_yaw)) => director.on_model_ready(bounds, base_yaw, &viewport),
        Err(e) => {
            director.on_model_failed(ChoreographyError::ModelLoad(format!("{:#}", e)), &viewport)
        }
    }
    Ok(())
}
