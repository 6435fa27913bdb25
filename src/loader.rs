use crate::render::{helpers, PanoramaTexture, PANORAMA_FORMAT};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tour_core::{TextureLoader, TextureRequest};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type TextureResult = Result<PanoramaTexture, String>;

/// Completions waiting for the next frame, which hands them to the session.
/// Image callbacks never touch the session directly.
pub type TextureInbox = Rc<RefCell<Vec<(u64, TextureResult)>>>;

pub struct ImageLoader {
    device: wgpu::Device,
    queue: wgpu::Queue,
    inbox: TextureInbox,
    closed: Rc<Cell<bool>>,
}

impl ImageLoader {
    pub fn new(device: wgpu::Device, queue: wgpu::Queue) -> Self {
        Self {
            device,
            queue,
            inbox: Rc::new(RefCell::new(Vec::new())),
            closed: Rc::new(Cell::new(false)),
        }
    }

    pub fn inbox(&self) -> TextureInbox {
        self.inbox.clone()
    }
}

impl TextureLoader for ImageLoader {
    fn load(&mut self, request: TextureRequest) {
        if self.closed.get() {
            return;
        }
        let img = match web::HtmlImageElement::new() {
            Ok(img) => img,
            Err(e) => {
                self.inbox
                    .borrow_mut()
                    .push((request.id, Err(format!("image element: {:?}", e))));
                return;
            }
        };
        img.set_cross_origin(Some("anonymous"));

        let id = request.id;
        let device = self.device.clone();
        let queue = self.queue.clone();
        let inbox = self.inbox.clone();
        let img_loaded = img.clone();
        let closed = self.closed.clone();
        let onload = Closure::wrap(Box::new(move || {
            if closed.get() {
                log::debug!("[texture] skipping upload {} after shutdown", id);
                return;
            }
            let result = upload_image(&device, &queue, &img_loaded);
            inbox.borrow_mut().push((id, result));
        }) as Box<dyn FnMut()>);

        let inbox = self.inbox.clone();
        let src = request.image.clone();
        let onerror = Closure::wrap(Box::new(move || {
            inbox
                .borrow_mut()
                .push((id, Err(format!("could not fetch {}", src))));
        }) as Box<dyn FnMut()>);

        img.set_onload(Some(onload.as_ref().unchecked_ref()));
        img.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        onload.forget();
        onerror.forget();
        log::debug!("[texture] fetching {}", request.image);
        img.set_src(&request.image);
    }

    fn shutdown(&mut self) {
        self.closed.set(true);
        for (_, result) in self.inbox.borrow_mut().drain(..) {
            if let Ok(panorama) = result {
                panorama.texture.destroy();
            }
        }
    }
}

fn upload_image(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    img: &web::HtmlImageElement,
) -> Result<PanoramaTexture, String> {
    let width = img.natural_width();
    let height = img.natural_height();
    let max = device.limits().max_texture_dimension_2d;
    if width == 0 || height == 0 {
        return Err("image has no pixels".into());
    }
    if width > max || height > max {
        return Err(format!(
            "image {}x{} exceeds the {} texel limit",
            width, height, max
        ));
    }
    let (texture, view) = helpers::create_color_texture(
        device,
        "panorama",
        width,
        height,
        PANORAMA_FORMAT,
        wgpu::TextureUsages::TEXTURE_BINDING
            | wgpu::TextureUsages::COPY_DST
            | wgpu::TextureUsages::RENDER_ATTACHMENT,
    );
    queue.copy_external_image_to_texture(
        &wgpu::CopyExternalImageSourceInfo {
            source: wgpu::ExternalImageSource::HTMLImageElement(img.clone()),
            origin: wgpu::Origin2d::ZERO,
            flip_y: false,
        },
        wgpu::CopyExternalImageDestInfo {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
            color_space: wgpu::PredefinedColorSpace::Srgb,
            premultiplied_alpha: false,
        },
        wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
    );
    Ok(PanoramaTexture { texture, view })
}
