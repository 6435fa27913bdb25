use glam::Mat4;
use tour_core::{CameraState, RenderBackend, TourError, Viewport};
use web_sys as web;

pub(crate) mod helpers;
mod sphere;

use sphere::{create_sphere_resources, SphereResources, SphereUniforms};

pub(crate) const PANORAMA_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

/// Panorama image uploaded to the GPU by the image loader.
pub struct PanoramaTexture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
}

struct BoundPanorama {
    texture: wgpu::Texture,
    bind_group: wgpu::BindGroup,
}

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    sphere: SphereResources,
    sampler: wgpu::Sampler,
    panorama: Option<BoundPanorama>,
    viewport: Viewport,
    opacity: f32,
    clear_color: wgpu::Color,
    disposed: bool,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let sphere = create_sphere_resources(&device, format);
        let sampler = helpers::create_panorama_sampler(&device);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            sphere,
            sampler,
            panorama: None,
            viewport: Viewport::new(width as f32, height as f32),
            opacity: 0.0,
            clear_color: wgpu::Color::BLACK,
            disposed: false,
        })
    }

    /// Handles the image loader needs to upload panoramas.
    pub fn device_and_queue(&self) -> (wgpu::Device, wgpu::Queue) {
        (self.device.clone(), self.queue.clone())
    }

    fn write_uniforms(&self, camera: &CameraState) {
        let view_proj: Mat4 = camera.view_projection(self.viewport);
        let u = SphereUniforms {
            view_proj: view_proj.to_cols_array_2d(),
            opacity: self.opacity,
            _pad: [0.0; 3],
        };
        self.queue
            .write_buffer(&self.sphere.uniform_buffer, 0, bytemuck::bytes_of(&u));
    }
}

impl RenderBackend for GpuState {
    type Texture = PanoramaTexture;

    fn bind_texture(&mut self, texture: PanoramaTexture) {
        let bind_group = self.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("panorama_bg"),
            layout: &self.sphere.texture_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&texture.view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&self.sampler),
                },
            ],
        });
        let previous = self.panorama.replace(BoundPanorama {
            texture: texture.texture,
            bind_group,
        });
        if let Some(old) = previous {
            old.texture.destroy();
        }
    }

    fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity.clamp(0.0, 1.0);
    }

    fn resize(&mut self, viewport: Viewport) {
        let width = viewport.width as u32;
        let height = viewport.height as u32;
        if width == 0 || height == 0 {
            return;
        }
        self.viewport = viewport;
        if width != self.config.width || height != self.config.height {
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    fn submit_frame(&mut self, camera: &CameraState) -> Result<(), TourError> {
        if self.disposed {
            return Err(TourError::Backend("frame submitted after dispose".into()));
        }
        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                return Err(TourError::Backend("surface lost, reconfigured".into()));
            }
            Err(e) => return Err(TourError::Backend(format!("{:?}", e))),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        self.write_uniforms(camera);

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("panorama_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            if let Some(panorama) = &self.panorama {
                rpass.set_pipeline(&self.sphere.pipeline);
                rpass.set_bind_group(0, &self.sphere.uniform_bind_group, &[]);
                rpass.set_bind_group(1, &panorama.bind_group, &[]);
                rpass.set_vertex_buffer(0, self.sphere.vertex_buffer.slice(..));
                rpass.set_index_buffer(self.sphere.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..self.sphere.index_count, 0, 0..1);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    fn dispose(&mut self) -> Result<(), TourError> {
        if self.disposed {
            return Err(TourError::Backend("already disposed".into()));
        }
        self.disposed = true;
        if let Some(panorama) = self.panorama.take() {
            panorama.texture.destroy();
        }
        self.sphere.vertex_buffer.destroy();
        self.sphere.index_buffer.destroy();
        self.sphere.uniform_buffer.destroy();
        log::info!("[render] released GPU resources");
        Ok(())
    }
}
