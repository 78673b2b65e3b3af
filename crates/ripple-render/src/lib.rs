//! Full-screen ripple pass: samples the base image and distorts it using the
//! wave parameters packed from each frame's snapshot.
//!
//! The wave buffer is sized once from the registry capacity and rewritten in
//! place every frame. Dropping [`GpuState`] releases the texture, buffers and
//! surface.

use ripple_core::{
    pack_waves, wave_buffer_size, wave_shader_source, FrameParams, FrameUniform, RenderSink,
    WaveUniform,
};

mod helpers;

pub use helpers::ImageRgba;

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    frame_buffer: wgpu::Buffer,
    wave_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    #[allow(dead_code)]
    image_texture: wgpu::Texture, // kept alive for the bind group
    image_size: (u32, u32),
    capacity: usize,
    wave_scratch: Vec<WaveUniform>,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        target: impl Into<wgpu::SurfaceTarget<'a>>,
        width: u32,
        height: u32,
        image: &ImageRgba,
        capacity: usize,
    ) -> anyhow::Result<Self> {
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(target)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;

        let caps = surface.get_capabilities(&adapter);
        let format = helpers::pick_surface_format(&caps)
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let (image_texture, image_view) =
            helpers::create_image_texture(&device, &queue, "ripple_image", image);
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("ripple_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("ripple_shader"),
            source: wgpu::ShaderSource::Wgsl(wave_shader_source(capacity).into()),
        });
        let uniform_entry = |binding: u32| wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        };
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("ripple_bgl"),
            entries: &[
                uniform_entry(0), // frame
                uniform_entry(1), // waves
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        multisampled: false,
                        view_dimension: wgpu::TextureViewDimension::D2,
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 3,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });
        let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("ripple_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let pipeline = helpers::make_fullscreen_pipeline(&device, &pl, &shader, "fs_ripple", format);

        let frame_buffer = helpers::create_uniform_buffer(
            &device,
            "ripple_frame",
            std::mem::size_of::<FrameUniform>() as u64,
        );
        let wave_buffer =
            helpers::create_uniform_buffer(&device, "ripple_waves", wave_buffer_size(capacity));
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("ripple_bg"),
            layout: &bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: frame_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wave_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::TextureView(&image_view),
                },
                wgpu::BindGroupEntry {
                    binding: 3,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
        });

        log::info!(
            "[gpu] ready: {}x{} {:?}, image {}x{}, {} wave slots",
            config.width,
            config.height,
            format,
            image.width,
            image.height,
            capacity
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            frame_buffer,
            wave_buffer,
            bind_group,
            image_texture,
            image_size: (image.width, image.height),
            capacity,
            wave_scratch: Vec::with_capacity(capacity),
            clear_color: wgpu::Color::BLACK,
        })
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    #[inline]
    pub fn image_size(&self) -> (u32, u32) {
        self.image_size
    }

    /// Reconfigure the swapchain; zero-sized requests (minimized windows)
    /// are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width == self.config.width && height == self.config.height {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        log::debug!("[gpu] resized to {}x{}", width, height);
    }

    /// Re-apply the current configuration after the surface was lost.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }
}

impl<'a> RenderSink for GpuState<'a> {
    type Error = wgpu::SurfaceError;

    fn render(&mut self, frame: &FrameParams<'_>) -> Result<(), wgpu::SurfaceError> {
        pack_waves(frame.waves, &mut self.wave_scratch);
        let n = self.wave_scratch.len().min(self.capacity);
        self.queue.write_buffer(
            &self.wave_buffer,
            0,
            bytemuck::cast_slice(&self.wave_scratch[..n]),
        );
        self.queue.write_buffer(
            &self.frame_buffer,
            0,
            bytemuck::bytes_of(&FrameUniform::from_frame(frame)),
        );

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("ripple_pass"),
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
            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.draw(0..3, 0..1);
        }
        self.queue.submit(Some(encoder.finish()));
        output.present();
        Ok(())
    }
}
