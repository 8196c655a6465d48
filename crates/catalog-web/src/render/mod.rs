mod helpers;
mod meshes;
mod targets;

use crate::constants::{DEPTH_FORMAT, DRAW_SLOTS, EDGE_INFLATE};
use crate::text::TextBitmap;
use catalog_core::belt::belt_mesh;
use catalog_core::constants::{
    AMBIENT_INTENSITY, BACKGROUND_COLOR, HEADLIGHT_INTENSITY, SHADOW_BLUR,
};
use catalog_core::{
    const_color, ground_quad, outline_edges, top_left_quad, unit_box, Camera, Dims, Material,
    PanelShape, Rgb, SceneFrame, TextSide, SCENE_WGSL,
};
use fnv::FnvHashMap;
use glam::{Mat4, Vec3};
use helpers::{make_scene_pipeline, normal_matrix, PipelineSpec};
use meshes::{EdgeMeshes, GpuMesh};
use std::num::NonZeroU64;
use targets::DepthTarget;
use web_sys as web;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Globals {
    view_proj: [[f32; 4]; 4],
    eye: [f32; 4],
    light: [f32; 4],
    ambient: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct DrawUniforms {
    model: [[f32; 4]; 4],
    normal_matrix: [[f32; 4]; 4],
    color: [f32; 4],
    material: [f32; 4],
}

impl DrawUniforms {
    fn new(model: Mat4, color: Rgb, opacity: f32, material: [f32; 4]) -> Self {
        let [r, g, b] = color.to_linear_f32();
        Self {
            model: model.to_cols_array_2d(),
            normal_matrix: normal_matrix(model).to_cols_array_2d(),
            color: [r, g, b, opacity],
            material,
        }
    }

    fn lit(model: Mat4, m: &Material) -> Self {
        Self::new(model, m.color, m.opacity, [m.roughness, m.metalness, 0.0, 0.0])
    }

    fn flat(model: Mat4, color: Rgb, opacity: f32) -> Self {
        Self::new(model, color, opacity, [0.0; 4])
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Pipe {
    Shadow,
    Lit,
    Edges,
    Text,
}

#[derive(Clone, Copy)]
enum MeshRef {
    Ground,
    Slab,
    Belt,
    SlabEdges,
    BeltEdges,
    TextQuad,
}

struct DrawCmd {
    pipe: Pipe,
    mesh: MeshRef,
    slot: usize,
    text: Option<TextSide>,
}

struct TextTexture {
    _tex: wgpu::Texture,
    bind_group: wgpu::BindGroup,
    block_w: f32,
    block_h: f32,
}

/// Last rasterized block for one side; `texture` is `None` for blank copy.
struct TextSlot {
    key: u64,
    texture: Option<TextTexture>,
}

#[inline]
fn text_index(side: TextSide) -> usize {
    match side {
        TextSide::Front => 0,
        TextSide::Back => 1,
    }
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    view_format: wgpu::TextureFormat,
    width: u32,
    height: u32,
    depth: DepthTarget,
    clear: wgpu::Color,

    globals_buf: wgpu::Buffer,
    globals_bg: wgpu::BindGroup,
    draw_buf: wgpu::Buffer,
    draw_bg: wgpu::BindGroup,
    draw_stride: usize,
    draw_staging: Vec<u8>,
    text_bgl: wgpu::BindGroupLayout,
    text_sampler: wgpu::Sampler,

    shadow_pipeline: wgpu::RenderPipeline,
    lit_pipeline: wgpu::RenderPipeline,
    edge_pipeline: wgpu::RenderPipeline,
    text_pipeline: wgpu::RenderPipeline,

    slab: GpuMesh,
    belt: GpuMesh,
    ground: GpuMesh,
    text_quad: GpuMesh,
    belt_cpu: catalog_core::Mesh,
    edges: FnvHashMap<u32, EdgeMeshes>,
    texts: [Option<TextSlot>; 2],
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement, dims: &Dims) -> anyhow::Result<Self> {
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
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;

        // canvases expose non-sRGB formats; render through an sRGB view
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .first()
            .copied()
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let view_format = format.add_srgb_suffix();
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: if view_format != format {
                vec![view_format]
            } else {
                vec![]
            },
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!(
            "[gpu] surface {:?} (view {:?}) {}x{}",
            format,
            view_format,
            width,
            height
        );

        let depth = DepthTarget::new(&device, width, height, DEPTH_FORMAT);
        let [cr, cg, cb] = const_color(BACKGROUND_COLOR).to_linear_f32();
        let clear = wgpu::Color {
            r: cr as f64,
            g: cg as f64,
            b: cb as f64,
            a: 1.0,
        };

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene.wgsl"),
            source: wgpu::ShaderSource::Wgsl(SCENE_WGSL.into()),
        });

        // group 0: per-frame globals
        let globals_buf = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("globals"),
            size: std::mem::size_of::<Globals>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let globals_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let globals_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bg"),
            layout: &globals_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buf.as_entire_binding(),
            }],
        });

        // group 1: one slot per draw, selected with a dynamic offset
        let draw_size = std::mem::size_of::<DrawUniforms>();
        let align = device.limits().min_uniform_buffer_offset_alignment as usize;
        let draw_stride = draw_size.div_ceil(align) * align;
        let draw_buf = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("draw_uniforms"),
            size: (draw_stride * DRAW_SLOTS) as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let draw_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("draw_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: true,
                    min_binding_size: NonZeroU64::new(draw_size as u64),
                },
                count: None,
            }],
        });
        let draw_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("draw_bg"),
            layout: &draw_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &draw_buf,
                    offset: 0,
                    size: NonZeroU64::new(draw_size as u64),
                }),
            }],
        });

        // group 2: text coverage texture
        let text_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("text_bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });
        let text_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("text_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let mesh_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("mesh_pl"),
            bind_group_layouts: &[&globals_bgl, &draw_bgl],
            push_constant_ranges: &[],
        });
        let text_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("text_pl"),
            bind_group_layouts: &[&globals_bgl, &draw_bgl, &text_bgl],
            push_constant_ranges: &[],
        });
        let pipeline = |layout: &wgpu::PipelineLayout, spec: PipelineSpec<'_>| {
            make_scene_pipeline(&device, layout, &shader, view_format, DEPTH_FORMAT, spec)
        };
        let shadow_pipeline = pipeline(
            &mesh_layout,
            PipelineSpec {
                label: "shadow_pipeline",
                frag_entry: "fs_shadow",
                topology: wgpu::PrimitiveTopology::TriangleList,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                depth_write: false,
            },
        );
        let lit_pipeline = pipeline(
            &mesh_layout,
            PipelineSpec {
                label: "lit_pipeline",
                frag_entry: "fs_lit",
                topology: wgpu::PrimitiveTopology::TriangleList,
                blend: None,
                depth_write: true,
            },
        );
        let edge_pipeline = pipeline(
            &mesh_layout,
            PipelineSpec {
                label: "edge_pipeline",
                frag_entry: "fs_flat",
                topology: wgpu::PrimitiveTopology::LineList,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                depth_write: false,
            },
        );
        let text_pipeline = pipeline(
            &text_layout,
            PipelineSpec {
                label: "text_pipeline",
                frag_entry: "fs_text",
                topology: wgpu::PrimitiveTopology::TriangleList,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                depth_write: false,
            },
        );

        let belt_cpu = belt_mesh(dims);
        let slab = GpuMesh::upload(&device, "slab", &unit_box());
        let belt = GpuMesh::upload(&device, "belt", &belt_cpu);
        let ground = GpuMesh::upload(&device, "ground", &ground_quad());
        let text_quad = GpuMesh::upload(&device, "text_quad", &top_left_quad());

        Ok(Self {
            surface,
            device,
            queue,
            config,
            view_format,
            width,
            height,
            depth,
            clear,
            globals_buf,
            globals_bg,
            draw_buf,
            draw_bg,
            draw_stride,
            draw_staging: vec![0u8; draw_stride * DRAW_SLOTS],
            text_bgl,
            text_sampler,
            shadow_pipeline,
            lit_pipeline,
            edge_pipeline,
            text_pipeline,
            slab,
            belt,
            ground,
            text_quad,
            belt_cpu,
            edges: FnvHashMap::default(),
            texts: [None, None],
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.reconfigure();
        }
    }

    /// Re-apply the surface configuration, e.g. after the surface was lost.
    pub fn reconfigure(&mut self) {
        self.config.width = self.width;
        self.config.height = self.height;
        self.surface.configure(&self.device, &self.config);
        self.depth.recreate(&self.device, self.width, self.height);
        log::debug!("[gpu] surface {}x{}", self.width, self.height);
    }

    pub fn text_key(&self, side: TextSide) -> Option<u64> {
        self.texts[text_index(side)].as_ref().map(|s| s.key)
    }

    pub fn upload_text(&mut self, side: TextSide, bitmap: &TextBitmap) {
        let (tex, view) = helpers::create_text_texture(&self.device, bitmap.width, bitmap.height);
        self.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &tex,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &bitmap.pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * bitmap.width),
                rows_per_image: Some(bitmap.height),
            },
            wgpu::Extent3d {
                width: bitmap.width,
                height: bitmap.height,
                depth_or_array_layers: 1,
            },
        );
        let bind_group = self.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("text_bg"),
            layout: &self.text_bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&self.text_sampler),
                },
            ],
        });
        self.texts[text_index(side)] = Some(TextSlot {
            key: bitmap.key,
            texture: Some(TextTexture {
                _tex: tex,
                bind_group,
                block_w: bitmap.block_w,
                block_h: bitmap.block_h,
            }),
        });
    }

    /// Record that `side` currently has nothing to draw.
    pub fn clear_text(&mut self, side: TextSide, key: u64) {
        self.texts[text_index(side)] = Some(TextSlot { key, texture: None });
    }

    fn ensure_edges(&mut self, threshold_deg: f32) -> u32 {
        let key = threshold_deg.to_bits();
        if !self.edges.contains_key(&key) {
            let slab = GpuMesh::upload(
                &self.device,
                "slab_edges",
                &outline_edges(&unit_box(), threshold_deg),
            );
            let belt = GpuMesh::upload(
                &self.device,
                "belt_edges",
                &outline_edges(&self.belt_cpu, threshold_deg),
            );
            self.edges.insert(key, EdgeMeshes { slab, belt });
        }
        key
    }

    fn write_globals(&self, camera: &Camera) {
        let headlight = (camera.eye - camera.target).normalize_or_zero();
        let globals = Globals {
            view_proj: camera.view_proj().to_cols_array_2d(),
            eye: camera.eye.extend(1.0).to_array(),
            light: headlight.extend(HEADLIGHT_INTENSITY).to_array(),
            ambient: Vec3::splat(AMBIENT_INTENSITY).extend(1.0).to_array(),
        };
        self.queue
            .write_buffer(&self.globals_buf, 0, bytemuck::bytes_of(&globals));
    }

    /// Fill the per-draw slots and return the draw list in submission order:
    /// shadow, opaque paper, outlines, then foil text.
    fn build_draws(&mut self, scene: &SceneFrame) -> Vec<DrawCmd> {
        let mut uniforms: Vec<DrawUniforms> = Vec::with_capacity(DRAW_SLOTS);
        let mut cmds: Vec<DrawCmd> = Vec::with_capacity(DRAW_SLOTS);
        let mut push = |pipe: Pipe, mesh: MeshRef, u: DrawUniforms, text: Option<TextSide>| {
            if uniforms.len() >= DRAW_SLOTS {
                log::warn!("[gpu] draw slots exhausted; dropping draw");
                return;
            }
            cmds.push(DrawCmd {
                pipe,
                mesh,
                slot: uniforms.len(),
                text,
            });
            uniforms.push(u);
        };

        let shadow = DrawUniforms::new(
            scene.shadow.model,
            Rgb::BLACK,
            scene.shadow.opacity,
            [0.0, 0.0, SHADOW_BLUR, 0.0],
        );
        push(Pipe::Shadow, MeshRef::Ground, shadow, None);

        for p in &scene.panels {
            let mesh = match p.shape {
                PanelShape::Slab { .. } => MeshRef::Slab,
                PanelShape::BeltCap => MeshRef::Belt,
            };
            push(Pipe::Lit, mesh, DrawUniforms::lit(p.model, &p.material), None);
        }

        let style = scene.edges;
        for p in &scene.panels {
            let (mesh, model) = match p.shape {
                PanelShape::Slab { .. } => (
                    MeshRef::SlabEdges,
                    p.world * Mat4::from_scale(p.shape.scale() + Vec3::splat(EDGE_INFLATE)),
                ),
                PanelShape::BeltCap => (MeshRef::BeltEdges, p.model),
            };
            push(
                Pipe::Edges,
                mesh,
                DrawUniforms::flat(model, style.color, style.opacity),
                None,
            );
        }

        for t in &scene.texts {
            let Some(tex) = self.texts[text_index(t.side)]
                .as_ref()
                .and_then(|s| s.texture.as_ref())
            else {
                continue;
            };
            let model = t.block_world(tex.block_w, tex.block_h);
            push(
                Pipe::Text,
                MeshRef::TextQuad,
                DrawUniforms::lit(model, &t.material),
                Some(t.side),
            );
        }

        for (i, u) in uniforms.iter().enumerate() {
            let at = i * self.draw_stride;
            self.draw_staging[at..at + std::mem::size_of::<DrawUniforms>()]
                .copy_from_slice(bytemuck::bytes_of(u));
        }
        let used = uniforms.len() * self.draw_stride;
        self.queue
            .write_buffer(&self.draw_buf, 0, &self.draw_staging[..used]);
        cmds
    }

    pub fn render(&mut self, scene: &SceneFrame, camera: &Camera) -> Result<(), wgpu::SurfaceError> {
        let edge_key = self.ensure_edges(scene.edges.threshold_deg);
        self.write_globals(camera);
        let cmds = self.build_draws(scene);

        let frame = self.surface.get_current_texture()?;
        let view = frame.texture.create_view(&wgpu::TextureViewDescriptor {
            format: Some(self.view_format),
            ..Default::default()
        });
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.globals_bg, &[]);

            let edges = self.edges.get(&edge_key);
            let mut current: Option<Pipe> = None;
            for cmd in &cmds {
                if current != Some(cmd.pipe) {
                    rpass.set_pipeline(match cmd.pipe {
                        Pipe::Shadow => &self.shadow_pipeline,
                        Pipe::Lit => &self.lit_pipeline,
                        Pipe::Edges => &self.edge_pipeline,
                        Pipe::Text => &self.text_pipeline,
                    });
                    current = Some(cmd.pipe);
                }
                let offset = (cmd.slot * self.draw_stride) as u32;
                rpass.set_bind_group(1, &self.draw_bg, &[offset]);
                if let Some(side) = cmd.text {
                    match self.texts[text_index(side)]
                        .as_ref()
                        .and_then(|s| s.texture.as_ref())
                    {
                        Some(t) => rpass.set_bind_group(2, &t.bind_group, &[]),
                        None => continue,
                    }
                }
                let mesh = match cmd.mesh {
                    MeshRef::Ground => Some(&self.ground),
                    MeshRef::Slab => Some(&self.slab),
                    MeshRef::Belt => Some(&self.belt),
                    MeshRef::SlabEdges => edges.map(|e| &e.slab),
                    MeshRef::BeltEdges => edges.map(|e| &e.belt),
                    MeshRef::TextQuad => Some(&self.text_quad),
                };
                if let Some(mesh) = mesh {
                    mesh.draw(&mut rpass);
                }
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
