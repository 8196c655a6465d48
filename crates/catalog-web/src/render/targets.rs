use super::helpers;

/// Depth attachment sized to the surface.
pub(crate) struct DepthTarget {
    _tex: wgpu::Texture,
    pub(crate) view: wgpu::TextureView,
    format: wgpu::TextureFormat,
}

impl DepthTarget {
    pub(crate) fn new(
        device: &wgpu::Device,
        width: u32,
        height: u32,
        format: wgpu::TextureFormat,
    ) -> Self {
        let (_tex, view) = helpers::create_depth_texture(device, "depth_tex", width, height, format);
        Self { _tex, view, format }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        (self._tex, self.view) =
            helpers::create_depth_texture(device, "depth_tex", width, height, self.format);
    }
}
