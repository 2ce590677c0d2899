mod input;

pub use input::InputState;

use sdl2::pixels::PixelFormatEnum;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use sdl2::EventPump;

use softblit::{Bitmap, EngineConfig, Error, Result};

pub struct Display {
    canvas: Canvas<Window>,
    event_pump: EventPump,
    width: u32,
    height: u32,
}

/// Streaming texture the frame buffer is uploaded into each frame
pub struct RenderTarget<'a> {
    texture: Texture<'a>,
    width: u32,
    height: u32,
}

impl Display {
    /// Open a window of `width * scale_x` by `height * scale_y` screen pixels
    pub fn new(config: &EngineConfig) -> Result<(Self, TextureCreator<WindowContext>)> {
        let sdl_context = sdl2::init().map_err(Error::display)?;
        let video_subsystem = sdl_context.video().map_err(Error::display)?;

        let (window_w, window_h) = config.window_size();
        let window = video_subsystem
            .window(&config.title, window_w, window_h)
            .position_centered()
            .build()
            .map_err(|e| Error::display(e.to_string()))?;

        let mut canvas_builder = window.into_canvas().accelerated();
        if config.vsync {
            canvas_builder = canvas_builder.present_vsync();
        }
        let canvas = canvas_builder
            .build()
            .map_err(|e| Error::display(e.to_string()))?;

        let texture_creator = canvas.texture_creator();
        let event_pump = sdl_context.event_pump().map_err(Error::display)?;

        tracing::info!(
            width = config.width,
            height = config.height,
            window_w,
            window_h,
            vsync = config.vsync,
            "display opened"
        );

        Ok((
            Self {
                canvas,
                event_pump,
                width: config.width,
                height: config.height,
            },
            texture_creator,
        ))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Upload `frame` and stretch it over the whole window
    pub fn present(&mut self, target: &mut RenderTarget, frame: &Bitmap) -> Result<()> {
        if (frame.width(), frame.height()) != (target.width, target.height) {
            return Err(Error::display(format!(
                "frame is {}x{}, render target is {}x{}",
                frame.width(),
                frame.height(),
                target.width,
                target.height
            )));
        }

        let pixels = frame.pixels();
        let row_bytes = frame.pitch();
        target
            .texture
            .with_lock(None, |buf, pitch| {
                for (dst, src) in buf
                    .chunks_mut(pitch)
                    .zip(pixels.chunks(frame.width() as usize))
                {
                    // RGBA8888 is a packed native-endian u32, same as Color
                    for (out, px) in dst[..row_bytes].chunks_exact_mut(4).zip(src) {
                        out.copy_from_slice(&px.to_ne_bytes());
                    }
                }
            })
            .map_err(Error::display)?;

        self.canvas
            .copy(&target.texture, None, None)
            .map_err(Error::display)?;
        self.canvas.present();
        Ok(())
    }

    /// Start a new input frame and feed it every pending event
    pub fn poll_input(&mut self, input: &mut InputState) {
        input.begin_frame();
        for event in self.event_pump.poll_iter() {
            input.handle(&event);
        }
    }
}

impl<'a> RenderTarget<'a> {
    pub fn new(
        texture_creator: &'a TextureCreator<WindowContext>,
        width: u32,
        height: u32,
    ) -> Result<Self> {
        let texture = texture_creator
            .create_texture_streaming(PixelFormatEnum::RGBA8888, width, height)
            .map_err(|e| Error::display(e.to_string()))?;
        Ok(Self {
            texture,
            width,
            height,
        })
    }
}
