//! SDL2 window shell.
//!
//! Translates SDL events into [`WindowEvent`]s and blits a surface view to
//! the screen. Everything here is presentation; no rendering happens in
//! this module.

use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::{Point, Rect};

use crate::config::FRAME_TARGET_TIME;
use crate::render::SurfaceView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    Quit,
    Resize(u32, u32),
    ToggleVertices,
    ToggleDepthShading,
    Snapshot,
}

pub struct FrameLimiter {
    previous_frame_time: u64,
}

impl FrameLimiter {
    pub fn new(window: &Window) -> Self {
        Self {
            previous_frame_time: window.timer().ticks64(),
        }
    }

    /// Waits if necessary to maintain frame rate and returns the delta time in milliseconds.
    pub fn wait_and_get_delta(&mut self, window: &Window) -> u64 {
        let mut current_time = window.timer().ticks64();
        let mut delta_time = current_time.saturating_sub(self.previous_frame_time);

        let wait = time_to_wait(delta_time);
        if wait > 0 {
            std::thread::sleep(std::time::Duration::from_millis(wait));
            current_time = window.timer().ticks64();
            delta_time = current_time.saturating_sub(self.previous_frame_time);
        }

        self.previous_frame_time = current_time;
        delta_time
    }
}

/// Milliseconds left to sleep after a frame that took `elapsed` ms.
fn time_to_wait(elapsed: u64) -> u64 {
    (FRAME_TARGET_TIME as u64).saturating_sub(elapsed)
}

pub struct Window {
    canvas: sdl2::render::Canvas<sdl2::video::Window>,
    // Declared before `texture_creator` so it is dropped first.
    texture: sdl2::render::Texture<'static>,
    texture_creator: Box<sdl2::render::TextureCreator<sdl2::video::WindowContext>>,
    event_pump: sdl2::EventPump,
    timer_subsystem: sdl2::TimerSubsystem,
    width: u32,
    height: u32,
}

impl Window {
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self, String> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;
        let timer_subsystem = sdl_context.timer()?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .resizable()
            .build()
            .map_err(|e| e.to_string())?;

        let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
        let texture_creator = Box::new(canvas.texture_creator());
        let event_pump = sdl_context.event_pump()?;
        let texture = Self::create_texture(&texture_creator, width, height)?;

        Ok(Self {
            canvas,
            texture,
            texture_creator,
            event_pump,
            timer_subsystem,
            width,
            height,
        })
    }

    fn create_texture(
        texture_creator: &sdl2::render::TextureCreator<sdl2::video::WindowContext>,
        width: u32,
        height: u32,
    ) -> Result<sdl2::render::Texture<'static>, String> {
        // SAFETY: the creator is heap-allocated and owned by the Window next
        // to the texture, which is declared first and therefore dropped
        // first. The 'static lifetime never escapes the Window.
        let texture_creator: &'static sdl2::render::TextureCreator<sdl2::video::WindowContext> =
            unsafe { &*(texture_creator as *const _) };
        // SDL rejects zero-sized textures; a minimized window keeps a 1x1 one.
        texture_creator
            .create_texture_streaming(PixelFormatEnum::ARGB8888, width.max(1), height.max(1))
            .map_err(|e| e.to_string())
    }

    /// Drains every pending SDL event.
    pub fn poll_events(&mut self) -> Vec<WindowEvent> {
        let mut events = Vec::new();
        for event in self.event_pump.poll_iter() {
            let translated = match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => Some(WindowEvent::Quit),
                Event::KeyDown {
                    keycode: Some(Keycode::V),
                    repeat: false,
                    ..
                } => Some(WindowEvent::ToggleVertices),
                Event::KeyDown {
                    keycode: Some(Keycode::D),
                    repeat: false,
                    ..
                } => Some(WindowEvent::ToggleDepthShading),
                Event::KeyDown {
                    keycode: Some(Keycode::F12),
                    repeat: false,
                    ..
                } => Some(WindowEvent::Snapshot),
                Event::Window {
                    win_event: sdl2::event::WindowEvent::Resized(w, h),
                    ..
                } => Some(WindowEvent::Resize(w.max(0) as u32, h.max(0) as u32)),
                _ => None,
            };
            events.extend(translated);
        }
        events
    }

    pub fn present(&mut self, view: &SurfaceView) -> Result<(), String> {
        self.canvas.clear();
        if view.width > 0 && view.height > 0 {
            let rect = Rect::new(0, 0, view.width, view.height);
            self.texture
                .update(rect, view.bytes, view.pitch)
                .map_err(|e| e.to_string())?;
            // Surface row 0 is the bottom of the picture.
            self.canvas
                .copy_ex(&self.texture, rect, rect, 0.0, None::<Point>, false, true)?;
        }
        self.canvas.present();
        Ok(())
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), String> {
        self.texture = Self::create_texture(&self.texture_creator, width, height)?;
        self.width = width;
        self.height = height;
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn timer(&self) -> &sdl2::TimerSubsystem {
        &self.timer_subsystem
    }
}
