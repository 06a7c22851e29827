use std::{
    rc::Rc,
    time::{Duration, Instant},
};

use anyhow::Result;
use glium::backend::glutin::SimpleWindowBuilder;
use simplelog::TermLogger;
use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
};

pub struct Window {
    pub winit: winit::window::Window,
    pub display: glium::Display<glium::glutin::surface::WindowSurface>,
}

pub trait AppBehaviour {
    /// Returns false when the application should exit.
    fn process_events(&mut self, event: Event<()>) -> bool;
    fn update(&mut self, delta_time: Duration);
    fn render(&mut self, frame: &mut glium::Frame);
}

pub struct App {
    pub window: Rc<Window>,
    pub event_loop: EventLoop<()>,
}

impl App {
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self> {
        TermLogger::init(
            simplelog::LevelFilter::Debug,
            simplelog::Config::default(),
            simplelog::TerminalMode::Mixed,
            simplelog::ColorChoice::Auto,
        )?;

        log::debug!("Creating window and event loop");
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let (winit, display) = SimpleWindowBuilder::new()
            .with_title(title)
            .with_inner_size(width, height)
            .build(&event_loop);

        Ok(Self {
            window: Rc::new(Window { winit, display }),
            event_loop,
        })
    }

    pub fn run<B: AppBehaviour>(self, mut behaviour: B) -> Result<()> {
        let App { window, event_loop } = self;

        let mut last_frame = Instant::now();
        let mut delta_time = Duration::ZERO;

        event_loop.run(move |event, elwt| match event {
            Event::NewEvents(_) => {
                let now = Instant::now();
                delta_time = now - last_frame;
                last_frame = now;
            }
            Event::AboutToWait => {
                behaviour.update(delta_time);

                let mut frame = window.display.draw();
                behaviour.render(&mut frame);
                frame.finish().expect("to swap buffers");
            }
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => elwt.exit(),
            event => {
                if let Event::WindowEvent {
                    event: WindowEvent::Resized(new_size),
                    ..
                } = &event
                {
                    window.display.resize((*new_size).into());
                }

                if !behaviour.process_events(event) {
                    elwt.exit();
                }
            }
        })?;

        Ok(())
    }
}
