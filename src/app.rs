use tracing::debug;
use tracing::info;

use crate::Pixel;
use crate::button::Button;
use crate::button::Face;
use crate::button::LatchKind;
use crate::events::FrameInput;
use crate::input::InputMapper;
use crate::layout::Layout;
use crate::layout::Rect;
use crate::render;
use crate::render::Canvas;
use crate::render::Color;
use crate::world::World;

const BUTTON_WIDTH: Pixel = 100;
const BUTTON_HEIGHT: Pixel = 60;
const BUTTON_MARGIN: Pixel = 20;

/// The whole simulation: the world and the two controls above it.
pub struct App {
    layout: Layout,
    mapper: InputMapper,
    world: World,

    /// Runs and pauses the simulation
    play: Button,

    /// Empties the grid
    clear: Button,
}

impl App {
    pub fn new(layout: Layout) -> Self {
        let play = Button::new(
            Rect::new(BUTTON_MARGIN, BUTTON_MARGIN, BUTTON_WIDTH, BUTTON_HEIGHT),
            LatchKind::Toggle,
            Face::new("paused", Color::Red),
            Face::new("playing", Color::Green),
        );

        let clear = Button::new(
            Rect::new(
                layout.width() - BUTTON_WIDTH - BUTTON_MARGIN,
                BUTTON_MARGIN,
                BUTTON_WIDTH,
                BUTTON_HEIGHT,
            ),
            LatchKind::flash(),
            Face::new("clear", Color::Green),
            Face::new("cleared!", Color::Red),
        );

        Self {
            layout,
            mapper: InputMapper::new(layout),
            world: World::new(layout.cols(), layout.rows()),
            play,
            clear,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn play_button(&self) -> &Button {
        &self.play
    }

    pub fn clear_button(&self) -> &Button {
        &self.clear
    }

    /// Whether the simulation advances at the end of frames
    pub fn is_playing(&self) -> bool {
        self.play.pressed()
    }

    /// Toggle whatever cell was clicked, then update both buttons.
    pub fn handle_input(&mut self, input: &FrameInput) {
        if let Some((x, y)) = self
            .mapper
            .toggle_target(input.pointer, input.primary_pressed)
        {
            self.world.grid_mut().toggle(x, y);
            debug!(x, y, alive = self.world.grid().is_alive(x, y), "toggled cell");
        }

        let was_playing = self.play.pressed();

        self.play
            .update(input.primary_pressed && self.play.contains(input.pointer));
        self.clear
            .update(input.primary_pressed && self.clear.contains(input.pointer));

        if self.play.pressed() != was_playing {
            info!(playing = self.play.pressed(), "play toggled");
        }
    }

    pub fn draw<C: Canvas>(&self, canvas: &mut C) {
        render::draw_background(canvas, &self.layout);
        render::draw_button(canvas, &self.play);
        render::draw_button(canvas, &self.clear);
        render::draw_status(canvas, &self.world, &self.layout);
        render::draw_cells(canvas, &self.world, &self.layout);
    }

    /// Act on the buttons. A clear on the same frame as an advance wins.
    pub fn step(&mut self) {
        if self.play.pressed() {
            self.world.next();
        }

        if self.clear.pressed() {
            self.world.clear();
        }
    }

    /// One full frame: input, then drawing, then the simulation.
    pub fn frame<C: Canvas>(&mut self, input: &FrameInput, canvas: &mut C) {
        self.handle_input(input);
        self.draw(canvas);
        self.step();
    }
}
