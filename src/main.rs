use std::io;
use std::thread;
use std::time::Duration;
use std::time::Instant;

use anyhow::Context;
use crossterm::event;
use crossterm::terminal;
use tracing::info;
use tracing::warn;

use lifeboard::app::App;
use lifeboard::camera::Camera;
use lifeboard::events::AppEvent;
use lifeboard::events::Event;
use lifeboard::events::FrameInput;
use lifeboard::io::TerminalSession;
use lifeboard::io::convert_event;
use lifeboard::layout::Layout;

const FRAMERATE: u32 = 60;
const FRAMETIME: Duration = Duration::from_nanos(1_000_000_000 / FRAMERATE as u64);

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .with_ansi(false)
        .try_init();
}

fn warn_if_clipped(cam: &Camera, layout: &Layout) {
    if !cam.fits(layout) {
        let (cols, rows) = Camera::required(layout);
        warn!(
            cols = cam.width(),
            rows = cam.height(),
            need_cols = cols,
            need_rows = rows,
            "terminal too small, the grid is clipped"
        );
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let mut app = App::new(Layout::DEFAULT);

    let (cols, rows) = terminal::size().context("Failed to read terminal size")?;
    let mut cam = Camera::new(cols, rows);
    warn_if_clipped(&cam, app.layout());

    let mut session = TerminalSession::enter(io::BufWriter::new(io::stdout()))
        .context("Failed to set up terminal")?;
    let mut input = FrameInput::default();

    let layout = *app.layout();
    info!(cols = layout.cols(), rows = layout.rows(), "simulation started");

    'main: loop {
        let t = Instant::now();

        input = input.next_frame();

        // Drain whatever arrived since the last frame without blocking
        while event::poll(Duration::ZERO).context("Failed to poll events")? {
            let event = event::read().context("Failed to read event")?;

            match convert_event(event) {
                None => {}
                Some(Event::AppEvent(AppEvent::Exit)) => break 'main,
                Some(Event::AppEvent(AppEvent::Resize { cols, rows })) => {
                    cam.resize(cols, rows);
                    warn_if_clipped(&cam, &layout);
                }
                Some(Event::PointerEvent(pointer)) => input.apply(pointer),
            }
        }

        app.frame(&input, &mut cam);
        cam.render(session.out()).context("Failed to draw frame")?;

        thread::sleep(FRAMETIME.saturating_sub(t.elapsed()));
    }

    info!(generation = app.world().generation(), "window closed");

    Ok(())
}
