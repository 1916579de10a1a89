// What you SEE:
// • A window showing "click" on black.
// • Release the left mouse button: a new number from 1 to 100 appears and its
//   color (red → yellow → green) grows out of the click point as a circle,
//   led by a darker ring. Clicks during the 500 ms wipe are ignored.
// • ESC or closing the window quits.

mod clock;
mod compositor;
mod draw;
mod error;
mod palette;
mod render;
mod state;
mod types;

use clock::Clock;
use draw::Drawer;
use error::Error;
use state::TransitionState;
use types::{FrameBuffer, Size};

const TITLE: &str = "Paul's randomizer";
const WINDOW_SIZE: Size = Size { width: 300, height: 200 };
const TARGET_FPS: usize = 60;

fn main() -> Result<(), Error> {
    env_logger::init();

    let result = run();
    match &result {
        Ok(()) => log::info!("window closed"),
        Err(e) => log::error!("{e}"),
    }
    result
}

fn run() -> Result<(), Error> {
    /* --- Window setup ---
       Visual: window opens (blank until the first present). */
    let mut drawer = Drawer::new(TITLE, WINDOW_SIZE, TARGET_FPS)?;
    let mut screen = FrameBuffer::new(drawer.size());
    log::info!("window open at {}x{}", screen.width, screen.height);

    let clock = Clock::new();
    let mut rng = rand::thread_rng();
    let mut state = TransitionState::new();

    // Paint once before waiting for input.
    let mut dirty = true;

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        let now = clock.now();

        /* 1) Inputs: at most one release per frame. */
        if let Some(pos) = drawer.poll_release() {
            dirty |= state.accept_click(pos, now, &mut rng);
        }

        /* 2) Follow window resizes. */
        let size = drawer.size();
        if screen.resize(size) {
            log::info!("resized to {}x{}", size.width, size.height);
            dirty = true;
        }

        /* 3) Repaint only when something changed or a wipe is running.
           Visual: otherwise the last frame stays up and we just poll input. */
        if dirty {
            let composition = compositor::layers_for(&state, now, size);
            render::render(&mut screen, &composition);
            dirty = composition.needs_more_frames;
            drawer.present(&screen)?;
        } else {
            drawer.idle();
        }
    }

    Ok(())
}
