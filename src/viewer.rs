//! Puts a decoded plot on screen and waits for the user to close it.

use anyhow::Result;
use image::{DynamicImage, GenericImageView};
use show_image::{create_window, event, WindowOptions};
use tracing::info;

pub const WINDOW_TITLE: &str = "Generated Plot";

/// Show the plot in its own window, sized to the image. Returns once the
/// window is closed or Escape is pressed.
pub fn display(image: DynamicImage) -> Result<()> {
    let (width, height) = image.dimensions();
    info!("displaying {width}x{height} plot");

    let options = WindowOptions::new().set_size([width, height]);
    let window = create_window(WINDOW_TITLE, options)?;
    window.set_image("plot", image)?;

    // The channel disconnects when the window is destroyed, which ends the
    // loop on a plain window close as well.
    for event in window.event_channel()? {
        match event {
            event::WindowEvent::CloseRequested(_) => break,
            event::WindowEvent::KeyboardInput(event) => {
                if event.input.key_code == Some(event::VirtualKeyCode::Escape)
                    && event.input.state.is_pressed()
                {
                    break;
                }
            }
            _ => {}
        }
    }

    Ok(())
}
