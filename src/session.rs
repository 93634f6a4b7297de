//! Interactive brightness adjustment over an open backlight.

use std::io::{self, stdout, Write};

use lg_ultrafine::consts::{MAX_BRIGHTNESS, MIN_BRIGHTNESS};
use lg_ultrafine::steps::{BIG_STEPS, SMALL_STEPS};
use lg_ultrafine::Backlight;

use crate::keys::{self, KeyAction, RawModeGuard};

/// Brightness as an integer percentage of the register range.
pub fn percent(val: u16) -> u16 {
    (val as f32 / MAX_BRIGHTNESS as f32 * 100.0).round() as u16
}

/// Register value a key action moves to from `current`, or `None` for quit.
fn target_for(action: KeyAction, current: u16) -> Option<u16> {
    match action {
        KeyAction::CoarseUp => Some(BIG_STEPS.next(current)),
        KeyAction::CoarseDown => Some(BIG_STEPS.prev(current)),
        KeyAction::FineUp => Some(SMALL_STEPS.next(current)),
        KeyAction::FineDown => Some(SMALL_STEPS.prev(current)),
        KeyAction::Max => Some(MAX_BRIGHTNESS),
        KeyAction::Min => Some(MIN_BRIGHTNESS),
        KeyAction::Quit => None,
    }
}

/// Write the value an action asks for, committing it in memory only once the
/// device took it. A failed write is reported and leaves the previous value.
fn apply(monitor: &mut dyn Backlight, brightness: &mut u16, action: KeyAction) {
    let Some(next) = target_for(action, *brightness) else {
        return;
    };
    match monitor.set_brightness(next) {
        Ok(()) => *brightness = next,
        Err(e) => eprint!("\r\nunable to set brightness: {e}\r\n"),
    }
}

/// Run the interactive loop until the user quits.
pub fn run(monitor: &mut dyn Backlight) -> io::Result<()> {
    let mut brightness = monitor.brightness().unwrap_or_else(|e| {
        eprintln!("unable to read brightness: {e}");
        0
    });

    println!("controls:");
    println!("  + / -    coarse adjust");
    println!("  ] / [    fine adjust");
    println!("  \\        maximum brightness");
    println!("  p        minimum brightness");
    println!("  q        quit");

    let guard = RawModeGuard::enable()?;
    loop {
        print!("\rcurrent brightness: {:3}% ", percent(brightness));
        stdout().flush()?;
        let Some(action) = keys::read_action()? else {
            continue;
        };
        if action == KeyAction::Quit {
            break;
        }
        apply(monitor, &mut brightness, action);
    }
    drop(guard);
    println!();

    Ok(())
}
