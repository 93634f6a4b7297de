use std::process;

use bpaf::{Bpaf, Parser};
use lg_ultrafine::consts::{MAX_BRIGHTNESS, VENDOR_ID};
use lg_ultrafine::steps::SMALL_STEPS;
use lg_ultrafine::{UltraFine, UltrafineError};

mod keys;
mod session;

#[derive(Clone, Debug, Bpaf)]
#[bpaf(options, version, descr(env!("CARGO_PKG_DESCRIPTION")))]
struct Cli {
    #[bpaf(external(command))]
    command: Command,
}

#[derive(Clone, Debug)]
enum Command {
    /// Interactively adjust brightness from the keyboard (default).
    Adjust,
    /// List connected LG HID interfaces.
    List,
    /// Print the current brightness.
    Get,
    /// Set brightness to a percentage of the maximum.
    Set { percent: u8 },
}

fn command() -> impl Parser<Command> {
    let adjust = bpaf::pure(Command::Adjust)
        .to_options()
        .descr("Interactively adjust brightness from the keyboard")
        .command("adjust")
        .help("Interactively adjust brightness from the keyboard (default)");

    let list = bpaf::pure(Command::List)
        .to_options()
        .descr("List connected LG HID interfaces")
        .command("list")
        .help("List connected LG HID interfaces");

    let get = bpaf::pure(Command::Get)
        .to_options()
        .descr("Print the current brightness")
        .command("get")
        .help("Print the current brightness");

    let set = bpaf::positional::<u8>("PERCENT")
        .help("Target brightness, 0-100")
        .guard(|p| *p <= 100, "percent must be between 0 and 100")
        .map(|percent| Command::Set { percent })
        .to_options()
        .descr("Set brightness to a percentage of the maximum")
        .command("set")
        .help("Set brightness to a percentage of the maximum");

    bpaf::construct!([adjust, list, get, set]).fallback(Command::Adjust)
}

/// Open the backlight interface or terminate with the matching exit code.
fn open_or_exit() -> UltraFine {
    match UltraFine::open() {
        Ok(monitor) => monitor,
        Err(e) => {
            eprintln!("{e}");
            let code = match e {
                UltrafineError::Open(_) => 1,
                _ => -1,
            };
            process::exit(code);
        },
    }
}

fn list_devices() {
    let devices = match lg_ultrafine::enumerate() {
        Ok(devices) => devices,
        Err(e) => {
            eprintln!("{e}");
            process::exit(-1);
        },
    };
    if devices.is_empty() {
        println!("no LG hid interfaces found");
        return;
    }
    for d in &devices {
        println!(
            "{:04x}:{:04x}{}",
            VENDOR_ID,
            d.product_id,
            if d.is_backlight { "  (backlight)" } else { "" }
        );
        println!("  path:         {}", d.path);
        println!("  serial:       {}", d.serial_number);
        println!("  manufacturer: {}", d.manufacturer);
        println!("  product:      {}", d.product);
        println!("  release:      {:x}", d.release_number);
        println!("  interface:    {}", d.interface_number);
    }
}

fn main() {
    let cli = cli().run();
    match cli.command {
        Command::Adjust => {
            let mut monitor = open_or_exit();
            println!("connected to {}", monitor.product());
            if let Err(e) = session::run(&mut monitor) {
                eprintln!("{e}");
                process::exit(1);
            }
        },
        Command::List => list_devices(),
        Command::Get => {
            let monitor = open_or_exit();
            match monitor.brightness() {
                Ok(val) => println!("{}% ({val})", session::percent(val)),
                Err(e) => eprintln!("unable to read brightness: {e}"),
            }
        },
        Command::Set { percent } => {
            let monitor = open_or_exit();
            let raw = SMALL_STEPS.nearest((percent as u32 * MAX_BRIGHTNESS as u32 / 100) as u16);
            match monitor.set_brightness(raw) {
                Ok(()) => println!("set brightness to {}% ({raw})", session::percent(raw)),
                Err(e) => eprintln!("unable to set brightness: {e}"),
            }
        },
    }
}
