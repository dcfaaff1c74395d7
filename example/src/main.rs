//! Types a script of key names read from stdin and prints the result.
//!
//! Tokens are separated by whitespace: key slots (`Q`, `1`, `Oem1`),
//! modifiers (`shift`, `caps`, `altgr`), `space`, `tab`, `enter`, `bksp`,
//! and `layout=<Name>` to switch layouts. For example:
//!
//! ```text
//! echo "shift H I space layout=German Y" | cargo run
//! ```

use ::clap::Parser;
use ::std::{
    cell::RefCell,
    io::{self, Read},
    process::ExitCode,
    rc::Rc,
};
use ::tracing::{error, info};
use ::tracing_subscriber::{fmt, prelude::*, EnvFilter};
use ::vkbd::{
    inject::TextBuffer,
    input::keyboard::{Builder, KeyEvent},
    layout::Locale,
    settings::KeyboardSettings,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Initial keyboard layout
    #[arg(short, long, default_value = "English")]
    layout: String,

    /// Insert right-to-left text left-to-right
    #[arg(long)]
    force_ltr: bool,

    /// Seconds before Shift-Lock and AltGr release themselves
    #[arg(long, default_value_t = 10, value_parser = ::clap::value_parser!(u64).range(1..))]
    timeout: u64,
}

fn read_script(mut input: impl Read) -> io::Result<String> {
    let mut script = String::new();
    input.read_to_string(&mut script)?;
    Ok(script)
}

fn run(cli: &Cli, script: &str) -> ::vkbd::errors::Result<String> {
    let settings = KeyboardSettings {
        layout: Locale::from_name(&cli.layout)?,
        force_left_to_right: cli.force_ltr,
        modifier_timeout_secs: cli.timeout,
        ..Default::default()
    };

    let buffer = Rc::new(RefCell::new(TextBuffer::new()));
    let mut keyboard = Builder::from_settings(&settings).build();
    keyboard.bind_target(buffer.clone());
    keyboard.set_injection_listener(|evt| info!(?evt, "Key typed"));

    for token in script.split_whitespace() {
        if let Some(name) = token.strip_prefix("layout=") {
            keyboard.switch_layout(Locale::from_name(name)?);
            continue;
        }
        keyboard.process_evt(token.parse::<KeyEvent>()?)?;
    }

    let text = buffer.borrow().text().to_owned();
    Ok(text)
}

pub fn main() -> ExitCode {
    ::tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let script = match read_script(io::stdin()) {
        Ok(script) => script,
        Err(err) => {
            error!("Failed to read stdin: {err}");
            return ExitCode::FAILURE;
        }
    };

    match run(&cli, &script) {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
