use std::{
    io::Write as _,
    path::{Path, PathBuf},
    process::ExitCode,
    time::Duration,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use signin::{Field, RecordingNotifier, ScreenConfig, SigninScreen, Viewport};

#[derive(Parser, Debug)]
#[command(name = "signin", version)]
struct Cli {
    /// Log to stderr (repeat for more detail).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fill the four fields, submit once, and print the acknowledgement.
    Submit(SubmitArgs),
    /// Run the background motions headless and print one JSON sample per frame.
    Frames(FramesArgs),
}

#[derive(Parser, Debug)]
struct SubmitArgs {
    #[arg(long, default_value = "")]
    username: String,

    #[arg(long, default_value = "")]
    password: String,

    /// Name or email address.
    #[arg(long, default_value = "")]
    email: String,

    #[arg(long, default_value = "")]
    age: String,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    /// Viewport width.
    #[arg(long, default_value_t = 390.0)]
    width: f64,

    /// Viewport height.
    #[arg(long, default_value_t = 844.0)]
    height: f64,

    /// Frames per second of the simulated clock.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Number of frames to emit (the first line is the state at mount).
    #[arg(long, default_value_t = 240)]
    count: u64,

    /// Screen config JSON; defaults are used for missing keys.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Submit(args) => cmd_submit(args),
        Command::Frames(args) => cmd_frames(args).map(|()| ExitCode::SUCCESS),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_config(path: Option<&Path>) -> anyhow::Result<ScreenConfig> {
    let Some(path) = path else {
        return Ok(ScreenConfig::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("read config '{}'", path.display()))?;
    ScreenConfig::from_json_str(&json).with_context(|| format!("parse config '{}'", path.display()))
}

fn cmd_submit(args: SubmitArgs) -> anyhow::Result<ExitCode> {
    let mut screen = SigninScreen::mount(Viewport::new(390.0, 844.0)?, ScreenConfig::default())?;
    screen.set_field(Field::Username, args.username);
    screen.set_field(Field::Password, args.password);
    screen.set_field(Field::NameOrEmail, args.email);
    screen.set_field(Field::Age, args.age);

    let mut notifier = RecordingNotifier::new();
    let result = screen.submit(&mut notifier);
    screen.unmount();

    let shown = notifier
        .last()
        .context("submit produced no notification")?;
    println!("{}\n\n{}", shown.title, shown.message);

    Ok(if result.is_accepted() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.fps > 0, "--fps must be > 0");
    let config = read_config(args.config.as_deref())?;
    let viewport = Viewport::new(args.width, args.height)?;
    let mut screen = SigninScreen::mount(viewport, config)?;
    let dt = Duration::from_secs(1) / args.fps;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for i in 0..args.count {
        let sample = if i == 0 {
            screen.sample()
        } else {
            screen.frame(dt)
        };
        let Some(sample) = sample else {
            break;
        };
        serde_json::to_writer(&mut out, &sample).context("serialize frame sample")?;
        writeln!(out).context("write frame sample")?;
    }
    screen.unmount();
    Ok(())
}
