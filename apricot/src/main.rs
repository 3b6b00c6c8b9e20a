mod app;
mod core;
mod effect;
mod event;
mod ipc;
mod macos;
mod platform;

use anyhow::{anyhow, bail, Result};
use apricot_ipc::{Command, Direction, ModifierChoice, Response, SnapTarget};
use argh::FromArgs;
use ipc::IpcClient;
use tracing_subscriber::EnvFilter;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Apricot - keyboard window snapping for macOS
#[derive(FromArgs)]
struct Cli {
    #[argh(subcommand)]
    command: Option<SubCommand>,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum SubCommand {
    Start(StartCmd),
    Version(VersionCmd),
    Snap(SnapCmd),
    Press(PressCmd),
    GetSettings(GetSettingsCmd),
    SetModifiers(SetModifiersCmd),
    SetCorners(SetCornersCmd),
    ListBindings(ListBindingsCmd),
    GetState(GetStateCmd),
    GrantAccessibility(GrantAccessibilityCmd),
    OpenLoginItems(OpenLoginItemsCmd),
    Quit(QuitCmd),
}

/// Start the apricot daemon
#[derive(FromArgs)]
#[argh(subcommand, name = "start")]
struct StartCmd {}

/// Show version information
#[derive(FromArgs)]
#[argh(subcommand, name = "version")]
struct VersionCmd {}

/// Snap the focused window to a target without corner chaining
#[derive(FromArgs)]
#[argh(subcommand, name = "snap")]
struct SnapCmd {
    /// left, right, top, bottom, top-left, top-right, bottom-left,
    /// bottom-right, maximize or center70
    #[argh(positional)]
    target: String,
}

/// Simulate an arrow hotkey press (takes part in corner chaining)
#[derive(FromArgs)]
#[argh(subcommand, name = "press")]
struct PressCmd {
    /// left, right, up or down
    #[argh(positional)]
    direction: String,
}

/// Show current settings
#[derive(FromArgs)]
#[argh(subcommand, name = "get-settings")]
struct GetSettingsCmd {}

/// Change the modifier combo shared by every hotkey
#[derive(FromArgs)]
#[argh(subcommand, name = "set-modifiers")]
struct SetModifiersCmd {
    /// cmd-opt, cmd-ctrl, cmd-shift-opt or cmd-opt-ctrl
    #[argh(positional)]
    modifiers: String,
}

/// Enable or disable corner chaining
#[derive(FromArgs)]
#[argh(subcommand, name = "set-corners")]
struct SetCornersCmd {
    /// on or off
    #[argh(positional)]
    value: String,
}

/// List all hotkey bindings
#[derive(FromArgs)]
#[argh(subcommand, name = "list-bindings")]
struct ListBindingsCmd {}

/// Show daemon state
#[derive(FromArgs)]
#[argh(subcommand, name = "get-state")]
struct GetStateCmd {}

/// Ask macOS for Accessibility permission
#[derive(FromArgs)]
#[argh(subcommand, name = "grant-accessibility")]
struct GrantAccessibilityCmd {}

/// Open the Login Items settings pane
#[derive(FromArgs)]
#[argh(subcommand, name = "open-login-items")]
struct OpenLoginItemsCmd {}

/// Quit the apricot daemon
#[derive(FromArgs)]
#[argh(subcommand, name = "quit")]
struct QuitCmd {}

fn main() -> Result<()> {
    let cli: Cli = argh::from_env();

    match cli.command {
        None => {
            // No subcommand - show help (simulate --help)
            let args: Vec<&str> = vec!["apricot", "--help"];
            if let Err(e) = Cli::from_args(&args[..1], &args[1..]) {
                println!("{}", e.output);
            }
            Ok(())
        }
        Some(SubCommand::Start(_)) => {
            tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::from_default_env())
                .init();

            tracing::info!("apricot starting");
            app::App::run()
        }
        Some(SubCommand::Version(_)) => {
            println!("apricot {}", VERSION);
            Ok(())
        }
        Some(SubCommand::GrantAccessibility(_)) => {
            if macos::is_trusted_with_prompt() {
                println!("Accessibility permission granted");
            } else {
                println!("Accessibility permission requested; enable apricot in System Settings");
            }
            Ok(())
        }
        Some(SubCommand::OpenLoginItems(_)) => macos::open_login_items(),
        Some(subcmd) => run_cli(subcmd),
    }
}

fn run_cli(subcmd: SubCommand) -> Result<()> {
    let cmd = to_command(subcmd)?;
    let mut client = IpcClient::connect()?;
    let response = client.send(&cmd)?;

    match response {
        Response::Ok => {}
        Response::Error { message } => {
            eprintln!("Error: {}", message);
            std::process::exit(1);
        }
        Response::Snapped { target } => {
            println!("{}", target);
        }
        Response::Settings { settings } => {
            println!(
                "Modifiers: {} ({})",
                settings.modifiers,
                settings.modifiers.symbol()
            );
            println!(
                "Corners: {}",
                if settings.corners_enabled { "on" } else { "off" }
            );
        }
        Response::Bindings { bindings } => {
            for b in bindings {
                println!("{} -> {}", b.key, b.action);
            }
        }
        Response::State { state } => {
            match state.pending {
                Some(direction) => println!("Pending: {}", direction),
                None => println!("Pending: none"),
            }
            println!("Modifiers: {}", state.settings.modifiers);
            println!(
                "Corners: {}",
                if state.settings.corners_enabled { "on" } else { "off" }
            );
            println!("Active bindings: {}", state.binding_count);
        }
    }

    Ok(())
}

fn to_command(subcmd: SubCommand) -> Result<Command> {
    match subcmd {
        SubCommand::Snap(cmd) => Ok(Command::Snap {
            target: cmd.target.parse::<SnapTarget>().map_err(|e| anyhow!(e))?,
        }),
        SubCommand::Press(cmd) => Ok(Command::Press {
            direction: cmd.direction.parse::<Direction>().map_err(|e| anyhow!(e))?,
        }),
        SubCommand::GetSettings(_) => Ok(Command::GetSettings),
        SubCommand::SetModifiers(cmd) => Ok(Command::SetModifiers {
            modifiers: cmd.modifiers.parse::<ModifierChoice>().map_err(|e| anyhow!(e))?,
        }),
        SubCommand::SetCorners(cmd) => Ok(Command::SetCorners {
            enabled: parse_switch(&cmd.value)?,
        }),
        SubCommand::ListBindings(_) => Ok(Command::ListBindings),
        SubCommand::GetState(_) => Ok(Command::GetState),
        SubCommand::Quit(_) => Ok(Command::Quit),
        SubCommand::Start(_)
        | SubCommand::Version(_)
        | SubCommand::GrantAccessibility(_)
        | SubCommand::OpenLoginItems(_) => {
            bail!("This command does not talk to the daemon")
        }
    }
}

fn parse_switch(s: &str) -> Result<bool> {
    match s.to_lowercase().as_str() {
        "on" | "true" | "yes" => Ok(true),
        "off" | "false" | "no" => Ok(false),
        _ => bail!("Unknown value: {} (use on or off)", s),
    }
}
