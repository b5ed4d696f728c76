use clap::Parser;
use lararium_zwave::{command_class_name, Decoded, Encode};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version)]
struct Args {
    #[arg(env, long, default_value = "info")]
    log_level: String,
    /// Frame count declared by the transport for every message.
    #[arg(env, long)]
    expected_frames: Option<usize>,
    /// Print the registered command headers and exit.
    #[arg(long)]
    list: bool,
    /// Hex encoded messages, e.g. `850205`.
    messages: Vec<String>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    init_tracing(&[("lararium_zwave", args.log_level.as_str())]);

    if args.list {
        for (command_class, command) in lararium_zwave::registered_commands() {
            println!("{} 0x{command:02X}", command_class_name(command_class));
        }
        return Ok(());
    }

    for message in &args.messages {
        let bytes = hex::decode(message.trim())?;
        let frames = match args.expected_frames {
            Some(expected_frames) => lararium_zwave::decode_exact(&bytes, expected_frames),
            None => lararium_zwave::decode_all(&bytes),
        };
        match frames {
            Ok(frames) => {
                tracing::info!(input = %message, frames = frames.len(), "decoded message");
                for frame in &frames {
                    print_frame(frame);
                }
            }
            Err(error) => tracing::error!(input = %message, %error, "failed to decode message"),
        }
    }

    Ok(())
}

fn print_frame(frame: &Decoded) {
    println!(
        "{} 0x{:02X} [{} bytes] {:?}",
        command_class_name(frame.command_class),
        frame.command_id,
        frame.consumed_length,
        frame.command,
    );
    let encoded = frame.command.encode();
    if encoded.len() != frame.consumed_length {
        tracing::warn!(
            consumed_length = frame.consumed_length,
            encoded_length = encoded.len(),
            "re-encoded frame length differs"
        );
    }
}

fn init_tracing(filter: &[(&str, &str)]) {
    let filter = filter
        .iter()
        .map(|(name, level)| format!("{}={}", name, level))
        .collect::<Vec<_>>()
        .join(",");
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();
}
