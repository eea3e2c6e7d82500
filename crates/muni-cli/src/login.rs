//! # Login Subcommand
//!
//! Walks the two-factor flow stage by stage, printing the machine's
//! progression — useful for demonstrating the recoverable-failure
//! semantics (wrong code, back, resend).

use clap::Args;

use muni_admin::AdminConsole;
use muni_auth::Channel;

/// Arguments for the login subcommand.
#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Code delivery channel (email or sms).
    #[arg(long)]
    pub channel: Option<Channel2fa>,

    /// Trigger a code re-send before submitting.
    #[arg(long)]
    pub resend: bool,
}

/// Clap-facing channel selector.
#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum Channel2fa {
    Email,
    Sms,
}

impl From<Channel2fa> for Channel {
    fn from(value: Channel2fa) -> Self {
        match value {
            Channel2fa::Email => Channel::Email,
            Channel2fa::Sms => Channel::Sms,
        }
    }
}

pub fn run(
    args: LoginArgs,
    console: &mut AdminConsole,
    email: &str,
    password: &str,
    code: &str,
) -> anyhow::Result<()> {
    console.login(email, password)?;
    println!("credentials accepted, one-time code sent");

    if let Some(channel) = args.channel {
        console.select_channel(channel.into())?;
        println!("delivery channel: {}", Channel::from(channel));
    }
    if args.resend {
        console.resend_code()?;
        println!("code re-sent");
    }

    match console.submit_code(code) {
        Ok(()) => println!("authentication successful — session started"),
        Err(e) => println!("code rejected ({e}); still at the code stage"),
    }
    Ok(())
}
