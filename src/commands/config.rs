use crate::{
    libs::{
        config::{render_config, Config},
        messages::Message,
    },
    msg_print,
};
use anyhow::{Context, Result};
use clap::Args;
use std::fs;

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[arg(short, long = "show-sensitive", help = "Show sensitive information like API tokens")]
    show_sensitive: bool,
}

pub fn cmd(args: ConfigArgs) -> Result<()> {
    let path = Config::locate()?;
    let display_path = fs::canonicalize(&path).unwrap_or_else(|_| path.clone());
    msg_print!(Message::ConfigFileHeader(display_path.display().to_string()));

    let raw = fs::read_to_string(&path).with_context(|| format!("failed to read {}", path.display()))?;
    let rendered = render_config(&raw, args.show_sensitive).with_context(|| format!("failed to decode {}", path.display()))?;

    msg_print!(Message::ConfigContentsHeader, true);
    println!("{}", rendered);

    Ok(())
}
