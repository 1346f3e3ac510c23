//! `ballast platform` command

use anyhow::Result;

use crate::cli::PlatformArgs;
use ballast::config::platform::{detect_platform, host_platform, PlatformFamily};

pub fn execute(args: PlatformArgs) -> Result<()> {
    let platform = if args.raw {
        host_platform()
    } else {
        detect_platform()
    };

    println!("platform: {}", platform);
    match PlatformFamily::classify(&platform) {
        Ok(family) => println!("family: {}", family),
        Err(_) => println!("family: unsupported"),
    }

    Ok(())
}
