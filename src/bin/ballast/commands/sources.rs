//! `ballast sources` command

use anyhow::Result;

use crate::cli::SourcesArgs;
use ballast::config::platform::detect_platform;
use ballast::targets::sources::source_files;

pub fn execute(args: SourcesArgs) -> Result<()> {
    let platform = if args.unfiltered {
        None
    } else {
        Some(
            args.platform
                .clone()
                .unwrap_or_else(detect_platform),
        )
    };

    let files = source_files(&args.dir, &args.ext, platform.as_deref())?;
    for file in &files {
        println!("{}", file.display());
    }

    Ok(())
}
