//! Side effects requested by [`crate::handler::UpdateAction`]

use iprefs_core::prelude::*;

/// Open `url` with the platform's default handler
///
/// Spawns the opener and returns without waiting for it.
pub fn open_url(url: &str) -> Result<()> {
    info!("Opening {}", url);
    spawn_opener(url)?;
    Ok(())
}

fn spawn_opener(url: &str) -> std::io::Result<()> {
    use std::process::Command;

    #[cfg(target_os = "macos")]
    {
        Command::new("open").arg(url).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "linux")]
    {
        Command::new("xdg-open").arg(url).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "windows")]
    {
        Command::new("cmd").args(["/C", "start", "", url]).spawn()?;
        return Ok(());
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        return Err(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "no URL opener available for this platform",
        ));
    }

    #[allow(unreachable_code)]
    Ok(())
}
