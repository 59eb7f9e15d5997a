use std::io;
use std::process::{Command, Stdio};

/// Program and arguments that hand `url` to the desktop's default handler.
fn launcher(url: &str) -> Option<(&'static str, Vec<String>)> {
    let (program, mut args): (&str, Vec<String>) = if cfg!(target_os = "macos") {
        ("open", Vec::new())
    } else if cfg!(target_os = "windows") {
        // `start` treats its first quoted argument as a window title.
        ("cmd", vec!["/c".into(), "start".into(), String::new()])
    } else if cfg!(unix) {
        ("xdg-open", Vec::new())
    } else {
        return None;
    };
    args.push(url.to_string());
    Some((program, args))
}

/// Open `url` without waiting for the handler. Its output is discarded so it
/// cannot draw over the terminal UI.
pub fn open_url(url: &str) -> io::Result<()> {
    let (program, args) = launcher(url).ok_or_else(|| {
        io::Error::new(io::ErrorKind::Unsupported, "no URL opener for this platform")
    })?;
    Command::new(program)
        .args(&args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
}
