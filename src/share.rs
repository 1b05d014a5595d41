//! Share via the terminal clipboard (OSC 52)

use std::io::Write;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

pub const SHARE_TITLE: &str = "May Pasok Ba?";
pub const SHARE_URL: &str = "www.maypasokba.test";

#[derive(thiserror::Error, Debug)]
pub enum ShareError {
    #[error("could not write to terminal: {0}")]
    Io(#[from] std::io::Error),
}

/// Text placed on the clipboard
pub fn share_payload(title: &str, url: &str) -> String {
    format!("{title} {url}")
}

/// OSC 52 "set clipboard" sequence for `text`
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

/// Write the share payload to the terminal as a clipboard request.
pub fn share_to_terminal<W: Write>(out: &mut W, title: &str, url: &str) -> Result<(), ShareError> {
    let sequence = osc52_sequence(&share_payload(title, url));
    out.write_all(sequence.as_bytes())?;
    out.flush()?;
    Ok(())
}
