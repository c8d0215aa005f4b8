//! Rendering of console replies

use exlaunch_core::ResponseFrame;
use std::io::{self, Write};

/// Printed before the content when the console flags the request as failed
pub const FAILURE_NOTICE: &str = "Request failed";

/// Print a reply: the failure notice if needed, then the content regardless
pub fn print_response<W: Write>(frame: &ResponseFrame, out: &mut W) -> io::Result<()> {
    if !frame.is_success() {
        writeln!(out, "{}", FAILURE_NOTICE)?;
    }
    writeln!(out, "{}", frame.content_lossy())?;
    out.flush()
}
